use axum::Json;
use serde::Serialize;

use crate::model::language::{Language, SOURCE_LANGUAGES, TARGET_LANGUAGES};

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub source: &'static [Language],
    pub target: &'static [Language],
}

pub async fn list_languages() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        source: SOURCE_LANGUAGES.as_slice(),
        target: TARGET_LANGUAGES,
    })
}
