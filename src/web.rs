use askama::Template;
use axum::response::{Html, IntoResponse};

use crate::model::language::{
    DEFAULT_SOURCE_CODE, DEFAULT_TARGET_CODE, Language, SOURCE_LANGUAGES, TARGET_LANGUAGES,
};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    source_languages: &'static [Language],
    target_languages: &'static [Language],
    selected_source: &'static str,
    selected_target: &'static str,
}

pub async fn index_page() -> impl IntoResponse {
    Html(
        IndexTemplate {
            source_languages: SOURCE_LANGUAGES.as_slice(),
            target_languages: TARGET_LANGUAGES,
            selected_source: DEFAULT_SOURCE_CODE,
            selected_target: DEFAULT_TARGET_CODE,
        }
        .render()
        .unwrap_or_default(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_renders_catalogs() {
        let html = IndexTemplate {
            source_languages: SOURCE_LANGUAGES.as_slice(),
            target_languages: TARGET_LANGUAGES,
            selected_source: DEFAULT_SOURCE_CODE,
            selected_target: DEFAULT_TARGET_CODE,
        }
        .render()
        .unwrap();

        assert!(html.contains(r#"<option value="auto" selected>Auto-Detect</option>"#));
        assert!(html.contains(r#"<option value="es" selected>Spanish</option>"#));
        assert!(html.contains(r#"<option value="fr">French</option>"#));
        assert!(html.contains(r#"id="source-text""#));
    }
}
