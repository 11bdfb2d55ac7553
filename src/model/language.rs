use std::sync::LazyLock;

use serde::Serialize;

use crate::error::AppError;

pub const AUTO_DETECT_CODE: &str = "auto";
pub const AUTO_DETECT_NAME: &str = "Auto-Detect";

pub const DEFAULT_SOURCE_CODE: &str = AUTO_DETECT_CODE;
pub const DEFAULT_TARGET_CODE: &str = "es";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

const fn lang(code: &'static str, name: &'static str) -> Language {
    Language { code, name }
}

pub const AUTO_DETECT: Language = lang(AUTO_DETECT_CODE, AUTO_DETECT_NAME);

pub static TARGET_LANGUAGES: &[Language] = &[
    lang("en", "English"),
    lang("es", "Spanish"),
    lang("fr", "French"),
    lang("de", "German"),
    lang("it", "Italian"),
    lang("pt", "Portuguese"),
    lang("nl", "Dutch"),
    lang("ru", "Russian"),
    lang("uk", "Ukrainian"),
    lang("pl", "Polish"),
    lang("tr", "Turkish"),
    lang("ar", "Arabic"),
    lang("hi", "Hindi"),
    lang("bn", "Bengali"),
    lang("ta", "Tamil"),
    lang("zh", "Chinese (Simplified)"),
    lang("ja", "Japanese"),
    lang("ko", "Korean"),
    lang("vi", "Vietnamese"),
    lang("th", "Thai"),
    lang("id", "Indonesian"),
    lang("sv", "Swedish"),
    lang("el", "Greek"),
];

/// Auto-detect first, then every target language.
pub static SOURCE_LANGUAGES: LazyLock<Vec<Language>> = LazyLock::new(|| {
    std::iter::once(AUTO_DETECT)
        .chain(TARGET_LANGUAGES.iter().copied())
        .collect()
});

/// Source side of a translation: a named language or "let the model infer it".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLanguage {
    AutoDetect,
    Named(String),
}

impl SourceLanguage {
    /// `"Auto-Detect"` is the sentinel; any other display name is taken as-is.
    pub fn from_name(name: &str) -> Self {
        if name == AUTO_DETECT_NAME {
            SourceLanguage::AutoDetect
        } else {
            SourceLanguage::Named(name.to_string())
        }
    }
}

fn lookup<'a>(catalog: &'a [Language], code: &str) -> Option<&'a Language> {
    let code = code.trim();
    catalog.iter().find(|l| l.code.eq_ignore_ascii_case(code))
}

fn supported_codes(catalog: &[Language]) -> String {
    catalog.iter().map(|l| l.code).collect::<Vec<_>>().join(", ")
}

pub fn find_source(code: &str) -> Result<SourceLanguage, AppError> {
    match lookup(&SOURCE_LANGUAGES, code) {
        Some(l) if l.code == AUTO_DETECT_CODE => Ok(SourceLanguage::AutoDetect),
        Some(l) => Ok(SourceLanguage::Named(l.name.to_string())),
        None => Err(AppError::BadRequest(format!(
            "Unsupported source language code: '{}'. Supported: {}",
            code,
            supported_codes(&SOURCE_LANGUAGES)
        ))),
    }
}

pub fn find_target(code: &str) -> Result<&'static Language, AppError> {
    lookup(TARGET_LANGUAGES, code).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Unsupported target language code: '{}'. Supported: {}",
            code,
            supported_codes(TARGET_LANGUAGES)
        ))
    })
}
