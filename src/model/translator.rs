use std::sync::Arc;

use super::gemini::{SamplingConfig, TextModel};
use super::language::SourceLanguage;
use super::prompt::build_translation_prompt;
use crate::error::TranslateError;

#[derive(Debug, Clone)]
pub struct TranslationRequest {
    pub text: String,
    pub source: SourceLanguage,
    pub target: String,
}

/// Stateless: every call builds a fresh prompt and makes exactly one model call.
#[derive(Clone)]
pub struct Translator {
    model: Arc<dyn TextModel>,
    sampling: SamplingConfig,
}

impl Translator {
    pub fn new(model: Arc<dyn TextModel>, sampling: SamplingConfig) -> Self {
        Translator { model, sampling }
    }

    /// Does not check for empty text; callers reject blank input first.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        let prompt = build_translation_prompt(&request.source, &request.target, &request.text);

        match self.model.generate(&prompt, &self.sampling).await {
            Ok(text) => Ok(text.trim().to_string()),
            Err(err) => {
                tracing::error!("Model call failed: {}", err);
                Err(err)
            }
        }
    }

    /// String-in, string-out form: failures come back as `"Error: Translation failed. ..."`.
    #[allow(dead_code)]
    pub async fn translate_text(
        &self,
        text: &str,
        source_language_name: &str,
        target_language_name: &str,
    ) -> String {
        let request = TranslationRequest {
            text: text.to_string(),
            source: SourceLanguage::from_name(source_language_name),
            target: target_language_name.to_string(),
        };
        match self.translate(&request).await {
            Ok(translation) => translation,
            Err(err) => err.user_message(),
        }
    }
}
