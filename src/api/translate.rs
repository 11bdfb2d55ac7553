use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use tracing::Instrument;

use crate::error::AppError;
use crate::model::language::{self, DEFAULT_SOURCE_CODE};
use crate::model::translator::TranslationRequest;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TranslateParams {
    #[serde(default = "default_from")]
    pub from: String,
    pub to: String,
    pub text: String,
}

fn default_from() -> String {
    DEFAULT_SOURCE_CODE.to_string()
}

async fn do_translate(state: &AppState, params: TranslateParams) -> Result<String, AppError> {
    if params.text.trim().is_empty() {
        return Err(AppError::BadRequest("Text to translate must not be empty".into()));
    }

    let source = language::find_source(&params.from)?;
    let target = language::find_target(&params.to)?;

    let request = TranslationRequest {
        text: params.text,
        source,
        target: target.name.to_string(),
    };

    let span = tracing::info_span!(
        "translate",
        request_id = %uuid::Uuid::new_v4(),
        from = %params.from,
        to = %target.code,
    );
    let translation = state.translator.translate(&request).instrument(span).await?;

    Ok(translation)
}

pub async fn translate_get(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TranslateParams>,
) -> Result<String, AppError> {
    do_translate(&state, params).await
}

pub async fn translate_post(
    State(state): State<Arc<AppState>>,
    Json(params): Json<TranslateParams>,
) -> Result<String, AppError> {
    do_translate(&state, params).await
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::model::gemini::SamplingConfig;
    use crate::model::translator::tests::StubModel;
    use crate::model::translator::Translator;
    use crate::state::AppState;

    fn app_with(model: Arc<StubModel>) -> axum::Router {
        let state = Arc::new(AppState {
            translator: Translator::new(model, SamplingConfig::default()),
        });
        crate::app(state)
    }

    async fn body_string(resp: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/translate")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_post_success() {
        let model = StubModel::replying(" Hola, mundo! ");
        let resp = app_with(model.clone())
            .oneshot(post_json(r#"{"from":"auto","to":"es","text":"Hello, world!"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, "Hola, mundo!");
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_post_defaults_to_auto_detect() {
        let model = StubModel::replying("Bonjour");
        let resp = app_with(model.clone())
            .oneshot(post_json(r#"{"to":"fr","text":"Hello"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(model.prompts.lock().unwrap()[0].contains("from its original language to French"));
    }

    #[tokio::test]
    async fn test_get_success() {
        let model = StubModel::replying("Hallo Welt");
        let req = Request::builder()
            .uri("/api/translate?from=en&to=de&text=Hello%20world")
            .body(Body::empty())
            .unwrap();
        let resp = app_with(model.clone()).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, "Hallo Welt");

        let prompt = model.prompts.lock().unwrap()[0].clone();
        assert!(prompt.contains("from English to German"));
        assert!(prompt.contains("Hello world"));
    }

    #[tokio::test]
    async fn test_blank_text_never_reaches_model() {
        let model = StubModel::replying("unused");
        let resp = app_with(model.clone())
            .oneshot(post_json(r#"{"from":"en","to":"fr","text":"   "}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_unknown_language_rejected() {
        let model = StubModel::replying("unused");
        let resp = app_with(model.clone())
            .oneshot(post_json(r#"{"from":"en","to":"auto","text":"Hi"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(resp).await.contains("Unsupported target language code"));
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_model_failure_is_bad_gateway() {
        let model = StubModel::failing("timeout");
        let resp = app_with(model)
            .oneshot(post_json(r#"{"from":"en","to":"fr","text":"Hello"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(body_string(resp).await, "Error: Translation failed. timeout");
    }

    #[tokio::test]
    async fn test_translation_starting_with_error_is_ok() {
        let model = StubModel::replying("Error: archivo no encontrado");
        let resp = app_with(model)
            .oneshot(post_json(r#"{"from":"en","to":"es","text":"Error: file not found"}"#))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_string(resp).await, "Error: archivo no encontrado");
    }
}
