use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod model;
mod state;
mod web;

use config::Config;
use model::gemini::{GeminiClient, SamplingConfig};
use model::translator::Translator;
use state::AppState;

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Browser front end
        .route("/", get(web::index_page))
        // Translation API
        .route(
            "/api/translate",
            get(api::translate::translate_get).post(api::translate::translate_post),
        )
        .route("/api/languages", get(api::languages::list_languages))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let model = Arc::new(GeminiClient::new(&config.gemini)?);
    let sampling = SamplingConfig {
        temperature: config.gemini.temperature,
    };

    let state = Arc::new(AppState {
        translator: Translator::new(model, sampling),
    });

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Translator listening on {}", config.bind_addr);
    axum::serve(listener, app(state)).await?;

    Ok(())
}
