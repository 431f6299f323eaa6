//! HTTP routes and handlers.
//!
//! The router exposes four surfaces:
//! - `GET /quotes/random` — the quote API itself;
//! - `GET /.well-known/ai-plugin.json` — the plugin descriptor with the
//!   hostname placeholder substituted;
//! - `GET /openapi.yaml` — the generated API schema;
//! - `GET /static/*` — assets (logo etc.) served verbatim from disk.
//!
//! Handlers receive the quote store and config through `Arc<AppState>`; there
//! is no process-global state. The store is loaded before the router is built
//! and never mutated, so concurrent readers need no locking.
//!
//! CORS is configured for the hosting chat agent's origin so it can fetch the
//! descriptor cross-origin.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router};
use axum::routing::get;
use log::error;
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;

use quote_store::{QuoteSelection, QuoteStore};

use crate::config::AppConfig;
use crate::manifest;

/// Origin of the hosting chat agent, allowed by the CORS policy.
const PLUGIN_CONSUMER_ORIGIN: &str = "https://chat.openai.com";

/// Shared per-process state handed to every handler.
#[derive(Debug)]
pub struct AppState {
    /// The quote dataset, loaded once before the listener starts.
    pub store: QuoteStore,
    /// Application configuration, loaded once at startup.
    pub config: AppConfig,
}

/// Build the application router with all routes, CORS, and shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let static_dir = state.config.app.static_dir.clone();

    Router::new()
        .route("/quotes/random", get(random_quote))
        .route("/.well-known/ai-plugin.json", get(plugin_descriptor))
        .route("/openapi.yaml", get(openapi_yaml))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(cors_layer())
        .with_state(state)
}

/// CORS policy for the hosting chat agent: exact origin, credentials on,
/// methods and headers mirrored from the request.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::exact(HeaderValue::from_static(
            PLUGIN_CONSUMER_ORIGIN,
        )))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Query parameters accepted by `GET /quotes/random`.
#[derive(Debug, Deserialize)]
struct RandomQuoteParams {
    /// Optional author filter (case-insensitive exact match).
    author: Option<String>,
}

/// Response body for `GET /quotes/random`.
///
/// "No match" is modeled as both fields null with HTTP 200, never as an
/// error status.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// The selected quote text, or null when nothing matched.
    pub quote: Option<String>,
    /// The quote's author, or null when nothing matched.
    pub author: Option<String>,
}

impl From<QuoteSelection> for QuoteResponse {
    fn from(selection: QuoteSelection) -> Self {
        match selection {
            QuoteSelection::Found(record) => QuoteResponse {
                quote: Some(record.quote),
                author: Some(record.author),
            },
            QuoteSelection::NotFound => QuoteResponse {
                quote: None,
                author: None,
            },
        }
    }
}

/// Handler for `GET /quotes/random`.
///
/// An empty `author` value behaves like an absent filter.
async fn random_quote(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RandomQuoteParams>,
) -> Json<QuoteResponse> {
    let author = params.author.as_deref().filter(|a| !a.is_empty());
    let selection = state.store.random_quote(author);
    Json(QuoteResponse::from(selection))
}

/// Handler for `GET /.well-known/ai-plugin.json`.
///
/// Reads the descriptor template from disk on every request and substitutes
/// the hostname placeholder. No caching; the file is tiny.
async fn plugin_descriptor(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, StatusCode> {
    let app = &state.config.app;
    let template = tokio::fs::read_to_string(&app.plugin_manifest)
        .await
        .map_err(|e| {
            error!("Failed to read plugin descriptor {}: {}", app.plugin_manifest, e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    let body = manifest::substitute_hostname(&template, &app.plugin_hostname);
    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    ))
}

/// Handler for `GET /openapi.yaml`.
async fn openapi_yaml(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, StatusCode> {
    let doc = manifest::openapi_document(&state.config.app);
    let yaml = serde_yaml::to_string(&doc).map_err(|e| {
        error!("Failed to render OpenAPI document: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(([(header::CONTENT_TYPE, "application/yaml")], yaml))
}
