//! Web router using Axum

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use hsq_core::PanelConfig;
use hsq_types::User;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{debug, info};

use crate::api::NavigationResponse;
use crate::settings::PanelSettings;

type AppState = Arc<PanelConfig>;

fn api_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/config", get(config_handler))
        .route("/api/navigation", get(navigation_handler))
        .route("/api/session", get(session_handler))
        .route("/api/session/logout", post(logout_handler))
        .layer(cors)
}

/// Create the API router
pub fn create_router(config: Arc<PanelConfig>) -> Router {
    api_routes().with_state(config)
}

/// API router that also serves the compiled frontend from `dist`.
///
/// Unknown paths fall back to `index.html` so client-side routes survive a reload.
pub fn create_router_with_frontend(config: Arc<PanelConfig>, dist: &Path) -> Router {
    let frontend = ServeDir::new(dist).fallback(ServeFile::new(dist.join("index.html")));

    api_routes().fallback_service(frontend).with_state(config)
}

async fn health_handler(State(config): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "entries": config.navigation.len(),
    }))
}

async fn config_handler(State(config): State<AppState>) -> Json<PanelSettings> {
    Json(PanelSettings {
        brand: config.brand.clone(),
        identity: config.identity.clone(),
        navigation: config.navigation.clone(),
    })
}

#[derive(Debug, Deserialize)]
struct NavigationQuery {
    role: Option<String>,
    path: Option<String>,
}

/// Menu for a role and path; no role means no items
async fn navigation_handler(
    State(config): State<AppState>,
    Query(query): Query<NavigationQuery>,
) -> Json<NavigationResponse> {
    let role = query.role.filter(|r| !r.is_empty());
    let path = query.path.unwrap_or_else(|| "/".to_string());
    let items = config.menu(role.as_deref(), &path);

    debug!(role = ?role, path = %path, items = items.len(), "Navigation requested");

    Json(NavigationResponse { role, path, items })
}

async fn session_handler(State(config): State<AppState>) -> Json<Option<User>> {
    Json(config.session.clone())
}

async fn logout_handler() -> StatusCode {
    info!("Sign-out requested");
    StatusCode::NO_CONTENT
}
