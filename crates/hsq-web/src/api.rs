//! API client utilities and shared response types

use gloo_net::http::Request;
use hsq_types::{MenuItem, User};
use serde::{Deserialize, Serialize};

use crate::settings::PanelSettings;

/// Response of `GET /api/navigation`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationResponse {
    pub role: Option<String>,
    pub path: String,
    pub items: Vec<MenuItem>,
}

/// Fetch branding and navigation entries
pub async fn fetch_settings() -> Result<PanelSettings, String> {
    let response = Request::get("/api/config")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<PanelSettings>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Fetch the signed-in user, `None` when signed out
pub async fn fetch_session() -> Result<Option<User>, String> {
    let response = Request::get("/api/session")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Option<User>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// End the current session
pub async fn logout() -> Result<(), String> {
    let response = Request::post("/api/session/logout")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    Ok(())
}
