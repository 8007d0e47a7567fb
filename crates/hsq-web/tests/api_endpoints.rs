//! Integration tests for the API router

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use hsq_core::PanelConfig;
use hsq_types::User;
use hsq_web::api::NavigationResponse;
use hsq_web::PanelSettings;
use std::sync::Arc;
use tower::ServiceExt;

async fn get_json<T: serde::de::DeserializeOwned>(uri: &str) -> (StatusCode, T) {
    let router = hsq_web::create_router(Arc::new(PanelConfig::default()));
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_health() {
    let (status, body): (_, serde_json::Value) = get_json("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["entries"], 10);
}

#[tokio::test]
async fn test_navigation_for_manager() {
    let (status, body): (_, NavigationResponse) =
        get_json("/api/navigation?role=Manager&path=/Discount/summer").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.role.as_deref(), Some("Manager"));
    assert_eq!(body.items.len(), 1);
    assert_eq!(body.items[0].name, "Discounts");
    assert!(body.items[0].active);
}

#[tokio::test]
async fn test_navigation_without_role_is_empty() {
    let (status, body): (_, NavigationResponse) = get_json("/api/navigation?path=/dashboard").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.role, None);
    assert!(body.items.is_empty());
}

#[tokio::test]
async fn test_navigation_dashboard_is_exact() {
    let (_, body): (_, NavigationResponse) =
        get_json("/api/navigation?role=admin&path=/dashboard/widgets").await;

    assert_eq!(body.items.len(), 10);
    assert!(body.items.iter().all(|item| !item.active));
    assert_eq!(body.path, "/dashboard/widgets");
}

#[tokio::test]
async fn test_config_and_session() {
    let (status, settings): (_, PanelSettings) = get_json("/api/config").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(settings, PanelSettings::default());

    let (status, user): (_, Option<User>) = get_json("/api/session").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(user.map(|u| u.role), Some("admin".to_string()));
}

#[tokio::test]
async fn test_logout() {
    let router = hsq_web::create_router(Arc::new(PanelConfig::default()));
    let request = Request::builder()
        .method("POST")
        .uri("/api/session/logout")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_session_without_configured_user_is_null() {
    let config = PanelConfig {
        session: None,
        ..PanelConfig::default()
    };
    let router = hsq_web::create_router(Arc::new(config));
    let request = Request::builder()
        .uri("/api/session")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"null");
}
