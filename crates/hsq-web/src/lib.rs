//! hsq-web - Navigation panel frontend and API server using Leptos + Axum

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod auth;
pub mod components;
pub mod pages;
pub mod settings;

#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
pub use auth::{use_auth, AuthContext, AuthProvider};
pub use settings::{use_panel, PanelContext, PanelSettings};

#[cfg(feature = "ssr")]
pub use router::{create_router, create_router_with_frontend};

#[cfg(feature = "ssr")]
use {
    anyhow::{Context, Result},
    hsq_core::PanelConfig,
    std::{net::SocketAddr, path::PathBuf, sync::Arc},
    tokio::net::TcpListener,
    tracing::info,
};

/// Run the web server.
///
/// Serves the API, plus the compiled frontend from `dist` when given.
#[cfg(feature = "ssr")]
pub async fn run(config: Arc<PanelConfig>, port: u16, dist: Option<PathBuf>) -> Result<()> {
    let router = match dist {
        Some(dir) => {
            info!(dist = %dir.display(), "Serving frontend");
            create_router_with_frontend(config, &dir)
        }
        None => create_router(config),
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Web server listening on http://{}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
