//! Main Leptos App component with SPA router

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::api;
use crate::auth::AuthProvider;
use crate::components::{Header, Sidebar};
use crate::pages::{SectionPage, SignedOut};
use crate::settings::{PanelContext, PanelSettings};

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    // Mobile sidebar state
    let (sidebar_open, set_sidebar_open) = signal(false);
    let close_sidebar = Callback::new(move |_| set_sidebar_open.set(false));

    // Built-in settings until the server answers
    let panel = PanelContext::new(PanelSettings::default());
    provide_context(panel);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_settings().await {
                Ok(settings) => panel.settings.set(settings),
                Err(e) => leptos::logging::warn!("Using built-in panel settings: {}", e),
            }
        });
    });

    view! {
        <Router>
            <AuthProvider>
                <div class="app">
                    <Header sidebar_open set_sidebar_open />
                    <div class="layout">
                        <Sidebar is_open=sidebar_open on_close=close_sidebar />
                        <main class="content">
                            <Routes fallback=|| view! { <SectionPage /> }>
                                <Route path=path!("/login") view=SignedOut />
                                <Route path=path!("/*any") view=SectionPage />
                            </Routes>
                        </main>
                    </div>
                </div>
            </AuthProvider>
        </Router>
    }
}
