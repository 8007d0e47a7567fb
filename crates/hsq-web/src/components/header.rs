//! Header component

use leptos::prelude::*;

use crate::auth::use_auth;
use crate::settings::use_panel;

/// Header with brand title, signed-in role and mobile hamburger menu
#[component]
pub fn Header(
    sidebar_open: ReadSignal<bool>,
    set_sidebar_open: WriteSignal<bool>,
) -> impl IntoView {
    let auth = use_auth();
    let panel = use_panel();

    view! {
        <header class="header">
            <button
                class="hamburger"
                on:click=move |_| set_sidebar_open.update(|v| *v = !*v)
                aria-label="Toggle sidebar"
                aria-expanded=move || sidebar_open.get().to_string()
            >
                <span class="hamburger-icon">"☰"</span>
            </button>

            <div class="header-content">
                <h1 class="logo">{move || panel.settings.with(|s| s.brand.title.clone())}</h1>
                <p class="subtitle">
                    {move || match auth.role() {
                        Some(role) => format!("Signed in as {}", role.to_lowercase()),
                        None => "Signed out".to_string(),
                    }}
                </p>
            </div>
        </header>
    }
}
