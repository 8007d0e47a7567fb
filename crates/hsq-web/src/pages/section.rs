//! Section page - resolves the current path against the visible menu

use hsq_types::{active_item, build_menu, Icon};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::auth::use_auth;
use crate::components::SectionPlaceholder;
use crate::settings::use_panel;

/// Page for any configured section.
///
/// Only entries visible to the current role resolve, so a manager typing
/// `/Revenue` gets the unavailable notice rather than the section.
#[component]
pub fn SectionPage() -> impl IntoView {
    let auth = use_auth();
    let panel = use_panel();
    let location = use_location();

    let current = move || {
        let role = auth.role();
        let path = location.pathname.get();
        panel.settings.with(|s| {
            let menu = build_menu(&s.navigation, role.as_deref(), &path);
            active_item(&menu).cloned()
        })
    };

    view! {
        <div class="page section-page">
            {move || match current() {
                Some(item) => view! {
                    <SectionPlaceholder title=item.name icon=item.icon />
                }
                .into_any(),
                None if location.pathname.with(|p| p == "/") => view! {
                    <SectionPlaceholder
                        title="Welcome"
                        icon=Icon::Home
                        description="Choose a section from the menu."
                    />
                }
                .into_any(),
                None => view! {
                    <SectionPlaceholder
                        title="Not available"
                        icon=Icon::Unknown
                        description="This page does not exist or is not available for your role."
                    />
                }
                .into_any(),
            }}
        </div>
    }
}
