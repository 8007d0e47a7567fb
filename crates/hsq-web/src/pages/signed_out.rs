//! Landing page after sign-out

use hsq_types::Icon;
use leptos::prelude::*;

use crate::components::SectionPlaceholder;

#[component]
pub fn SignedOut() -> impl IntoView {
    view! {
        <div class="page signed-out-page">
            <SectionPlaceholder
                title="Signed out"
                icon=Icon::LogOut
                description="Your session has ended."
            />
            // Full reload so the auth provider fetches the session again
            <a href="/" rel="external" class="btn btn-primary">"Sign in again"</a>
        </div>
    }
}
