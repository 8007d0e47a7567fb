//! Placeholder body for sections whose screens live outside this crate

use hsq_types::Icon;
use leptos::prelude::*;

use super::icon::IconGlyph;

/// Section header and an empty workspace
#[component]
pub fn SectionPlaceholder(
    #[prop(into)] title: String,
    icon: Icon,
    /// Optional hint under the title
    #[prop(optional, into)]
    description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">
                <IconGlyph icon size=64 />
            </div>
            <h2 class="empty-state-title">{title}</h2>
            {description.map(|d| view! { <p class="empty-state-description">{d}</p> })}
        </div>
    }
}
