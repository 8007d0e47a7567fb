//! Panel settings shared through Leptos context

use hsq_types::{default_entries, Brand, Identity, NavEntry};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Branding, fallback identity and navigation entries, as served by `/api/config`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSettings {
    pub brand: Brand,
    pub identity: Identity,
    pub navigation: Vec<NavEntry>,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            brand: Brand::default(),
            identity: Identity::default(),
            navigation: default_entries(),
        }
    }
}

/// Reactive handle on the current [`PanelSettings`]
#[derive(Clone, Copy)]
pub struct PanelContext {
    pub settings: RwSignal<PanelSettings>,
}

impl PanelContext {
    pub fn new(settings: PanelSettings) -> Self {
        Self {
            settings: RwSignal::new(settings),
        }
    }
}

/// Hook to access the panel settings
pub fn use_panel() -> PanelContext {
    expect_context::<PanelContext>()
}
