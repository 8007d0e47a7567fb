//! hsq-types - Shared navigation types for hsq-admin
//!
//! This crate contains pure data structures and the navigation logic that
//! every renderer shares. No tokio, no async runtime - just serde types and
//! total functions.
//!
//! Used by:
//! - hsq-core (configuration loading)
//! - hsq-web (Leptos frontend in WASM and the API server)
//! - hsq-admin (CLI menu preview)

pub mod models;
pub mod nav;

// Re-export model types
pub use models::{initials, Brand, Icon, Identity, NavEntry, Role, RoleRestriction, User};

// Re-export navigation logic
pub use nav::{
    active_item, build_menu, default_entries, filter_entries, filter_for_user, is_active,
    requires_exact_match, MenuItem, DASHBOARD_HREF, ROOT_HREF,
};
