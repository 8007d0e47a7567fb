use serde::{Deserialize, Serialize};

use super::filter::filter_entries;
use super::matcher::is_active;
use crate::models::{Icon, NavEntry};

/// A filtered entry annotated with its active state, ready to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub href: String,
    pub icon: Icon,
    pub active: bool,
}

/// Filter `entries` for `user_role`, then mark the ones matching `current_path`
pub fn build_menu(
    entries: &[NavEntry],
    user_role: Option<&str>,
    current_path: &str,
) -> Vec<MenuItem> {
    filter_entries(entries, user_role)
        .into_iter()
        .map(|entry| MenuItem {
            name: entry.name.clone(),
            href: entry.href.clone(),
            icon: entry.icon,
            active: is_active(current_path, &entry.href),
        })
        .collect()
}

/// First active item, if any
pub fn active_item(items: &[MenuItem]) -> Option<&MenuItem> {
    items.iter().find(|item| item.active)
}
