//! Navigation logic: role filter, active-route matcher and menu projection

mod defaults;
mod filter;
mod matcher;
mod menu;

pub use defaults::default_entries;
pub use filter::{filter_entries, filter_for_user};
pub use matcher::{is_active, requires_exact_match, DASHBOARD_HREF, ROOT_HREF};
pub use menu::{active_item, build_menu, MenuItem};
