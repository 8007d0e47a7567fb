//! Leptos UI components

mod header;
mod icon;
mod section_placeholder;
mod sidebar;

pub use header::Header;
pub use icon::{glyph_paths, IconGlyph};
pub use section_placeholder::SectionPlaceholder;
pub use sidebar::{dispatch, Sidebar, SidebarAction};
