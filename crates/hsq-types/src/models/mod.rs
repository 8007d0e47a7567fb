//! Data models for the navigation panel

pub mod brand;
pub mod nav;
pub mod role;
pub mod user;

pub use brand::Brand;
pub use nav::{Icon, NavEntry, RoleRestriction};
pub use role::Role;
pub use user::{initials, Identity, User};
