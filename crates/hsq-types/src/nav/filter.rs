use crate::models::{NavEntry, Role, User};

/// Keep the entries visible to `user_role`, in their original order.
///
/// The role is compared case-insensitively. With no role (unauthenticated)
/// only unrestricted entries survive.
pub fn filter_entries<'a>(entries: &'a [NavEntry], user_role: Option<&str>) -> Vec<&'a NavEntry> {
    let role = user_role.map(Role::new);
    entries
        .iter()
        .filter(|entry| entry.is_visible_to(role.as_ref()))
        .collect()
}

/// [`filter_entries`] for an optional user record
pub fn filter_for_user<'a>(entries: &'a [NavEntry], user: Option<&User>) -> Vec<&'a NavEntry> {
    filter_entries(entries, user.map(|u| u.role.as_str()))
}
