/// Root path of the panel
pub const ROOT_HREF: &str = "/";

/// Dashboard path; a prefix match here would light it up on every page
pub const DASHBOARD_HREF: &str = "/dashboard";

/// Whether `href` only matches the exact current path
pub fn requires_exact_match(href: &str) -> bool {
    href == ROOT_HREF || href == DASHBOARD_HREF
}

/// Whether the entry at `entry_href` is active for `current_path`.
///
/// Root and dashboard match exactly; every other entry matches its own path
/// and anything below it by plain string prefix. Uniqueness is not enforced:
/// `/rooms` is also active on `/rooms-extra`.
pub fn is_active(current_path: &str, entry_href: &str) -> bool {
    if requires_exact_match(entry_href) {
        current_path == entry_href
    } else {
        current_path.starts_with(entry_href)
    }
}
