//! Server-side rendering checks for the sidebar

use hsq_types::User;
use hsq_web::components::Sidebar;
use hsq_web::{AuthContext, PanelContext, PanelSettings};
use leptos::prelude::*;

fn render(open: bool, user: Option<User>, path: &str) -> String {
    let owner = Owner::new();
    owner.with(|| {
        let (is_open, _) = signal(open);
        let (current_path, _) = signal(path.to_string());

        provide_context(AuthContext::new(user, Callback::new(|_| {})));
        provide_context(PanelContext::new(PanelSettings::default()));

        view! { <Sidebar is_open current_path /> }.to_html()
    })
}

/// Opening tag of the element carrying `attr`
fn tag_with<'a>(html: &'a str, attr: &str) -> &'a str {
    let at = html.find(attr).unwrap_or_else(|| panic!("{attr} not rendered"));
    let start = html[..at].rfind('<').unwrap();
    let end = at + html[at..].find('>').unwrap();
    &html[start..=end]
}

fn manager() -> Option<User> {
    Some(User::new("Mina Patel", "mina@hsqtowers.com", "Manager"))
}

#[test]
fn test_closed_sidebar_has_no_backdrop() {
    let html = render(false, manager(), "/dashboard");
    assert!(!html.contains("sidebar-backdrop"));
    assert!(!html.contains("sidebar-open"));
    assert!(html.contains("HSQ ADMIN"));
}

#[test]
fn test_open_sidebar_renders_backdrop() {
    let html = render(true, manager(), "/dashboard");
    assert!(html.contains("sidebar-backdrop"));
    assert!(html.contains("sidebar-open"));
}

#[test]
fn test_manager_sees_only_discounts() {
    let html = render(false, manager(), "/Discount/summer");
    assert_eq!(html.matches("class=\"nav-item\"").count(), 1);
    assert!(html.contains("Discounts"));
    assert!(!html.contains("Invoices"));
    assert!(html.contains("aria-current=\"page\""));
    assert!(html.contains("sidebar-link-active"));
}

#[test]
fn test_no_match_renders_default_styling() {
    let html = render(false, manager(), "/reports");
    assert!(html.contains("Discounts"));
    assert!(!html.contains("sidebar-link-active"));
    assert!(!html.contains("aria-current"));
}

#[test]
fn test_signed_out_renders_empty_menu() {
    let html = render(false, None, "/dashboard");
    assert!(!html.contains("class=\"nav-item\""));
    assert!(html.contains("Sign out"));
    // Footer falls back to the configured identity
    assert!(html.contains("Admin Manager"));
    assert!(html.contains("admin@hsqtowers.com"));
}

#[test]
fn test_footer_shows_signed_in_user() {
    let html = render(false, manager(), "/dashboard");
    assert!(html.contains("Mina Patel"));
    assert!(html.contains("MP"));
}

#[test]
fn test_controls_send_their_own_action() {
    let html = render(true, manager(), "/Discount");

    let backdrop = tag_with(&html, "data-action=\"backdrop\"");
    assert!(backdrop.starts_with("<div"));
    assert!(backdrop.contains("sidebar-backdrop"));

    let dismiss = tag_with(&html, "data-action=\"dismiss\"");
    assert!(dismiss.starts_with("<button"));
    assert!(dismiss.contains("sidebar-close"));

    let sign_out = tag_with(&html, "data-action=\"sign-out\"");
    assert!(sign_out.starts_with("<button"));
    assert!(sign_out.contains("sidebar-sign-out"));

    let link = tag_with(&html, "data-action=\"navigate\"");
    assert!(link.starts_with("<a"));
    assert!(link.contains("href=\"/Discount\""));
    assert_eq!(html.matches("data-action=\"navigate\"").count(), 1);
}
