//! Role-aware navigation sidebar

use hsq_types::{build_menu, Icon, MenuItem};
use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::icon::IconGlyph;
use crate::auth::use_auth;
use crate::settings::use_panel;

/// User interaction inside the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarAction {
    /// Click on the mobile backdrop
    Backdrop,
    /// Click on the close button in the brand header
    Dismiss,
    /// Click on a navigation link
    Navigate(String),
    SignOut,
}

impl SidebarAction {
    /// Value of the `data-action` attribute on the control that sends this action
    pub fn name(&self) -> &'static str {
        match self {
            SidebarAction::Backdrop => "backdrop",
            SidebarAction::Dismiss => "dismiss",
            SidebarAction::Navigate(_) => "navigate",
            SidebarAction::SignOut => "sign-out",
        }
    }

    /// Whether this interaction should dismiss an overlay sidebar
    pub fn closes_panel(&self) -> bool {
        !matches!(self, SidebarAction::SignOut)
    }
}

// Each control renders and sends the same action value
const BACKDROP: SidebarAction = SidebarAction::Backdrop;
const DISMISS: SidebarAction = SidebarAction::Dismiss;
const SIGN_OUT: SidebarAction = SidebarAction::SignOut;

/// Call `on_close` once if `action` closes the panel. Returns whether it was called.
pub fn dispatch<F: Fn()>(action: &SidebarAction, on_close: Option<F>) -> bool {
    match on_close {
        Some(close) if action.closes_panel() => {
            close();
            true
        }
        _ => false,
    }
}

/// Sidebar with role-filtered navigation.
///
/// Reads the user from [`use_auth`] and the entries from [`use_panel`].
#[component]
pub fn Sidebar(
    /// Panel visibility on narrow viewports
    #[prop(into)]
    is_open: Signal<bool>,
    /// Called on backdrop, close button and link activation
    #[prop(optional)]
    on_close: Option<Callback<()>>,
    /// Current route; defaults to the router location
    #[prop(optional, into)]
    current_path: Option<Signal<String>>,
) -> impl IntoView {
    let auth = use_auth();
    let panel = use_panel();

    let current_path = current_path.unwrap_or_else(|| {
        let location = use_location();
        Signal::derive(move || location.pathname.get())
    });

    let handle = Callback::new(move |action: SidebarAction| {
        dispatch(&action, on_close.map(|cb| move || cb.run(())));
    });

    let menu = move || {
        let role = auth.role();
        let path = current_path.get();
        panel
            .settings
            .with(|s| build_menu(&s.navigation, role.as_deref(), &path))
    };

    let brand = move || panel.settings.with(|s| s.brand.clone());

    // Footer shows the signed-in user, or the configured identity
    let identity = move || {
        auth.user
            .with(|user| user.as_ref().map(|u| u.identity()))
            .unwrap_or_else(|| panel.settings.with(|s| s.identity.clone()))
    };

    view! {
        <>
            <Show when=move || is_open.get()>
                <div
                    class="sidebar-backdrop"
                    data-action=BACKDROP.name()
                    on:click=move |_| handle.run(BACKDROP)
                ></div>
            </Show>

            <aside
                class="sidebar"
                class:sidebar-open=move || is_open.get()
                aria-label="Main navigation"
            >
                <div class="sidebar-brand">
                    <img class="sidebar-logo" src=move || brand().logo alt=move || brand().title />
                    <div class="sidebar-brand-text">
                        <h1 class="sidebar-title">{move || brand().title}</h1>
                        <p class="sidebar-subtitle">{move || brand().subtitle}</p>
                    </div>
                    <button
                        class="sidebar-close"
                        data-action=DISMISS.name()
                        on:click=move |_| handle.run(DISMISS)
                        aria-label="Close sidebar"
                    >
                        <IconGlyph icon=Icon::Close />
                    </button>
                </div>

                <nav class="nav">
                    <ul class="nav-list">
                        {move || {
                            menu()
                                .into_iter()
                                .map(|item| view! { <NavLink item on_select=handle /> })
                                .collect_view()
                        }}
                    </ul>

                    <div class="nav-bottom">
                        <div class="nav-divider"></div>
                        <button
                            class="sidebar-link sidebar-sign-out"
                            data-action=SIGN_OUT.name()
                            on:click=move |_| {
                                handle.run(SIGN_OUT);
                                auth.sign_out();
                            }
                        >
                            <span class="sidebar-link-icon">
                                <IconGlyph icon=Icon::LogOut />
                            </span>
                            <span class="sidebar-link-label">"Sign out"</span>
                        </button>
                    </div>
                </nav>

                <div class="sidebar-identity">
                    <div class="sidebar-avatar">{move || identity().initials()}</div>
                    <div class="sidebar-identity-text">
                        <p class="sidebar-identity-name">{move || identity().name}</p>
                        <p class="sidebar-identity-email">{move || identity().email}</p>
                    </div>
                </div>
            </aside>
        </>
    }
}

/// Single navigation link
#[component]
fn NavLink(item: MenuItem, on_select: Callback<SidebarAction>) -> impl IntoView {
    let MenuItem {
        name,
        href,
        icon,
        active,
    } = item;
    let action = SidebarAction::Navigate(href.clone());

    view! {
        <li class="nav-item">
            <a
                href=href
                class="sidebar-link"
                class:sidebar-link-active=active
                aria-current=active.then_some("page")
                data-action=action.name()
                on:click=move |_| on_select.run(action.clone())
            >
                {active.then(|| view! { <span class="sidebar-link-marker"></span> })}
                <span class="sidebar-link-icon">
                    <IconGlyph icon />
                </span>
                <span class="sidebar-link-label">{name}</span>
                {active.then(|| view! {
                    <span class="sidebar-link-star">
                        <IconGlyph icon=Icon::Star size=12 />
                    </span>
                })}
            </a>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_backdrop_closes_exactly_once() {
        let calls = Cell::new(0);
        let closed = dispatch(&SidebarAction::Backdrop, Some(|| calls.set(calls.get() + 1)));
        assert!(closed);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_dismiss_and_navigate_close() {
        let calls = Cell::new(0);
        let close = || calls.set(calls.get() + 1);

        dispatch(&SidebarAction::Dismiss, Some(close));
        dispatch(&SidebarAction::Navigate("/rooms".to_string()), Some(close));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_sign_out_keeps_panel_open() {
        let calls = Cell::new(0);
        let closed = dispatch(&SidebarAction::SignOut, Some(|| calls.set(calls.get() + 1)));
        assert!(!closed);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_action_names() {
        assert_eq!(SidebarAction::Backdrop.name(), "backdrop");
        assert_eq!(SidebarAction::Dismiss.name(), "dismiss");
        assert_eq!(SidebarAction::Navigate("/rooms".into()).name(), "navigate");
        assert_eq!(SidebarAction::SignOut.name(), "sign-out");
    }

    #[test]
    fn test_missing_callback_is_fine() {
        assert!(!dispatch::<fn()>(&SidebarAction::Backdrop, None));
    }
}
