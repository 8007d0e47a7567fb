//! Auth context consumed by the navigation panel
//!
//! The panel treats authentication as a black box: it reads the current user
//! and asks for a sign-out. How the session is established is up to the
//! server behind `/api/session`.

use hsq_types::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_location, use_navigate};

use crate::api;

/// Current user and sign-out action
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub user: RwSignal<Option<User>>,
    on_sign_out: Callback<()>,
}

impl AuthContext {
    pub fn new(user: Option<User>, on_sign_out: Callback<()>) -> Self {
        Self {
            user: RwSignal::new(user),
            on_sign_out,
        }
    }

    /// Role of the signed-in user, as reported by the auth provider
    pub fn role(&self) -> Option<String> {
        self.user
            .with(|user| user.as_ref().map(|u| u.role.clone()))
    }

    /// Forget the user locally, then hand over to the provider's sign-out
    pub fn sign_out(&self) {
        self.user.set(None);
        self.on_sign_out.run(());
    }
}

/// Landing route after sign-out
pub const LOGIN_PATH: &str = "/login";

/// Whether a page loaded at `path` should ask the server for the session.
///
/// The login page never does, so reloading it after sign-out stays signed out.
pub fn loads_session(path: &str) -> bool {
    path != LOGIN_PATH
}

/// Auth provider component: loads the session on mount and wires sign-out.
///
/// Must be rendered inside a `<Router>`.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let location = use_location();
    // Client-side navigation keeps the cleared user; a reload would fetch it again
    let navigate = StoredValue::new_local(use_navigate());

    let on_sign_out = Callback::new(move |_| {
        spawn_local(async move {
            if let Err(e) = api::logout().await {
                leptos::logging::warn!("Sign-out request failed: {}", e);
            }
            navigate.with_value(|navigate| navigate(LOGIN_PATH, Default::default()));
        });
    });

    let auth = AuthContext::new(None, on_sign_out);

    // Effects only run in the browser
    Effect::new(move |_| {
        if !loads_session(&location.pathname.get_untracked()) {
            return;
        }
        spawn_local(async move {
            match api::fetch_session().await {
                Ok(user) => auth.user.set(user),
                Err(e) => {
                    leptos::logging::warn!("Failed to load session: {}", e);
                    auth.user.set(None);
                }
            }
        });
    });

    provide_context(auth);

    children()
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_sign_out_clears_user_and_notifies_provider() {
        let owner = Owner::new();
        owner.with(|| {
            let calls = Arc::new(AtomicUsize::new(0));
            let counter = Arc::clone(&calls);
            let auth = AuthContext::new(
                Some(User::new("Mina", "mina@hsqtowers.com", "Manager")),
                Callback::new(move |_| {
                    counter.fetch_add(1, Ordering::SeqCst);
                }),
            );

            assert_eq!(auth.role().as_deref(), Some("Manager"));

            auth.sign_out();

            assert_eq!(auth.role(), None);
            assert_eq!(calls.load(Ordering::SeqCst), 1);
        });
    }

    #[test]
    fn test_user_stays_signed_out_after_sign_out() {
        let owner = Owner::new();
        owner.with(|| {
            let auth = AuthContext::new(
                Some(User::new("Admin Manager", "admin@hsqtowers.com", "admin")),
                Callback::new(|_| {}),
            );

            auth.sign_out();
            assert_eq!(auth.user.get_untracked(), None);

            // The page sign-out lands on does not reload the session
            assert!(!loads_session(LOGIN_PATH));
            assert_eq!(auth.role(), None);
        });
    }

    #[test]
    fn test_other_pages_load_session() {
        assert!(loads_session("/"));
        assert!(loads_session("/dashboard"));
        assert!(loads_session("/login/help"));
    }
}
