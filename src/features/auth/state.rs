//! Auth session state and context for the frontend. The provider hydrates
//! the current user once on mount using the cookie-based session endpoint
//! and exposes derived auth signals for guards, layouts, and the sidebar.
//! Only non-sensitive profile metadata is stored in memory; the session
//! credential stays in an `HttpOnly` cookie.

use crate::features::auth::{client, types::CurrentUser};
use leptos::{prelude::*, task::spawn_local};

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub user: RwSignal<Option<CurrentUser>>,
    pub is_authenticated: Signal<bool>,
    /// True until the first session probe settles. Guards must not redirect
    /// while this is set or a valid cookie session gets bounced on reload.
    pub is_loading: RwSignal<bool>,
}

impl AuthContext {
    /// Builds a context around the provided user signal.
    fn new(user: RwSignal<Option<CurrentUser>>) -> Self {
        let is_authenticated = Signal::derive(move || user.get().is_some());
        Self {
            user,
            is_authenticated,
            is_loading: RwSignal::new(true),
        }
    }

    /// Updates the in-memory user after a verified sign-in.
    pub fn set_user(&self, user: CurrentUser) {
        self.user.set(Some(user));
    }

    /// Clears the in-memory user, typically on sign-out.
    pub fn clear_session(&self) {
        self.user.set(None);
    }

    /// Fetches the current account and syncs the context with the result.
    /// Returns whether a verified session exists. This is the only entry
    /// point allowed to mutate session state from network responses.
    pub async fn check_auth_user(&self) -> bool {
        match client::fetch_current_user().await {
            Ok(Some(user)) => {
                self.set_user(user);
                true
            }
            Ok(None) => {
                self.clear_session();
                false
            }
            Err(_) => false,
        }
    }
}

/// Provides auth context and hydrates the user once on mount.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let user = RwSignal::new(None);
    let auth = AuthContext::new(user);
    provide_context(auth);

    spawn_local(async move {
        auth.check_auth_user().await;
        auth.is_loading.set(false);
    });

    view! { {children()} }
}

/// Returns the current auth context or a fallback empty context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let user = RwSignal::new(None);
        AuthContext::new(user)
    })
}
