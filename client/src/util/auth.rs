//! Shared auth redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: signed-in users are
//! bounced off the sign-in page, anonymous users are bounced onto it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthSession, AuthState};

/// Landing route after a successful sign-in.
pub const HOME_PATH: &str = "/";
/// Route of the sign-in page.
pub const SIGN_IN_PATH: &str = "/sign-in";

/// Router capability used by pages and the sign-in driver.
///
/// Any `Fn(&str, NavigateOptions)` (such as the closure returned by
/// `leptos_router::hooks::use_navigate`) is a `Navigator`.
pub trait Navigator {
    fn navigate(&self, path: &str, replace: bool);
}

impl<F> Navigator for F
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str, replace: bool) {
        self(path, NavigateOptions { replace, ..NavigateOptions::default() });
    }
}

#[must_use]
pub fn should_redirect_home(token: Option<&str>) -> bool {
    token.is_some_and(|t| !t.is_empty())
}

#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !should_redirect_home(state.token.as_deref())
}

/// Navigate home, replacing history, when the session holds a token.
///
/// Returns whether a navigation was issued.
pub fn redirect_if_authenticated<A, N>(auth: &A, navigator: &N) -> bool
where
    A: AuthSession,
    N: Navigator,
{
    if should_redirect_home(auth.token().as_deref()) {
        navigator.navigate(HOME_PATH, true);
        return true;
    }
    false
}

/// Watch the session and leave the current page as soon as a token appears.
///
/// Fires on mount too, so a pre-existing session never sees the form.
pub fn install_home_redirect<A, N>(auth: A, navigator: N)
where
    A: AuthSession + 'static,
    N: Navigator + 'static,
{
    Effect::new(move || {
        redirect_if_authenticated(&auth, &navigator);
    });
}

/// Redirect to the sign-in page whenever auth has loaded and no token is present.
pub fn install_unauth_redirect<N>(auth: RwSignal<AuthState>, navigator: N)
where
    N: Navigator + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigator.navigate(SIGN_IN_PATH, true);
        }
    });
}
