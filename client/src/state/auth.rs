//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` lives in an `RwSignal` provided via context. Route guards and
//! the sign-in form read it; `HttpAuthSession` is the only writer on login.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::{Credentials, Session, User};

/// Authentication state tracking the session token, user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Record a freshly established session.
    pub fn sign_in(&mut self, session: Session) {
        self.token = Some(session.token);
        self.user = Some(session.user);
        self.loading = false;
    }

    /// Forget the current session.
    pub fn sign_out(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
    }
}

/// Identity provider capability consumed by the sign-in form.
///
/// `login` rejects with a human-readable cause on bad credentials or
/// transport failure; callers must not show that cause to users.
#[allow(async_fn_in_trait)]
pub trait AuthSession {
    async fn login(&self, credentials: &Credentials) -> Result<Session, String>;

    fn token(&self) -> Option<String>;
}

/// `AuthSession` backed by the REST API and the shared `AuthState` signal.
#[derive(Clone, Copy)]
pub struct HttpAuthSession {
    auth: RwSignal<AuthState>,
}

impl HttpAuthSession {
    #[must_use]
    pub fn new(auth: RwSignal<AuthState>) -> Self {
        Self { auth }
    }
}

impl AuthSession for HttpAuthSession {
    async fn login(&self, credentials: &Credentials) -> Result<Session, String> {
        let session = crate::net::api::login(credentials).await?;
        self.auth.update(|state| state.sign_in(session.clone()));
        Ok(session)
    }

    /// Tracked read: effects calling this rerun when the session changes.
    fn token(&self) -> Option<String> {
        self.auth.with(|state| state.token.clone())
    }
}

/// Restore a pre-existing session from the server-side cookie.
///
/// `loading` stays set until the server answers so route guards do not
/// redirect an authenticated user to the sign-in page.
pub async fn restore_session(auth: RwSignal<AuthState>) {
    auth.update(|state| state.loading = true);
    match crate::net::api::fetch_current_session().await {
        Some(session) => auth.update(|state| state.sign_in(session)),
        None => auth.update(AuthState::sign_out),
    }
}
