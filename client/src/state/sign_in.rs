//! Sign-in form state machine.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SignInPage` renders this state; the submit driver below owns the whole
//! validate -> login -> navigate sequence so it can run against test doubles
//! for the auth and router capabilities.
//!
//! DESIGN
//! ======
//! `Idle -> Validating -> Submitting -> { Succeeded | Failed }`. Validation is
//! synchronous, so `Validating` only exists inside `begin_submit`. A `Failed`
//! form accepts the next attempt exactly like an `Idle` one.
//!
//! The `Submitting` phase is the only guard against overlapping submissions:
//! a submit that arrives while a login is in flight is ignored.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use std::cell::RefCell;
use std::sync::LazyLock;

use leptos::prelude::*;
use regex::Regex;

use crate::net::types::Credentials;
use crate::state::auth::AuthSession;
use crate::util::auth::{HOME_PATH, Navigator};

pub const EMAIL_ERROR_MESSAGE: &str = "Please enter a valid email address.";
pub const PASSWORD_ERROR_MESSAGE: &str = "Password must be at least 6 characters long.";
pub const SIGN_IN_FAILED_MESSAGE: &str = "Invalid email or password. Please try again";
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"));

/// Displayed validation status of one input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub has_error: bool,
    pub message: String,
}

impl FieldState {
    fn check(valid: bool, message: &str) -> Self {
        if valid {
            Self::default()
        } else {
            Self { has_error: true, message: message.to_owned() }
        }
    }
}

/// Per-field validation result for the whole form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationState {
    pub email: FieldState,
    pub password: FieldState,
}

impl ValidationState {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.email.has_error && !self.password.has_error
    }
}

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_PATTERN.is_match(email)
}

#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Check both fields independently; neither result depends on the other.
#[must_use]
pub fn validate(credentials: &Credentials) -> ValidationState {
    ValidationState {
        email: FieldState::check(is_valid_email(&credentials.email), EMAIL_ERROR_MESSAGE),
        password: FieldState::check(is_valid_password(&credentials.password), PASSWORD_ERROR_MESSAGE),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignInPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// How a call to [`submit`] ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission was already in flight; nothing changed.
    Ignored,
    /// Local validation failed; no login was attempted.
    Invalid,
    SignedIn,
    Failed,
}

/// State owned by one sign-in form.
#[derive(Clone, Debug, Default)]
pub struct SignInForm {
    validation: ValidationState,
    submission_error: Option<String>,
    phase: SignInPhase,
}

impl SignInForm {
    #[must_use]
    pub fn validation(&self) -> &ValidationState {
        &self.validation
    }

    #[must_use]
    pub fn submission_error(&self) -> Option<&str> {
        self.submission_error.as_deref()
    }

    #[must_use]
    pub fn phase(&self) -> SignInPhase {
        self.phase
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SignInPhase::Submitting
    }

    /// Re-run validation and publish the per-field result.
    pub fn validate(&mut self, credentials: &Credentials) -> bool {
        self.validation = validate(credentials);
        self.validation.is_valid()
    }

    /// Start an attempt. `Ok` means the caller should now call `login`.
    ///
    /// # Errors
    ///
    /// Returns the final outcome when the attempt stops before any network
    /// call: `Ignored` while another attempt is in flight, `Invalid` when
    /// validation fails.
    pub fn begin_submit(&mut self, credentials: &Credentials) -> Result<(), SubmitOutcome> {
        if self.is_submitting() {
            return Err(SubmitOutcome::Ignored);
        }
        self.submission_error = None;
        if !self.validate(credentials) {
            self.phase = SignInPhase::Idle;
            return Err(SubmitOutcome::Invalid);
        }
        self.phase = SignInPhase::Submitting;
        Ok(())
    }

    /// Settle the in-flight attempt with the login result.
    pub fn finish_submit<T>(&mut self, result: &Result<T, String>) -> SubmitOutcome {
        match result {
            Ok(_) => {
                self.phase = SignInPhase::Succeeded;
                SubmitOutcome::SignedIn
            }
            Err(err) => {
                if cfg!(debug_assertions) {
                    log::error!("Error logging in: {err}");
                }
                self.phase = SignInPhase::Failed;
                self.submission_error = Some(SIGN_IN_FAILED_MESSAGE.to_owned());
                SubmitOutcome::Failed
            }
        }
    }
}

/// Mutable home of a `SignInForm`: a plain `RefCell` or a Leptos signal.
///
/// Returns `None` when the backing storage is gone (a disposed signal).
pub trait FormStore {
    fn update_form<R>(&self, f: impl FnOnce(&mut SignInForm) -> R) -> Option<R>;
}

impl FormStore for RefCell<SignInForm> {
    fn update_form<R>(&self, f: impl FnOnce(&mut SignInForm) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl FormStore for RwSignal<SignInForm> {
    fn update_form<R>(&self, f: impl FnOnce(&mut SignInForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

/// Run one submission: validate, call `login` once, then navigate home
/// (replacing history) on success or publish the generic error on failure.
///
/// The form is never borrowed across the `login` await, so a second call
/// arriving meanwhile observes the in-flight flag and is ignored.
pub async fn submit<S, A, N>(store: &S, credentials: Credentials, auth: &A, navigator: &N) -> SubmitOutcome
where
    S: FormStore,
    A: AuthSession,
    N: Navigator,
{
    match store.update_form(|form| form.begin_submit(&credentials)) {
        Some(Ok(())) => {}
        Some(Err(outcome)) => {
            if outcome == SubmitOutcome::Invalid && cfg!(debug_assertions) {
                log::warn!("Invalid inputs");
            }
            return outcome;
        }
        None => return SubmitOutcome::Ignored,
    }

    let result = auth.login(&credentials).await;
    let outcome = store
        .update_form(|form| form.finish_submit(&result))
        .unwrap_or(SubmitOutcome::Ignored);

    if outcome == SubmitOutcome::SignedIn {
        navigator.navigate(HOME_PATH, true);
    }
    outcome
}
