use std::cell::RefCell;

use super::*;
use crate::net::types::{Credentials, Session};

struct FixedToken(Option<&'static str>);

impl AuthSession for FixedToken {
    async fn login(&self, _credentials: &Credentials) -> Result<Session, String> {
        Err("not used".to_owned())
    }

    fn token(&self) -> Option<String> {
        self.0.map(str::to_owned)
    }
}

fn with_token(token: Option<&str>) -> AuthState {
    AuthState { token: token.map(str::to_owned), user: None, loading: false }
}

#[test]
fn should_redirect_home_when_token_present() {
    assert!(should_redirect_home(Some("abc")));
}

#[test]
fn should_not_redirect_home_without_token() {
    assert!(!should_redirect_home(None));
    assert!(!should_redirect_home(Some("")));
}

#[test]
fn should_redirect_unauth_when_not_loading_and_token_missing() {
    assert!(should_redirect_unauth(&with_token(None)));
}

#[test]
fn should_not_redirect_unauth_while_loading() {
    let state = AuthState { loading: true, ..with_token(None) };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_unauth_when_token_exists() {
    assert!(!should_redirect_unauth(&with_token(Some("abc"))));
}

#[test]
fn pre_existing_session_navigates_home_with_replace() {
    let calls = RefCell::new(Vec::new());
    let navigate = |path: &str, options: NavigateOptions| calls.borrow_mut().push((path.to_owned(), options.replace));

    assert!(redirect_if_authenticated(&FixedToken(Some("existing")), &navigate));
    assert_eq!(calls.into_inner(), vec![(HOME_PATH.to_owned(), true)]);
}

#[test]
fn anonymous_state_does_not_navigate() {
    let calls = RefCell::new(Vec::new());
    let navigate = |path: &str, options: NavigateOptions| calls.borrow_mut().push((path.to_owned(), options.replace));

    assert!(!redirect_if_authenticated(&FixedToken(None), &navigate));
    assert!(calls.into_inner().is_empty());
}

#[test]
fn closure_navigator_forwards_replace_flag() {
    let calls = RefCell::new(Vec::new());
    let navigate = |path: &str, options: NavigateOptions| calls.borrow_mut().push((path.to_owned(), options.replace));

    navigate.navigate("/your-journal", false);
    navigate.navigate(SIGN_IN_PATH, true);
    assert_eq!(
        calls.into_inner(),
        vec![("/your-journal".to_owned(), false), (SIGN_IN_PATH.to_owned(), true)]
    );
}
