use super::*;
use crate::services::password::hash_password;

fn record(password: &str) -> UserRecord {
    UserRecord {
        id: Uuid::new_v4(),
        email: "admin@example.com".to_owned(),
        role: ROLE_ADMIN.to_owned(),
        password_hash: hash_password(password).unwrap(),
    }
}

// =============================================================================
// normalize_email
// =============================================================================

#[test]
fn normalize_email_trims_and_lowercases() {
    assert_eq!(normalize_email("  Admin@Example.COM "), Some("admin@example.com".to_owned()));
}

#[test]
fn normalize_email_rejects_missing_parts() {
    assert_eq!(normalize_email(""), None);
    assert_eq!(normalize_email("admin"), None);
    assert_eq!(normalize_email("@example.com"), None);
    assert_eq!(normalize_email("admin@"), None);
}

#[test]
fn normalize_email_rejects_second_at_sign() {
    assert_eq!(normalize_email("a@b@c"), None);
}

// =============================================================================
// check_credentials
// =============================================================================

#[test]
fn matching_password_yields_session_user() {
    let stored = record("password");
    let expected_id = stored.id;
    let user = check_credentials(Some(stored), "password").unwrap();
    assert_eq!(user.id, expected_id);
    assert_eq!(user.email, "admin@example.com");
    assert_eq!(user.role, ROLE_ADMIN);
}

#[test]
fn wrong_password_is_invalid_credentials() {
    let err = check_credentials(Some(record("password")), "passw0rd").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[test]
fn unknown_user_is_invalid_credentials() {
    let err = check_credentials(None, "password").unwrap_err();
    assert!(matches!(err, AuthError::InvalidCredentials));
}

#[test]
fn unknown_user_and_wrong_password_render_the_same() {
    let missing = check_credentials(None, "x").unwrap_err().to_string();
    let wrong = check_credentials(Some(record("password")), "x").unwrap_err().to_string();
    assert_eq!(missing, wrong);
}

#[test]
fn corrupt_stored_hash_never_verifies() {
    let mut stored = record("password");
    stored.password_hash = "plaintext".to_owned();
    assert!(matches!(check_credentials(Some(stored), "plaintext"), Err(AuthError::InvalidCredentials)));
}

#[test]
fn absent_user_hash_is_a_valid_phc_string() {
    let hash = ABSENT_USER_HASH.as_deref().unwrap();
    assert!(hash.starts_with("$argon2"));
    assert!(password::verify_password("absent-user", hash));
}

#[test]
fn unknown_user_is_rejected_even_with_the_placeholder_password() {
    assert!(matches!(check_credentials(None, "absent-user"), Err(AuthError::InvalidCredentials)));
}
