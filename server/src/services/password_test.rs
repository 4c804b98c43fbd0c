use super::*;

#[test]
fn hash_then_verify_accepts_same_password() {
    let hash = hash_password("password").unwrap();
    assert!(verify_password("password", &hash));
}

#[test]
fn verify_rejects_wrong_password() {
    let hash = hash_password("password").unwrap();
    assert!(!verify_password("Password", &hash));
    assert!(!verify_password("", &hash));
}

#[test]
fn hashes_are_salted() {
    let a = hash_password("secret1").unwrap();
    let b = hash_password("secret1").unwrap();
    assert_ne!(a, b);
    assert!(a.starts_with("$argon2"));
}

#[test]
fn malformed_stored_hash_never_verifies() {
    assert!(!verify_password("password", "not-a-phc-string"));
    assert!(!verify_password("password", ""));
}
