use super::*;

#[test]
fn credentials_new_keeps_values_verbatim() {
    let creds = Credentials::new(" user@example.com ", "secret1");
    assert_eq!(creds.email, " user@example.com ");
    assert_eq!(creds.password, "secret1");
}

#[test]
fn session_deserializes_server_login_body() {
    let body = r#"{
        "token": "abc123",
        "user": { "id": "00000000-0000-0000-0000-000000000001", "email": "admin@example.com", "role": "ADMIN" }
    }"#;
    let session: Session = serde_json::from_str(body).unwrap();
    assert_eq!(session.token, "abc123");
    assert_eq!(session.user.email, "admin@example.com");
    assert_eq!(session.user.role, "ADMIN");
}

#[test]
fn band_event_accepts_missing_comment_as_null() {
    let body = r#"{
        "id": "e1", "band_name": "Bandname1", "place": "here1",
        "date": "2024-06-01", "rating": 4, "comment": null
    }"#;
    let event: BandEvent = serde_json::from_str(body).unwrap();
    assert_eq!(event.date, "2024-06-01");
    assert_eq!(event.rating, 4);
    assert!(event.comment.is_none());
}

#[test]
fn credentials_serialize_as_login_payload() {
    let json = serde_json::to_value(Credentials::new("a@b.co", "hunter22")).unwrap();
    assert_eq!(json, serde_json::json!({ "email": "a@b.co", "password": "hunter22" }));
}
