use super::*;

#[test]
fn user_session_deserializes_camel_case_body() {
    let body = r#"{"displayName":"A. User","userPrincipalName":"auser@example.com","mail":"auser@example.com"}"#;
    let session: UserSession = serde_json::from_str(body).unwrap();
    assert_eq!(session.display_name, "A. User");
    assert_eq!(session.user_principal_name, "auser@example.com");
    assert_eq!(session.mail, "auser@example.com");
}

#[test]
fn user_session_ignores_unknown_fields() {
    let body = r#"{"@odata.context":"x","id":"42","displayName":"B","userPrincipalName":"b@x","mail":"b@x","jobTitle":null}"#;
    let session: UserSession = serde_json::from_str(body).unwrap();
    assert_eq!(session.display_name, "B");
}

#[test]
fn user_session_rejects_missing_display_name() {
    let body = r#"{"userPrincipalName":"b@x","mail":"b@x"}"#;
    assert!(serde_json::from_str::<UserSession>(body).is_err());
}

#[test]
fn user_session_serializes_wire_names() {
    let session = UserSession {
        display_name: "C".to_owned(),
        user_principal_name: "c@x".to_owned(),
        mail: "c@x".to_owned(),
    };
    let value = serde_json::to_value(&session).unwrap();
    assert_eq!(value["displayName"], "C");
    assert_eq!(value["userPrincipalName"], "c@x");
    assert_eq!(value["mail"], "c@x");
    assert!(value.get("display_name").is_none());
}
