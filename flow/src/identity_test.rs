use super::*;

fn success_body() -> String {
    serde_json::json!({
        "kind": "identitytoolkit#VerifyPasswordResponse",
        "localId": "uid-42",
        "email": "ada@example.com",
        "displayName": "",
        "idToken": "eyJhbGciOi.payload.sig",
        "registered": true,
        "refreshToken": "refresh-1",
        "expiresIn": "3600"
    })
    .to_string()
}

fn error_body(message: &str) -> String {
    serde_json::json!({
        "error": {
            "code": 400,
            "message": message,
            "errors": [{ "message": message, "domain": "global", "reason": "invalid" }]
        }
    })
    .to_string()
}

#[test]
fn sign_in_url_appends_key_and_trims_base() {
    assert_eq!(
        sign_in_url("https://identitytoolkit.googleapis.com/v1/", "AIza key"),
        "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=AIza%20key"
    );
}

#[test]
fn sign_in_request_serializes_camel_case() {
    let creds = Credentials::new("ada@example.com", "hunter2");
    let json = serde_json::to_value(SignInRequest::new(&creds)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "email": "ada@example.com", "password": "hunter2", "returnSecureToken": true })
    );
}

#[test]
fn parse_success_yields_session() {
    let cred = parse_sign_in_response(200, &success_body()).unwrap();
    assert_eq!(cred.uid, "uid-42");
    assert_eq!(cred.email, "ada@example.com");
    assert_eq!(cred.id_token.as_str(), "eyJhbGciOi.payload.sig");
    assert_eq!(cred.user(), SignedInUser { uid: "uid-42".into(), email: "ada@example.com".into() });
}

#[test]
fn parse_success_without_email_leaves_it_empty() {
    let body = serde_json::json!({ "localId": "u", "idToken": "t" }).to_string();
    let cred = parse_sign_in_response(200, &body).unwrap();
    assert_eq!(cred.uid, "u");
    assert!(cred.email.is_empty());
}

#[test]
fn parse_success_without_token_is_malformed() {
    let body = serde_json::json!({ "localId": "u", "email": "a@b.c" }).to_string();
    let err = parse_sign_in_response(200, &body).unwrap_err();
    assert!(matches!(err, LoginError::MalformedResponse(_)));
}

#[test]
fn parse_garbage_success_body_is_malformed() {
    let err = parse_sign_in_response(200, "<html>").unwrap_err();
    assert!(matches!(err, LoginError::MalformedResponse(_)));
}

#[test]
fn parse_error_envelope_maps_provider_code() {
    let err = parse_sign_in_response(400, &error_body("INVALID_LOGIN_CREDENTIALS")).unwrap_err();
    assert_eq!(err, LoginError::Provider(AuthErrorCode::InvalidCredential));
}

#[test]
fn parse_error_without_envelope_is_internal_error() {
    let err = parse_sign_in_response(503, "upstream unavailable").unwrap_err();
    assert_eq!(err, LoginError::Provider(AuthErrorCode::InternalError));
}

#[test]
fn debug_output_redacts_secrets() {
    let creds = Credentials::new("ada@example.com", "hunter2");
    assert!(!format!("{creds:?}").contains("hunter2"));
    let token = IdToken::new("secret-token");
    assert!(!format!("{token:?}").contains("secret-token"));
}
