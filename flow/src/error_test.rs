use super::*;

#[test]
fn rest_codes_map_to_sdk_codes() {
    assert_eq!(AuthErrorCode::from_rest_message("EMAIL_NOT_FOUND"), AuthErrorCode::UserNotFound);
    assert_eq!(AuthErrorCode::from_rest_message("INVALID_PASSWORD"), AuthErrorCode::WrongPassword);
    assert_eq!(
        AuthErrorCode::from_rest_message("INVALID_LOGIN_CREDENTIALS"),
        AuthErrorCode::InvalidCredential
    );
    assert_eq!(AuthErrorCode::from_rest_message("INVALID_EMAIL"), AuthErrorCode::InvalidEmail);
    assert_eq!(AuthErrorCode::from_rest_message("USER_DISABLED"), AuthErrorCode::UserDisabled);
}

#[test]
fn rest_message_detail_suffix_is_ignored() {
    let message = "TOO_MANY_ATTEMPTS_TRY_LATER : Access to this account has been temporarily disabled";
    assert_eq!(AuthErrorCode::from_rest_message(message), AuthErrorCode::TooManyRequests);
}

#[test]
fn api_key_messages_map_to_api_key_not_valid() {
    assert_eq!(AuthErrorCode::from_rest_message("API_KEY_INVALID"), AuthErrorCode::ApiKeyNotValid);
    assert_eq!(
        AuthErrorCode::from_rest_message("API key not valid. Please pass a valid API key."),
        AuthErrorCode::ApiKeyNotValid
    );
}

#[test]
fn unknown_rest_message_maps_to_internal_error() {
    assert_eq!(AuthErrorCode::from_rest_message("SOMETHING_NEW"), AuthErrorCode::InternalError);
    assert_eq!(AuthErrorCode::from_rest_message(""), AuthErrorCode::InternalError);
}

#[test]
fn provider_error_displays_like_web_sdk() {
    let err = LoginError::Provider(AuthErrorCode::InvalidCredential);
    assert_eq!(err.to_string(), "Firebase: Error (auth/invalid-credential).");
}

#[test]
fn network_error_displays_underlying_text() {
    let err = LoginError::Network("Failed to fetch".into());
    assert_eq!(err.to_string(), "Failed to fetch");
}

#[test]
fn malformed_response_display_includes_detail() {
    let err = LoginError::MalformedResponse("missing idToken".into());
    assert!(err.to_string().contains("missing idToken"));
}
