use super::*;

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.greeting().is_none());
}

#[test]
fn greeting_names_signed_in_email() {
    let state = AuthState { user: Some(SignedInUser { uid: "u1".into(), email: "ada@example.com".into() }) };
    assert_eq!(state.greeting().as_deref(), Some("Signed in as ada@example.com"));
}
