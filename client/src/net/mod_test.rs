use super::*;

#[test]
fn build_env_services_are_resolved_once() {
    let first = LoginServices::from_build_env();
    let second = LoginServices::from_build_env();
    assert!(Arc::ptr_eq(&first.provider, &second.provider));
    assert!(Arc::ptr_eq(&first.verifier, &second.verifier));
}
