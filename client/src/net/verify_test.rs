use super::*;

#[test]
fn verifier_targets_configured_backend() {
    let verifier = BrowserTokenVerifier::new(&ClientConfig::default());
    assert_eq!(verifier.url(), "http://127.0.0.1:5000");
}

#[cfg(not(feature = "hydrate"))]
#[tokio::test]
async fn verify_outside_browser_is_a_network_error() {
    let verifier = BrowserTokenVerifier::new(&ClientConfig::default());
    let err = verifier.verify(&IdToken::new("tok")).await.unwrap_err();
    assert!(matches!(err, LoginError::Network(_)));
}
