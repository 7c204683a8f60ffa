use super::*;

#[test]
fn body_uses_id_token_field() {
    assert_eq!(verification_body(&IdToken::new("abc.def.ghi")), "idToken=abc.def.ghi");
}

#[test]
fn body_percent_encodes_reserved_characters() {
    assert_eq!(verification_body(&IdToken::new("a+b/c=d&e")), "idToken=a%2Bb%2Fc%3Dd%26e");
}

#[test]
fn only_2xx_counts_as_ok() {
    assert!(VerifyResponse::new(200).is_ok());
    assert!(VerifyResponse::new(204).is_ok());
    assert!(!VerifyResponse::new(302).is_ok());
    assert!(!VerifyResponse::new(401).is_ok());
    assert!(!VerifyResponse::new(500).is_ok());
}
