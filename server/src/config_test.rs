use super::*;

#[test]
fn port_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn port_defaults_when_blank() {
    let cfg = ServerConfig::from_lookup(|_| Some("  ".to_owned())).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn port_parses_override() {
    let cfg = ServerConfig::from_lookup(|key| (key == "PORT").then(|| "8080".to_owned())).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
}

#[test]
fn invalid_port_errors() {
    let err = ServerConfig::from_lookup(|_| Some("eighty".to_owned())).unwrap_err();
    assert!(err.to_string().contains("invalid PORT"));
}
