use super::*;

#[test]
fn from_values_defaults_when_unset() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:8080");
}

#[test]
fn from_values_blank_means_default() {
    let cfg = ServerConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ServerConfig { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT });
}

#[test]
fn from_values_parses_overrides() {
    let cfg = ServerConfig::from_values(Some("127.0.0.1"), Some(" 9090 ")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:9090");

    let cfg = ServerConfig::from_values(Some("::1"), Some("443")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:443");
}

#[test]
fn from_values_rejects_bad_port() {
    for raw in ["abc", "0", "70000", "-1"] {
        let err = ServerConfig::from_values(None, Some(raw)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == raw), "{raw}: {err}");
    }
}

#[test]
fn from_values_rejects_bad_bind_addr() {
    let err = ServerConfig::from_values(Some("localhost"), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBindAddr(ref v) if v == "localhost"));
    assert_eq!(err.to_string(), "invalid BIND_ADDR \"localhost\": expected an IP address");
}
