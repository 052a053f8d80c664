use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BACKEND_URL");
    }
}

#[test]
fn from_values_defaults() {
    let cfg = HostConfig::from_values(None, None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, "http://localhost:5001");
}

#[test]
fn from_values_parses_overrides() {
    let cfg = HostConfig::from_values(Some("8080"), Some("https://ocr.example.test/")).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://ocr.example.test");
}

#[test]
fn from_values_blank_port_uses_default() {
    let cfg = HostConfig::from_values(Some("  "), None).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn from_values_rejects_bad_port() {
    let err = HostConfig::from_values(Some("not-a-port"), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "not-a-port"));
    assert_eq!(err.to_string(), "invalid PORT 'not-a-port'");

    assert!(HostConfig::from_values(Some("70000"), None).is_err());
}

#[test]
fn from_values_blank_backend_uses_default() {
    let cfg = HostConfig::from_values(None, Some("")).unwrap();
    assert_eq!(cfg.backend_url, "http://localhost:5001");
}

#[test]
fn from_env_reads_variables() {
    unsafe {
        clear_host_env();
        std::env::set_var("PORT", "4100");
        std::env::set_var("BACKEND_URL", "http://10.0.0.5:5001/");
    }

    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.port, 4100);
    assert_eq!(cfg.backend_url, "http://10.0.0.5:5001");

    unsafe { clear_host_env() };
}
