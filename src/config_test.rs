use super::*;

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("")), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some("   ")), Ok(DEFAULT_PORT));
}

#[test]
fn parse_port_accepts_numeric_values() {
    assert_eq!(parse_port(Some("8080")), Ok(8080));
    assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
}

#[test]
fn parse_port_rejects_non_numeric() {
    assert_eq!(parse_port(Some("http")), Err(ConfigError::InvalidPort { value: "http".into() }));
}

#[test]
fn parse_port_rejects_out_of_range() {
    assert!(matches!(parse_port(Some("70000")), Err(ConfigError::InvalidPort { .. })));
    assert!(matches!(parse_port(Some("-1")), Err(ConfigError::InvalidPort { .. })));
}

#[test]
fn invalid_port_error_names_the_value() {
    let err = parse_port(Some("abc")).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT value 'abc'");
}

// =============================================================================
// parse_host / SiteConfig
// =============================================================================

#[test]
fn parse_host_defaults_when_unset_or_blank() {
    assert_eq!(parse_host(None), DEFAULT_HOST);
    assert_eq!(parse_host(Some("  ")), DEFAULT_HOST);
}

#[test]
fn parse_host_keeps_explicit_value() {
    assert_eq!(parse_host(Some("127.0.0.1")), "127.0.0.1");
}

#[test]
fn default_config_binds_all_interfaces_on_3000() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn from_env_reads_host_and_port() {
    // Unique to this test; no other test touches HOST/PORT.
    unsafe {
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "8123");
    }
    let cfg = SiteConfig::from_env().unwrap();
    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
    }
    assert_eq!(cfg, SiteConfig { host: "127.0.0.1".into(), port: 8123 });
}
