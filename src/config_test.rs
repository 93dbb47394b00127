use super::*;

/// # Safety
/// Only `from_env_defaults_then_overrides` touches these variables.
unsafe fn clear_host_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("BIND_ADDR");
    }
}

// One test owns PORT/BIND_ADDR.
#[test]
fn from_env_defaults_then_overrides() {
    unsafe { clear_host_env() };
    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg, HostConfig { bind_addr: DEFAULT_BIND_ADDR.to_owned(), port: DEFAULT_PORT });
    assert_eq!(cfg.socket_addr(), "0.0.0.0:3000");

    unsafe {
        std::env::set_var("PORT", "8081");
        std::env::set_var("BIND_ADDR", "127.0.0.1");
    }
    let cfg = HostConfig::from_env().unwrap();
    assert_eq!(cfg.socket_addr(), "127.0.0.1:8081");

    unsafe { clear_host_env() };
}

#[test]
fn parse_port_rejects_garbage() {
    assert!(matches!(parse_port(Some("http")), Err(HostError::InvalidPort(v)) if v == "http"));
    assert!(matches!(parse_port(Some("70000")), Err(HostError::InvalidPort(_))));
}

#[test]
fn parse_port_blank_uses_default() {
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
}
