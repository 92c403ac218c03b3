use serial_test::serial;

use super::load_config;
use super::settings::Settings;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.hub.client_queue_capacity, 32);
    assert_eq!(settings.hub.broadcast_capacity, 100);
}

#[test]
#[serial]
fn test_load_config_uses_defaults_without_overrides() {
    let settings = temp_env::with_vars_unset(["SERVER_HOST", "SERVER_PORT"], || {
        load_config().expect("load_config")
    });
    assert_eq!(settings.server.host, "127.0.0.1");
    assert_eq!(settings.server.port, 8080);
}

#[test]
#[serial]
fn test_environment_overrides_server_settings() {
    let settings = temp_env::with_vars(
        [
            ("SERVER_HOST", Some("0.0.0.0")),
            ("SERVER_PORT", Some("9090")),
        ],
        || load_config().expect("load_config"),
    );
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.server.port, 9090);
}
