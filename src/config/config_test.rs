use serial_test::serial;
use temp_env::with_vars;

use super::*;

fn cleanup_all_ring_env_vars() {
    for (key, _) in std::env::vars() {
        if key.starts_with("RING__") {
            std::env::remove_var(&key);
        }
    }
}

#[test]
#[serial]
fn default_config_should_initialize_with_hardcoded_values() {
    let config = RingConfig::default();

    assert_eq!(config.channel.capacity, 8);
    assert!(config.election.emit_events);
}

#[test]
#[serial]
fn new_should_merge_environment_overrides() {
    cleanup_all_ring_env_vars();
    with_vars(vec![("RING__CHANNEL__CAPACITY", Some("16"))], || {
        let config = RingConfig::new().unwrap();

        assert_eq!(config.channel.capacity, 16);
    });
}

#[test]
#[serial]
fn with_override_config_should_merge_file_settings() {
    cleanup_all_ring_env_vars();
    // Create temporary directory and configuration file
    let temp_dir = tempfile::tempdir().unwrap();
    let config_path = temp_dir.path().join("dynamic_config.toml");

    std::fs::write(
        &config_path,
        r#"
        [channel]
        capacity = 32 # Override default value

        [election]
        emit_events = false
        "#,
    )
    .unwrap();

    let empty_vars: Vec<(&str, Option<&str>)> = vec![];
    with_vars(empty_vars, || {
        let base_config = RingConfig::new().expect("success");
        let result = base_config.with_override_config(config_path.to_str().unwrap());

        assert!(result.is_ok());
        let config = result.unwrap();

        assert_eq!(config.channel.capacity, 32);
        assert!(!config.election.emit_events);
    });
}

#[test]
#[serial]
fn new_should_reject_capacity_below_floor() {
    cleanup_all_ring_env_vars();
    with_vars(vec![("RING__CHANNEL__CAPACITY", Some("2"))], || {
        let result = RingConfig::new();

        assert!(matches!(result, Err(crate::Error::Config(_))));
    });
}

#[test]
fn validation_should_fail_with_undersized_channel() {
    let mut config = RingConfig::default();
    config.channel.capacity = 1;

    assert!(config.validate().is_err());
}
