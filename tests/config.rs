use commonlib::config::Config;
use commonlib::utils::datetime;
use log::LevelFilter;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.formats.datetime, datetime::DEFAULT_DATETIME_FORMAT);
    assert_eq!(config.formats.date, datetime::DEFAULT_DATE_FORMAT);
    assert_eq!(config.formats.time, datetime::DEFAULT_TIME_FORMAT);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Unknown pattern token should fail
    config.formats.datetime = "%Y-%Q".to_string();
    assert!(config.validate().is_err());

    // Reset and test an unknown log level
    config.formats.datetime = datetime::DEFAULT_DATETIME_FORMAT.to_string();
    config.logging.level = "chatty".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("[formats]"));
    assert!(toml_str.contains("date = \"%Y-%m-%d\""));
    assert!(toml_str.contains("level = \"info\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[formats]
date = "%d/%m/%Y"

[logging]
enabled = true
level = "debug"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.formats.date, "%d/%m/%Y");
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::Debug);

    // Check that unspecified values use defaults
    assert_eq!(config.formats.datetime, datetime::DEFAULT_DATETIME_FORMAT);
    assert_eq!(config.formats.time, datetime::DEFAULT_TIME_FORMAT);
    assert!(config.logging.file.is_none());
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.formats.datetime, default_config.formats.datetime);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.logging.level, default_config.logging.level);
}

#[test]
fn test_load_from_file_rejects_invalid_pattern() {
    let dir = std::env::temp_dir().join("commonlib_test_invalid_config");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "[formats]\ntime = \"%H:%Q\"\n").unwrap();

    let result = Config::load_from_file(&path);
    assert!(result.is_err());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_load_from_missing_file_fails() {
    let path = std::env::temp_dir().join("commonlib_test_missing").join("config.toml");
    assert!(Config::load_from_file(&path).is_err());
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("commonlib_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    // Verify the directory was created
    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    // Verify the file contains expected content and loads back
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# commonlib configuration file"));
    assert!(content.contains("[formats]"));
    let loaded = Config::load_from_file(&config_path).unwrap();
    assert_eq!(loaded.formats.datetime, datetime::DEFAULT_DATETIME_FORMAT);

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_global_config_is_a_singleton() {
    use commonlib::patterns::Singleton;

    let first = Config::get_instance();
    let second = Config::get_instance();
    assert!(std::ptr::eq(first, second));
    // Either loaded and validated, or the defaults after a failed load
    assert!(first.validate().is_ok());
}

#[test]
fn test_default_config_path_is_under_app_dir() {
    use commonlib::constants::{APP_DIR_NAME, CONFIG_FILE_NAME};

    let path = Config::get_default_config_path().unwrap();
    assert!(path.ends_with(std::path::Path::new(APP_DIR_NAME).join(CONFIG_FILE_NAME)));
    assert!(path.starts_with(dirs::config_dir().unwrap()));
}
