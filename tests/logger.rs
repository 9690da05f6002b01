use std::fs;

use commonlib::config::LoggingConfig;
use commonlib::logger;
use log::{Level, LevelFilter, Record};

fn file_config(name: &str) -> (LoggingConfig, std::path::PathBuf) {
    let dir = std::env::temp_dir().join(name);
    let _ = fs::remove_dir_all(&dir);
    let path = dir.join("logs").join("test.log");
    let config = LoggingConfig {
        enabled: true,
        level: "debug".to_string(),
        file: Some(path.clone()),
    };
    (config, path)
}

#[test]
fn test_disabled_logging_is_off() {
    let config = LoggingConfig::default();
    let (level, _log) = logger::dispatch(&config).unwrap().into_log();
    assert_eq!(level, LevelFilter::Off);
}

#[test]
fn test_file_logging_writes_stamped_lines() {
    let (config, path) = file_config("commonlib_test_logger");

    let (level, log) = logger::dispatch(&config).unwrap().into_log();
    assert_eq!(level, LevelFilter::Debug);

    log.log(
        &Record::builder()
            .args(format_args!("Test message with file"))
            .level(Level::Info)
            .target("commonlib::tests")
            .build(),
    );
    log.flush();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("Test message with file"));
    assert!(content.contains("INFO commonlib::tests"));
    // Stamped with a `YYYY-MM-DD` date
    assert_eq!(content.as_bytes()[5], b'-');

    let _ = fs::remove_dir_all(path.parent().unwrap().parent().unwrap());
}

#[test]
fn test_invalid_level_is_rejected() {
    let config = LoggingConfig {
        enabled: true,
        level: "verbose".to_string(),
        file: None,
    };
    assert!(logger::dispatch(&config).is_err());
}

#[test]
fn test_log_file_path() {
    if let Ok(path) = logger::get_log_file_path() {
        assert!(path.ends_with("commonlib/commonlib.log"));
    }
}
