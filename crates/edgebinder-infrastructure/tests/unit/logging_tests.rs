//! Logging setup tests

use edgebinder_domain::Error;
use edgebinder_infrastructure::logging::{LoggingConfig, init_logging, parse_log_level};
use tempfile::TempDir;
use tracing::Level;

#[test]
fn test_parse_log_level_is_case_insensitive() {
    assert_eq!(parse_log_level("TRACE").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("Error").unwrap(), Level::ERROR);
    assert!(parse_log_level("").is_err());
}

#[test]
fn test_invalid_level_fails_before_init() {
    let config = LoggingConfig {
        level: "chatty".to_string(),
        ..LoggingConfig::default()
    };

    assert!(matches!(
        init_logging(&config),
        Err(Error::Configuration(_))
    ));
}

// The only test installing the global subscriber
#[test]
fn test_init_logging_once() {
    let temp_dir = TempDir::new().unwrap();
    let config = LoggingConfig {
        level: "debug".to_string(),
        json_format: true,
        file_output: Some(temp_dir.path().join("edgebinder.log")),
    };

    init_logging(&config).unwrap();
    tracing::info!("logging initialized in test");

    assert!(matches!(
        init_logging(&config),
        Err(Error::Internal { .. })
    ));
}
