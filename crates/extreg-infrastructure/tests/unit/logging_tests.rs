//! Logging tests

use extreg_infrastructure::config::LoggingConfig;
use extreg_infrastructure::logging::{init_logging, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("Warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn test_parse_invalid_log_level() {
    let err = parse_log_level("verbose").unwrap_err();

    assert!(err.is_configuration());
    assert!(err.to_string().contains("Invalid log level: verbose"));
}

#[test]
fn test_init_logging_rejects_invalid_level() {
    let config = LoggingConfig {
        level: "chatty".to_string(),
        ..LoggingConfig::default()
    };

    assert!(init_logging(&config).unwrap_err().is_configuration());
}
