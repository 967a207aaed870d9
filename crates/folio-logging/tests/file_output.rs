//! File output tests for folio-logging
//!
//! A global subscriber can only be installed once per process, so the whole
//! lifecycle is exercised in a single test.

use std::fs;

use folio_logging::{log_file_path, FileConfig, FolioSubscriberBuilder, LoggingError, RotationStrategy};

#[test]
fn test_jsonl_file_output_and_double_init() {
    let dir = tempfile::tempdir().unwrap();
    let file_config = FileConfig {
        directory: dir.path().join("nested"),
        prefix: "folio-test".to_string(),
        rotation: RotationStrategy::Never,
    };

    let guard = FolioSubscriberBuilder::new()
        .with_console(false)
        .with_level("debug")
        .with_file_output(file_config.clone())
        .init()
        .unwrap();
    assert!(guard.is_some());

    tracing::info!(progress = 42, "splash frame");
    tracing::trace!("filtered out");

    // Dropping the guard flushes the non-blocking writer
    drop(guard);

    let contents = fs::read_to_string(log_file_path(&file_config)).unwrap();
    let line = contents.lines().find(|l| l.contains("splash frame")).unwrap();
    assert!(line.contains("\"progress\":42"));
    assert!(line.contains("\"level\":\"INFO\""));
    assert!(!contents.contains("filtered out"));

    let second = FolioSubscriberBuilder::new().with_console(false).init();
    assert!(matches!(second, Err(LoggingError::AlreadyInitialized)));
}

#[test]
fn test_log_config_from_toml() {
    let config: folio_logging::LogConfig = toml::from_str(
        r#"
        default_level = "warn"

        [console]
        pretty = false

        [file]
        directory = "/tmp/folio"
        rotation = "hourly"

        [targets]
        folio_core = "debug"
        "#,
    )
    .unwrap();

    assert_eq!(config.default_level, "warn");
    assert!(config.console.enabled);
    assert!(!config.console.pretty);
    let file = config.file.unwrap();
    assert_eq!(file.rotation, RotationStrategy::Hourly);
    assert_eq!(file.prefix, "folio");
    assert_eq!(config.targets.get("folio_core").map(String::as_str), Some("debug"));
}
