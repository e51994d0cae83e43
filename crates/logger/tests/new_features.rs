//! Tests for verbose output and the file sink.

use logger::{enable_verbose, error, info, set_level, verbose, warn, Level};

#[cfg(feature = "verbose")]
#[test]
fn verbose_respects_runtime_flag() {
    use logger::{disable_verbose, is_verbose_enabled};

    disable_verbose();
    assert!(!is_verbose_enabled());
    verbose!("This should not appear");

    enable_verbose();
    assert!(is_verbose_enabled());
    verbose!("This should appear: verbose test {}", 42);
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_captures_tagged_messages_only() {
    use logger::{close_file_logging, init_file_logging};
    use std::fs;

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let log_path = dir.path().join("logger.log");

    assert!(init_file_logging(&log_path));
    set_level(Level::Info);

    info!("Test info message");
    warn!("Test warning message");
    error!("Test error message");

    // verbose output stays on the console
    enable_verbose();
    verbose!("This verbose message should NOT be in the file");

    close_file_logging();

    let contents = fs::read_to_string(&log_path).expect("Failed to read log file");
    assert!(contents.contains("[INFO] Test info message"));
    assert!(contents.contains("[WARN] Test warning message"));
    assert!(contents.contains("[ERROR] Test error message"));
    assert!(!contents.contains("verbose message"));
}
