use pcx_logger::{LevelFilter, LogFormat, Logger};

#[test]
fn console_only_logger_has_no_file_worker() {
    let logger = Logger::builder("integration-console-only")
        .format(LogFormat::Json)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger should initialize");

    assert!(!logger.writes_files(), "console-only logger should not spawn a file worker");
    assert_eq!(logger.name(), "integration-console-only");
}
