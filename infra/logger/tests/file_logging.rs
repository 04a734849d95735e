use lhub_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn rolling_file_sink_captures_events() -> Result<(), Box<dyn std::error::Error>> {
    let workdir = tempdir()?;
    let sink_dir = workdir.path().join("logs");

    let logger = Logger::builder()
        .name("shell-file")
        .console(false)
        .path(&sink_dir)
        .max_files(3)
        .level(LevelFilter::INFO)
        .init()?;

    tracing::info!("captured by the rolling appender");
    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let mut log_files: Vec<_> = fs::read_dir(&sink_dir)?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .collect();
    log_files.sort();

    assert_eq!(log_files.len(), 1, "a single rotation window should produce one file");

    let file_name = log_files[0].file_name().and_then(|n| n.to_str()).unwrap_or_default();
    assert!(file_name.starts_with("shell-file"), "file should carry the logger name: {file_name}");

    let contents = fs::read_to_string(&log_files[0])?;
    assert!(
        contents.contains("captured by the rolling appender"),
        "the logged event should be flushed to disk"
    );

    Ok(())
}
