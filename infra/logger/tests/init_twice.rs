use lhub_logger::{LevelFilter, Logger, LoggerError};

fn try_install(name: &str) -> Result<Logger, LoggerError> {
    Logger::builder().name(name).startup_notice(false).level(LevelFilter::INFO).init()
}

#[test]
fn the_global_subscriber_installs_only_once() {
    let first = try_install("twice-first");
    assert!(first.is_ok(), "installing into a clean process should work");

    let second = try_install("twice-second");
    assert!(
        matches!(second, Err(LoggerError::Subscriber { .. })),
        "the process already has a subscriber, so the second install must report it"
    );
}
