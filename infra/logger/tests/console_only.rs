use lhub_logger::{LevelFilter, Logger};

#[test]
fn console_only_init_needs_no_worker_guard() {
    let logger = Logger::builder()
        .name("shell-console")
        .env_filter("lhub=debug")
        .startup_notice(false)
        .level(LevelFilter::DEBUG)
        .init()
        .expect("console output alone should be a valid configuration");

    tracing::debug!("console sink is live");

    assert!(logger.guard().is_none(), "no file path was given, so no worker guard should exist");
}
