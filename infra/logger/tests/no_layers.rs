use lhub_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn init_without_layers_is_rejected() {
    let err = Logger::builder()
        .name("integration-no-layers")
        .console(false)
        .level(LevelFilter::INFO)
        .init()
        .expect_err("init without any output layer should fail");

    assert!(
        matches!(err, LoggerError::InvalidConfiguration { .. }),
        "expected invalid configuration error when no layers are enabled"
    );
}
