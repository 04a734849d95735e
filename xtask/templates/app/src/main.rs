use lhub_logger::Logger;

fn main() -> anyhow::Result<()> {
    let _logger = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true).init()?;

    let components = lhub::init()?;
    tracing::info!(components = components.len(), "{{project-name}} is ready");

    Ok(())
}
