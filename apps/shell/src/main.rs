use lhub_logger::Logger;
use lhub_shell::WebApp;

fn main() -> anyhow::Result<()> {
    // Keep startup quiet before anything is constructed.
    let _logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .console(true)
        .startup_notice(false)
        .init()?;

    let components = lhub::init()?;

    WebApp::new().launch(&components)?;

    Ok(())
}
