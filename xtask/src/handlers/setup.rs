use anyhow::{Context, Result};
use std::process::Command;

/// Cargo-installable tools the workspace relies on, as (probe binary, package).
const REQUIRED_TOOLS: &[(&str, &str)] = &[
    ("cargo-generate", "cargo-generate"),
    ("dx", "dioxus-cli"),
    ("cargo-audit", "cargo-audit"),
    ("cargo-nextest", "cargo-nextest"),
];

/// Compilation targets needed for browser builds.
const REQUIRED_TARGETS: &[&str] = &["wasm32-unknown-unknown"];

/// Prepares a machine for `LinkHub` development.
///
/// Installs (or updates) every tool in [`REQUIRED_TOOLS`] and adds the rustup
/// targets browser builds depend on.
///
/// # Result
/// Returns `Ok(())` once tools and targets are in place.
///
/// # Errors
/// Returns an error if any `cargo install` or `rustup target add` invocation fails.
pub fn setup_project() -> Result<()> {
    println!("🛠️  Setting up the LinkHub development environment...");

    for (bin, package) in REQUIRED_TOOLS {
        if is_tool_installed(bin) {
            println!("✅ {package} already present, checking for updates...");
        } else {
            println!("📥 Installing {package}...");
        }
        run_command("cargo", &["install", package, "--locked"])?;
    }

    install_targets()?;

    println!("\n✨ Setup complete! LinkHub is ready for development.");
    println!("💡 Start the browser shell with 'cargo xtask serve'.");
    Ok(())
}

fn install_targets() -> Result<()> {
    let output = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
        .context("Failed to query installed rustup targets")?;

    let installed = String::from_utf8_lossy(&output.stdout);

    for target in REQUIRED_TARGETS {
        if installed.contains(target) {
            println!("✅ Target {target} already added.");
            continue;
        }

        println!("🦀 Adding compilation target {target}...");
        run_command("rustup", &["target", "add", target])?;
    }

    Ok(())
}

fn is_tool_installed(tool: &str) -> bool {
    Command::new(tool)
        .arg("--version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .is_ok_and(|status| status.success())
}

fn run_command(cmd: &str, args: &[&str]) -> Result<()> {
    let status =
        Command::new(cmd).args(args).status().with_context(|| format!("Failed to launch {cmd}"))?;

    if !status.success() {
        anyhow::bail!("'{cmd} {args:?}' exited with {status}");
    }
    Ok(())
}
