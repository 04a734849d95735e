use crate::services::utils::normalize_project_name;
use anyhow::{Context, bail};

/// Builds and runs a workspace binary with `cargo run`.
///
/// # Result
/// Returns an `anyhow::Result<()>` once the binary exits.
///
/// # Errors
/// Returns an error if the build fails or the binary exits with a non-zero status.
pub fn run_project(project: &str) -> anyhow::Result<()> {
    let project = normalize_project_name(project);
    println!("🚀 Starting '{project}'...");

    let status = std::process::Command::new("cargo")
        .args(["run", "-p", &project])
        .status()
        .context("Failed to execute cargo run")?;

    if !status.success() {
        bail!("'{project}' exited with non-zero status: {}", status.code().unwrap_or(-1));
    }

    Ok(())
}
