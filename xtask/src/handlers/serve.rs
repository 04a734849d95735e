use crate::services::utils::normalize_project_name;
use anyhow::{Context, bail};

/// App served when no project is given.
const DEFAULT_APP: &str = "shell";

/// Serves a web application through `dx serve` with hot reload.
///
/// # Result
/// Returns an `anyhow::Result<()>` once the dev server exits.
///
/// # Errors
/// Returns an error if `dx` is not installed or the dev server exits with a
/// non-zero status.
pub fn serve_project(project: Option<&str>) -> anyhow::Result<()> {
    let project = normalize_project_name(project.unwrap_or(DEFAULT_APP));

    println!("🌐 Serving '{project}' at http://localhost:8080 (Ctrl+C to stop)...");
    let status = std::process::Command::new("dx")
        .args(["serve", "--package", &project])
        .status()
        .context("Failed to execute dx. Run 'cargo xtask setup' to install dioxus-cli")?;

    if !status.success() {
        bail!("Dev server exited with non-zero status: {}", status.code().unwrap_or(-1));
    }

    Ok(())
}
