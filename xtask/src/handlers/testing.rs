use crate::services::utils::normalize_project_name;
use anyhow::{Result, bail};

/// Runs tests in the workspace or a specific crate.
///
/// Prefers `cargo nextest` when it is installed and falls back to plain
/// `cargo test` otherwise.
///
/// # Result
/// Returns an `anyhow::Result<()>` indicating success or failure of the test run.
///
/// # Errors
/// Returns an error if the test execution fails or if the test runner is not found.
pub fn run_tests(project: Option<&str>) -> Result<()> {
    let has_nextest = std::process::Command::new("cargo-nextest").arg("--version").output().is_ok();

    let mut args: Vec<String> =
        if has_nextest { vec!["nextest".into(), "run".into()] } else { vec!["test".into()] };

    match test_scope(project) {
        Some(project) => args.extend(["-p".into(), project]),
        None => args.push("--workspace".into()),
    }

    args.push("--all-features".into());

    if has_nextest {
        args.extend(
            [
                "--failure-output",
                "immediate-final",
                "--success-output",
                "never",
                "--status-level",
                "skip",
            ]
            .into_iter()
            .map(String::from),
        );
    } else {
        args.extend(["--tests", "--lib", "--bins", "--", "-q"].into_iter().map(String::from));
    }

    println!("🧪 Running tests via '{}'...", if has_nextest { "nextest" } else { "cargo test" });
    cargo_exec(&args, "Tests failed!")
}

/// Runs doc tests in the workspace or a specific crate.
///
/// # Result
/// Returns an `anyhow::Result<()>` indicating success or failure of the doctest run.
///
/// # Errors
/// Returns an error if the doctest execution fails.
pub fn run_doctests(project: Option<&str>) -> Result<()> {
    let mut args: Vec<String> = vec!["test".into(), "--doc".into()];

    match test_scope(project) {
        Some(project) => args.extend(["-p".into(), project]),
        None => args.push("--workspace".into()),
    }

    args.push("--all-features".into());

    println!("📚 Running doc tests via 'cargo test --doc'...");
    cargo_exec(&args, "Doc tests failed!")
}

/// Resolves the crate a test run targets. `None` means the whole workspace.
fn test_scope(project: Option<&str>) -> Option<String> {
    match project {
        None | Some("all") => None,
        Some(project) => Some(normalize_project_name(project)),
    }
}

fn cargo_exec(args: &[String], failure: &'static str) -> Result<()> {
    let status = std::process::Command::new("cargo").args(args).status()?;

    if !status.success() {
        bail!("{failure}");
    }
    Ok(())
}
