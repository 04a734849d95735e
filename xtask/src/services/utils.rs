use anyhow::{Context, Result};
use cargo_generate::{GenerateArgs, TemplatePath, generate};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns the workspace root, derived from the xtask manifest location.
///
/// # Result
/// Returns the root path as `PathBuf`.
///
/// # Errors
/// Returns an error if the manifest directory has no parent.
pub fn get_project_root() -> Result<PathBuf> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .context("The xtask manifest has no parent directory")
}

#[derive(Debug, Deserialize)]
pub struct CrateInfo {
    #[serde(skip)]
    pub path: PathBuf,
    pub package: PackageInfo,
}

#[derive(Debug, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    // A manifest may carry `description.workspace = true` instead of a string.
    #[serde(default)]
    description: Option<toml::Value>,
}

impl PackageInfo {
    /// Description, when the manifest carries one directly.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_ref().and_then(toml::Value::as_str)
    }
}

impl CrateInfo {
    /// Folder name of the crate inside its parent directory.
    fn folder(&self) -> &str {
        self.path.file_name().and_then(|n| n.to_str()).unwrap_or("unknown")
    }
}

/// Discovers crates in a workspace subdirectory (e.g., "crates/features", "apps", "infra").
///
/// # Result
/// Returns a list of discovered crates sorted by folder name, each with parsed
/// package metadata.
///
/// # Errors
/// Returns an error if the directory cannot be read, a `Cargo.toml` cannot be read,
/// or the metadata cannot be parsed.
pub fn get_workspace_crates(sub_dir: &str) -> Result<Vec<CrateInfo>> {
    let project_root = get_project_root()?;
    let target_dir = project_root.join(sub_dir);

    let mut crates = Vec::new();

    if !target_dir.exists() {
        return Ok(crates);
    }

    let inherited = workspace_description(&project_root);

    for entry in fs::read_dir(&target_dir)? {
        let path = entry?.path();

        if path.is_dir() {
            if let Some(mut info) = read_crate_info(&path)? {
                // Resolve `description.workspace = true` to the workspace value.
                if info.package.description().is_none() {
                    info.package.description = inherited.clone().map(toml::Value::String);
                }
                crates.push(info);
            }
        }
    }

    crates.sort_by(|a, b| a.folder().cmp(b.folder()));

    Ok(crates)
}

fn workspace_description(project_root: &Path) -> Option<String> {
    let manifest = fs::read_to_string(project_root.join("Cargo.toml")).ok()?;
    let value: toml::Value = toml::from_str(&manifest).ok()?;
    Some(value.get("workspace")?.get("package")?.get("description")?.as_str()?.to_owned())
}

fn read_crate_info(path: &Path) -> Result<Option<CrateInfo>> {
    let cargo_path = path.join("Cargo.toml");
    if !cargo_path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&cargo_path)
        .with_context(|| format!("Failed to read {}", cargo_path.display()))?;
    let mut info: CrateInfo = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", cargo_path.display()))?;
    info.path = path.to_path_buf();

    Ok(Some(info))
}

/// Prints a formatted table of crates with their folder, name, and description.
pub fn render_crate_table(title: &str, crates: &[CrateInfo]) {
    println!("\n{title}:\n");
    println!("{:<15} {:<20} {:<45}", "Folder", "Crate Name", "Description");
    println!("{:-<80}", "");

    for info in crates {
        let desc = info.package.description().unwrap_or("(no description)");

        println!("{:<15} {:<20} {:<45}", info.folder(), info.package.name, desc);
    }
    println!();
}

/// Normalizes a project crate name to the workspace naming convention.
#[must_use]
pub fn normalize_project_name(project: &str) -> String {
    if project.starts_with("lhub-") { project.to_owned() } else { format!("lhub-{project}") }
}

/// Renders one of the bundled templates into a workspace subdirectory.
///
/// # Result
/// Returns `Ok(())` once the new crate exists on disk and the workspace metadata
/// has been refreshed.
///
/// # Errors
/// Returns an error if template rendering fails or the destination is not writable.
pub fn scaffold(template: &str, destination: &str, name: &str, define: Vec<String>) -> Result<()> {
    let project_root = get_project_root()?;

    generate(GenerateArgs {
        name: Some(name.to_owned()),
        destination: Some(project_root.join(destination)),
        define,
        template_path: TemplatePath {
            path: Some(format!("xtask/templates/{template}")),
            ..Default::default()
        },
        silent: true,
        ..Default::default()
    })?;

    refresh_metadata()
}

/// Re-runs `cargo metadata` so rust-analyzer and other tooling pick up a new crate.
///
/// # Result
/// Returns `Ok(())` once the metadata command has run.
///
/// # Errors
/// Returns an error if `cargo metadata` cannot be spawned.
pub fn refresh_metadata() -> Result<()> {
    println!("Refreshing cargo metadata...");
    std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1"])
        .stdout(std::process::Stdio::null())
        .status()?;
    Ok(())
}
