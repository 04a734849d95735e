use crate::services::utils::{get_workspace_crates, render_crate_table, scaffold};
use anyhow::Result;

/// Scaffolds a new page-section crate under `crates/features/`.
///
/// # Result
/// Returns `Ok(())` once the crate exists on disk.
///
/// # Errors
/// Returns an error when the template cannot be rendered into `crates/features/`.
pub fn create_feature(name: &str) -> Result<()> {
    scaffold(
        "feature",
        "crates/features",
        name,
        vec![
            format!("package_name=lhub-{name}"),
            format!("package_description=A new page section {name}"),
        ],
    )?;

    println!("✅ Created feature 'lhub-{name}' with package 'crates/features/{name}'");
    println!("💡 Register its component in the 'lhub' facade to show it in the shell.");
    Ok(())
}

/// Prints the table of page-section crates currently in the workspace.
///
/// # Errors
/// Returns an error when `crates/features/` cannot be scanned.
pub fn list_crates() -> Result<()> {
    let features = get_workspace_crates("crates/features")?;

    if features.is_empty() {
        println!("ℹ️ No page sections under 'crates/features/' yet.");
        return Ok(());
    }

    render_crate_table("Features", &features);

    Ok(())
}
