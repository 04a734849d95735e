use crate::services::utils::{get_workspace_crates, render_crate_table, scaffold};
use anyhow::Result;

/// Scaffolds a new infrastructure crate under `infra/`.
///
/// # Result
/// Returns `Ok(())` once the crate exists on disk.
///
/// # Errors
/// Returns an error when the template cannot be rendered into `infra/`.
pub fn create_lib(name: &str) -> Result<()> {
    scaffold(
        "lib",
        "infra",
        name,
        vec![
            format!("package_name=lhub-{name}"),
            format!("package_description=A new library lhub-{name}"),
        ],
    )?;

    println!("✅ Created lib 'lhub-{name}' with package 'infra/{name}'");
    Ok(())
}

/// Prints the table of infrastructure crates currently in the workspace.
///
/// # Errors
/// Returns an error when `infra/` cannot be scanned.
pub fn list_libs() -> Result<()> {
    let libraries = get_workspace_crates("infra")?;

    if libraries.is_empty() {
        println!("ℹ️ No libraries under 'infra/' yet.");
        return Ok(());
    }

    render_crate_table("Infrastructure", &libraries);

    Ok(())
}
