use crate::services::utils::{get_workspace_crates, render_crate_table, scaffold};
use anyhow::Result;

/// Scaffolds a new application crate under `apps/`.
///
/// The template wires the binary up to the `lhub` facade and the shared logger,
/// so a freshly generated app boots straight into a registered component tree.
///
/// # Result
/// Returns `Ok(())` once the crate exists on disk.
///
/// # Errors
/// Returns an error when the template cannot be rendered into `apps/`.
pub fn create_app(name: &str) -> Result<()> {
    scaffold(
        "app",
        "apps",
        name,
        vec![
            format!("package_bin={name}"),
            format!("package_name=lhub-{name}"),
            format!("package_description=A new application {name}"),
        ],
    )?;

    println!("✅ Created app 'lhub-{name}' with package 'apps/{name}'");
    println!("💡 Serve it with 'cargo xtask serve {name}'.");
    Ok(())
}

/// Prints the table of application crates currently in the workspace.
///
/// # Errors
/// Returns an error when `apps/` cannot be scanned.
pub fn list_apps() -> Result<()> {
    let applications = get_workspace_crates("apps")?;

    if applications.is_empty() {
        println!("ℹ️ No applications under 'apps/' yet.");
        return Ok(());
    }

    render_crate_table("Applications", &applications);

    Ok(())
}
