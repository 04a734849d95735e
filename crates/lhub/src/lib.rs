//! Facade crate for `LinkHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] to validate every slice and build the component registry.
//! - Hand the registry to a shell, which resolves the root tag and mounts it.

mod app;
mod error;

pub use crate::app::App;
pub use crate::error::{InitError, InitErrorExt};
pub use lhub_domain as domain;
pub use lhub_kernel as kernel;

use crate::domain::constants;
use crate::kernel::ComponentRegistry;

/// Feature registry for runtime introspection.
pub mod features {
    pub use lhub_how_to as how_to;
    pub use lhub_link_list as link_list;

    /// Build-time enabled features.
    pub const ENABLED: &[&str] = &["web", "link-list", "how-to"];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all feature slices and build the component registration table.
///
/// The table binds each tag to exactly one component: the root under
/// [`constants::APP`], plus one entry per section slice.
///
/// # Errors
/// Returns an [`InitError`] if a slice rejects its content or a tag would be
/// registered twice.
pub fn init() -> Result<ComponentRegistry, InitError> {
    let mut registry = ComponentRegistry::new();

    // Root
    registry.register(constants::APP, App)?;

    // Link list
    registry.insert(features::link_list::init()?)?;

    // How-to
    registry.insert(features::how_to::init()?)?;

    tracing::info!(components = registry.len(), "Component registry initialized");

    Ok(registry)
}
