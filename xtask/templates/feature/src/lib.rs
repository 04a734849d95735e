//! {{package_description}}

mod component;
mod error;

pub use crate::component::Feature;
pub use crate::error::{FeatureError, FeatureErrorExt};

use lhub_kernel::RegisteredComponent;

/// Tag the shell resolves this section by.
pub const TAG: &str = "{{project-name}}";

/// Initialize the feature slice.
///
/// # Errors
///
/// Returns [`FeatureError`] when the slice cannot be prepared.
pub fn init() -> Result<RegisteredComponent, FeatureError> {
    tracing::info!(tag = TAG, "{{project-name}} slice initialized");

    Ok(RegisteredComponent::new(TAG, Feature))
}
