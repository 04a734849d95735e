//! Usage guide feature slice: the "how to" section of the page.

mod component;
mod error;
mod guide;

pub use crate::component::HowTo;
pub use crate::error::{HowToError, HowToErrorExt};
pub use crate::guide::{Step, steps};

use lhub_kernel::RegisteredComponent;
use lhub_kernel::domain::constants;

/// Initialize the usage guide feature.
///
/// # Errors
///
/// Returns [`HowToError::Content`] when the guide is empty or a step is blank.
pub fn init() -> Result<RegisteredComponent, HowToError> {
    guide::validate()?;

    tracing::info!(tag = constants::HOW_TO, "How-to slice initialized");

    Ok(RegisteredComponent::new(constants::HOW_TO, HowTo))
}
