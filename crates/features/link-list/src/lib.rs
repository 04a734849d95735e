//! Link list feature slice: the curated collection section of the page.

mod collection;
mod component;
mod error;

pub use crate::collection::curated;
pub use crate::component::LinkList;
pub use crate::error::{LinkListError, LinkListErrorExt};

use lhub_kernel::RegisteredComponent;
use lhub_kernel::domain::constants;

/// Initialize the link list feature.
///
/// Validates the curated collection and returns the registration binding the
/// section component to its markup tag.
///
/// # Errors
///
/// Returns [`LinkListError::Content`] when the collection is empty or an
/// entry carries a URL a browser anchor cannot open.
pub fn init() -> Result<RegisteredComponent, LinkListError> {
    collection::validate()?;

    tracing::info!(tag = constants::LINK_LIST, "Link list slice initialized");

    Ok(RegisteredComponent::new(constants::LINK_LIST, LinkList))
}
