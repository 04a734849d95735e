//! Convenience re-exports for crates building on the kernel.

pub use crate::error::{RegistryError, RegistryErrorExt};
pub use crate::registry::{ComponentRegistry, DynComponent, RegisteredComponent};
pub use lhub_domain::constants;
