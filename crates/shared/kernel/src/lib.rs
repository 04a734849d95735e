//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it carries the component registration table the
//! browser shell resolves its sections through, plus a small prelude.
//!
//! ## Component registration
//! ```rust
//! use dioxus::prelude::*;
//! use lhub_kernel::prelude::*;
//!
//! fn placeholder() -> Element {
//!     rsx! { span { "placeholder" } }
//! }
//!
//! let mut registry = ComponentRegistry::new();
//! registry.register("placeholder", placeholder).unwrap();
//! assert!(registry.contains("placeholder"));
//! ```

mod error;
pub mod prelude;
pub mod registry;

pub use crate::error::{RegistryError, RegistryErrorExt};
pub use crate::registry::{ComponentRegistry, DynComponent, RegisteredComponent};
pub use lhub_domain as domain;
