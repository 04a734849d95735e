//! {{package_description}}

mod error;

pub use crate::error::{LibError, LibErrorExt};
