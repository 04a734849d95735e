//! Well-known string identifiers shared across the workspace.

/// Tag the root component is registered under.
pub const APP: &str = "app";
/// Tag of the link collection section.
pub const LINK_LIST: &str = "link-list";
/// Tag of the usage guide section.
pub const HOW_TO: &str = "how-to";

/// Element id of the mount point in the host document (`#app`).
pub const DEFAULT_ROOT_ID: &str = "app";
