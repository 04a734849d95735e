use crate::constants::DEFAULT_ROOT_ID;
use crate::features::SectionSet;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level client configuration shared across launchers.
///
/// The application bootstrap never loads this from a file or the environment;
/// [`UiConfig::default`] is the single source of values at startup. The type is
/// deserializable so callers and tests can construct overrides programmatically.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfigInner {
    pub page: PageConfig,
    pub root: RootConfig,
    pub sections: SectionSet,
}

/// Thin Arc-wrapped config for inexpensive cloning into the component tree.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(flatten, default)]
    inner: Arc<UiConfigInner>,
}

impl Deref for UiConfig {
    type Target = UiConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for UiConfig {
    fn deref_mut(&mut self) -> &mut UiConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Page header content.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub title: String,
    pub tagline: String,
}

/// Mount point of the root component in the host document.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RootConfig {
    pub id: String,
}

// --- Default ---

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "LinkHub".to_owned(),
            tagline: "A hand-picked collection of links worth keeping.".to_owned(),
        }
    }
}

impl Default for RootConfig {
    fn default() -> Self {
        Self { id: DEFAULT_ROOT_ID.to_owned() }
    }
}
