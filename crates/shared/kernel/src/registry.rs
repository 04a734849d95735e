//! Component registry for the browser shell.
//! Maps kebab-case tags to the functions that render them, the same way the
//! sections are referenced from markup.

use std::borrow::Cow;

use dioxus::prelude::Element;

use crate::error::RegistryError;

/// A renderable component, stored as a plain function pointer so identity
/// comparisons stay meaningful.
pub type DynComponent = fn() -> Element;

/// A single tag registration produced by a feature slice.
#[derive(Debug, Clone, Copy)]
pub struct RegisteredComponent {
    pub tag: &'static str,
    pub component: DynComponent,
}

impl RegisteredComponent {
    /// Binds a component to the tag it renders under.
    pub const fn new(tag: &'static str, component: DynComponent) -> Self {
        Self { tag, component }
    }
}

/// The registration table the shell resolves its root and sections through.
///
/// Entries keep their registration order. A tag maps to exactly one
/// component; a second registration under the same tag is rejected instead
/// of silently shadowing the first.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    entries: Vec<RegisteredComponent>,
}

impl ComponentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Registers `component` under `tag`.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateTag`] if the tag is already taken.
    pub fn register(
        &mut self,
        tag: &'static str,
        component: DynComponent,
    ) -> Result<(), RegistryError> {
        self.insert(RegisteredComponent::new(tag, component))
    }

    /// Inserts an already-built registration, e.g. one returned by a slice `init`.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateTag`] if the tag is already taken.
    pub fn insert(&mut self, entry: RegisteredComponent) -> Result<(), RegistryError> {
        if self.contains(entry.tag) {
            return Err(RegistryError::DuplicateTag { tag: entry.tag.into(), context: None });
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Looks a tag up, returning the component bound to it.
    #[must_use]
    pub fn resolve(&self, tag: &str) -> Option<DynComponent> {
        self.entries.iter().find(|entry| entry.tag == tag).map(|entry| entry.component)
    }

    /// Like [`ComponentRegistry::resolve`], but missing tags become an error.
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownTag`] if nothing was registered under `tag`.
    pub fn require(&self, tag: &str) -> Result<DynComponent, RegistryError> {
        self.resolve(tag).ok_or_else(|| RegistryError::UnknownTag {
            tag: Cow::Owned(tag.to_owned()),
            context: None,
        })
    }

    /// Whether a tag is already registered.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.entries.iter().any(|entry| entry.tag == tag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tags in registration order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.tag)
    }
}
