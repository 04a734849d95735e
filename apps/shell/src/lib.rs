use dioxus::prelude::*;

use lhub::domain::config::UiConfig;
use lhub::domain::constants;
use lhub::domain::features::SectionSet;
use lhub::kernel::{ComponentRegistry, RegistryError, RegistryErrorExt};

/// Browser shell for the page.
///
/// Owns the client configuration and mounts the root component onto the host
/// document. The mount point is the element whose id matches the configured
/// root (`#app` by default); the framework replaces its contents with the
/// rendered output and keeps ownership of that subtree from then on.
#[derive(Debug, Default)]
pub struct WebApp {
    config: UiConfig,
}

impl WebApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole client configuration.
    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub fn with_config(mut self, config: UiConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides the page title shown in the header.
    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.page.title = title.into();
        self
    }

    /// Overrides the id of the element the app mounts onto.
    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub fn with_root_id(mut self, id: impl Into<String>) -> Self {
        self.config.root.id = id.into();
        self
    }

    /// Overrides the set of sections the root component renders.
    #[must_use = "This function does nothing unless you call `launch()` on it"]
    pub fn with_sections(mut self, sections: SectionSet) -> Self {
        self.config.sections = sections;
        self
    }

    /// The entry point for mounting the app.
    ///
    /// Resolves the root component out of `components` and hands control to
    /// the framework. A missing mount element in the host document is the
    /// framework's failure to report, not this shell's.
    ///
    /// # Errors
    /// Returns [`RegistryError::UnknownTag`] when no root component was
    /// registered.
    pub fn launch(self, components: &ComponentRegistry) -> Result<(), RegistryError> {
        // The dioxus prelude has its own blanket `context` on `Result`, so ours goes by path.
        let root = RegistryErrorExt::context(
            components.require(constants::APP),
            "Resolving the root component",
        )?;

        tracing::info!(root = %self.config.root.id, "Mounting onto the host document");

        #[cfg(target_arch = "wasm32")]
        console_error_panic_hook::set_once();

        let cfg = dioxus::web::Config::default().rootname(self.config.root.id.clone());
        let context = self.config;
        LaunchBuilder::web()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(context.clone()))
            .launch(root);

        Ok(())
    }
}
