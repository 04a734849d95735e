use serde::{Deserialize, Serialize};

/// A single entry of the link collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub title: String,
    pub url: String,
    pub blurb: Option<String>,
}

impl Link {
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self { title: title.into(), url: url.into(), blurb: None }
    }

    #[must_use]
    pub fn with_blurb(mut self, blurb: impl Into<String>) -> Self {
        self.blurb = Some(blurb.into());
        self
    }

    /// Whether the URL uses a scheme a browser anchor can open safely.
    #[must_use]
    pub fn has_web_scheme(&self) -> bool {
        self.url.starts_with("https://") || self.url.starts_with("http://")
    }
}
