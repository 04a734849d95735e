//! The curated content this section renders.

use std::sync::OnceLock;

use lhub_domain::links::Link;

use crate::error::LinkListError;

static CURATED: OnceLock<Vec<Link>> = OnceLock::new();

/// The hand-picked collection, in display order.
pub fn curated() -> &'static [Link] {
    CURATED.get_or_init(|| {
        vec![
            Link::new("MDN Web Docs", "https://developer.mozilla.org")
                .with_blurb("Reference for every corner of the web platform."),
            Link::new("The Rust Programming Language", "https://doc.rust-lang.org/book/")
                .with_blurb("The canonical introduction to Rust."),
            Link::new("Can I Use", "https://caniuse.com")
                .with_blurb("Browser support tables for web platform features."),
            Link::new("regex101", "https://regex101.com")
                .with_blurb("Build and debug regular expressions interactively."),
            Link::new("Excalidraw", "https://excalidraw.com")
                .with_blurb("A quick virtual whiteboard for sketching diagrams."),
            Link::new("Keep a Changelog", "https://keepachangelog.com")
                .with_blurb("Conventions for changelogs humans can read."),
            Link::new("explainshell", "https://explainshell.com")
                .with_blurb("Paste a shell one-liner, get every flag explained."),
        ]
    })
}

/// Checks the collection before its tag is registered.
pub(crate) fn validate() -> Result<(), LinkListError> {
    let links = curated();

    if links.is_empty() {
        return Err(LinkListError::Content {
            message: "the curated collection is empty".into(),
            context: None,
        });
    }

    for link in links {
        if link.title.trim().is_empty() {
            return Err(LinkListError::Content {
                message: format!("`{}` has no title", link.url).into(),
                context: None,
            });
        }
        if !link.has_web_scheme() {
            return Err(LinkListError::Content {
                message: format!("`{}` does not use a web scheme", link.url).into(),
                context: None,
            });
        }
    }

    Ok(())
}
