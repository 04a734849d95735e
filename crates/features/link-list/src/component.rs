use dioxus::prelude::*;

use crate::collection;

/// The curated collection section.
#[component]
pub fn LinkList() -> Element {
    rsx! {
        section { class: "link-list",
            h2 { "Links worth keeping" }
            ul {
                for link in collection::curated() {
                    li { key: "{link.url}",
                        a { href: "{link.url}", target: "_blank", rel: "noreferrer", "{link.title}" }
                        if let Some(blurb) = link.blurb.as_deref() {
                            p { class: "blurb", "{blurb}" }
                        }
                    }
                }
            }
        }
    }
}
