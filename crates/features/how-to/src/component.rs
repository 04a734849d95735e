use dioxus::prelude::*;

use crate::guide;

/// The usage guide section.
#[component]
pub fn HowTo() -> Element {
    rsx! {
        section { class: "how-to",
            h2 { "How to use this page" }
            ol {
                for step in guide::steps() {
                    li { key: "{step.title}",
                        strong { "{step.title}" }
                        p { "{step.detail}" }
                    }
                }
            }
        }
    }
}
