use dioxus::prelude::*;

/// The {{project-name}} section.
#[component]
pub fn Feature() -> Element {
    rsx! {
        section { class: "{{project-name}}",
            h2 { "{{project-name}}" }
        }
    }
}
