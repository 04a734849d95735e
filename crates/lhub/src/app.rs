use dioxus::prelude::*;

use crate::domain::config::UiConfig;
use crate::domain::features::SectionSet;
use lhub_how_to::HowTo;
use lhub_link_list::LinkList;

/// The root component: page chrome plus the sections enabled in the config.
///
/// The shell provides a [`UiConfig`] through root context; rendering without
/// one falls back to the defaults.
#[component]
pub fn App() -> Element {
    let config = try_consume_context::<UiConfig>().unwrap_or_default();
    let sections = config.sections;

    rsx! {
        header { class: "page-header",
            h1 { "{config.page.title}" }
            p { class: "tagline", "{config.page.tagline}" }
        }
        main {
            if sections.contains(SectionSet::HOW_TO) {
                HowTo {}
            }
            if sections.contains(SectionSet::LINK_LIST) {
                LinkList {}
            }
        }
    }
}
