use dioxus::prelude::*;
use lhub::App;
use lhub::domain::config::UiConfig;
use lhub::domain::features::SectionSet;

fn render_with(config: UiConfig) -> String {
    let mut dom = VirtualDom::new(App);
    dom.insert_any_root_context(Box::new(config));
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn app_renders_chrome_and_both_sections_by_default() {
    let html = render_with(UiConfig::default());

    assert!(html.contains("LinkHub"));
    assert!(html.contains(r#"class="page-header""#));
    assert!(html.contains(r#"class="how-to""#));
    assert!(html.contains(r#"class="link-list""#));
}

#[test]
fn sections_follow_the_configured_set() {
    let mut config = UiConfig::default();
    config.sections = SectionSet::LINK_LIST;

    let html = render_with(config);

    assert!(html.contains(r#"class="link-list""#));
    assert!(!html.contains(r#"class="how-to""#));
}

#[test]
fn app_renders_with_default_config_when_none_is_provided() {
    let mut dom = VirtualDom::new(App);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains("LinkHub"));
    assert!(html.contains(r#"class="link-list""#));
}
