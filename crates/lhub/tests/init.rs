use dioxus::prelude::Element;
use lhub::domain::constants;
use lhub::features::{how_to, link_list};

#[test]
fn init_registers_each_tag_exactly_once() {
    let registry = lhub::init().expect("init should succeed");

    assert_eq!(registry.len(), 3);

    let tags: Vec<_> = registry.tags().collect();
    assert_eq!(tags, [constants::APP, constants::LINK_LIST, constants::HOW_TO]);
}

#[test]
fn registered_components_keep_their_identity() {
    let registry = lhub::init().expect("init should succeed");

    let app = registry.require(constants::APP).expect("root should resolve");
    assert!(std::ptr::fn_addr_eq(app, lhub::App as fn() -> Element));

    let links = registry.require(constants::LINK_LIST).expect("section should resolve");
    assert!(std::ptr::fn_addr_eq(links, link_list::LinkList as fn() -> Element));

    let guide = registry.require(constants::HOW_TO).expect("section should resolve");
    assert!(std::ptr::fn_addr_eq(guide, how_to::HowTo as fn() -> Element));
}

#[test]
fn a_second_registration_under_a_taken_tag_is_rejected() {
    let mut registry = lhub::init().expect("init should succeed");

    let err = registry.register(constants::APP, lhub::App).expect_err("duplicate tag must fail");
    assert!(err.to_string().contains(constants::APP));

    // The original binding stays in place.
    assert_eq!(registry.len(), 3);
    let app = registry.require(constants::APP).expect("root should resolve");
    assert!(std::ptr::fn_addr_eq(app, lhub::App as fn() -> Element));
}

#[test]
fn enabled_features_are_reported() {
    assert!(lhub::features::is_enabled("web"));
    assert!(lhub::features::is_enabled("link-list"));
    assert!(lhub::features::is_enabled("how-to"));
    assert!(!lhub::features::is_enabled("desktop"));
}
