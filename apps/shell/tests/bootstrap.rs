use dioxus::prelude::*;
use lhub::domain::constants;

#[test]
fn bootstrap_produces_a_mountable_root() {
    let components = lhub::init().expect("init should succeed");
    let root = components.require(constants::APP).expect("root should be registered");

    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(!html.is_empty(), "the mounted root should replace the host element with markup");
    assert!(html.contains(r#"class="link-list""#));
    assert!(html.contains(r#"class="how-to""#));
}
