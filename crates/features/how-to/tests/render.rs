use dioxus::prelude::*;
use lhub_how_to::{HowTo, steps};

#[test]
fn section_renders_every_step_in_order() {
    let mut dom = VirtualDom::new(HowTo);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains(r#"class="how-to""#));

    let mut cursor = 0;
    for step in steps() {
        let at = html[cursor..].find(step.title).expect("step should be rendered");
        cursor += at + step.title.len();
    }
}
