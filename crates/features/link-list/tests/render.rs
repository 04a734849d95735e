use dioxus::prelude::*;
use lhub_link_list::{LinkList, curated};

#[test]
fn section_renders_every_curated_entry() {
    let mut dom = VirtualDom::new(LinkList);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains(r#"class="link-list""#));
    for link in curated() {
        assert!(html.contains(link.url.as_str()), "rendered output should link {}", link.url);
        assert!(html.contains(link.title.as_str()), "rendered output should name {}", link.title);
    }
}

#[test]
fn entries_open_in_a_new_tab() {
    let mut dom = VirtualDom::new(LinkList);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);

    assert!(html.contains(r#"target="_blank""#));
    assert!(html.contains(r#"rel="noreferrer""#));
}
