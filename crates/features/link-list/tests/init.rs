use dioxus::prelude::Element;
use lhub_kernel::domain::constants;
use lhub_link_list::{LinkList, init};

#[test]
fn init_binds_the_section_to_its_tag() {
    let entry = init().expect("init should succeed");

    assert_eq!(entry.tag, constants::LINK_LIST);
    assert!(std::ptr::fn_addr_eq(entry.component, LinkList as fn() -> Element));
}
