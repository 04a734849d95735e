use dioxus::prelude::Element;
use lhub_how_to::{HowTo, init};
use lhub_kernel::domain::constants;

#[test]
fn init_binds_the_section_to_its_tag() {
    let entry = init().expect("init should succeed");

    assert_eq!(entry.tag, constants::HOW_TO);
    assert!(std::ptr::fn_addr_eq(entry.component, HowTo as fn() -> Element));
}
