use lhub_domain::constants::{APP, DEFAULT_ROOT_ID, HOW_TO, LINK_LIST};
use lhub_domain::features::SectionSet;

#[test]
fn constants_match_component_tags() {
    assert_eq!(APP, "app");
    assert_eq!(LINK_LIST, "link-list");
    assert_eq!(HOW_TO, "how-to");
    assert_eq!(DEFAULT_ROOT_ID, "app");
}

#[test]
fn tags_map_to_section_flags() {
    assert_eq!(SectionSet::from(LINK_LIST), SectionSet::LINK_LIST);
    assert_eq!(SectionSet::from(HOW_TO), SectionSet::HOW_TO);
    assert_eq!(SectionSet::from("*"), SectionSet::ALL);
    assert_eq!(SectionSet::from("unknown"), SectionSet::empty());
}

#[test]
fn all_is_the_union_of_every_section() {
    assert_eq!(SectionSet::ALL, SectionSet::LINK_LIST | SectionSet::HOW_TO);
    assert_eq!(SectionSet::default(), SectionSet::ALL);
}
