use lhub_domain::links::Link;

#[test]
fn link_builder_sets_fields() {
    let link = Link::new("docs.rs", "https://docs.rs").with_blurb("API docs for every crate");

    assert_eq!(link.title, "docs.rs");
    assert_eq!(link.url, "https://docs.rs");
    assert_eq!(link.blurb.as_deref(), Some("API docs for every crate"));
}

#[test]
fn web_scheme_check_rejects_non_http_urls() {
    assert!(Link::new("ok", "https://example.com").has_web_scheme());
    assert!(Link::new("ok", "http://example.com").has_web_scheme());
    assert!(!Link::new("bad", "ftp://example.com").has_web_scheme());
    assert!(!Link::new("bad", "javascript:alert(1)").has_web_scheme());
}

#[test]
fn link_deserializes_without_blurb() {
    let link: Link = serde_json::from_str(r#"{"title":"t","url":"https://x","blurb":null}"#)
        .expect("link deserialize");
    assert!(link.blurb.is_none());
}
