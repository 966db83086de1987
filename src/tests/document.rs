use super::{Document, IndexPayload};
use crate::scanner::HeadingPattern;

fn sample() -> Document {
    Document {
        id: 42,
        slug: "rust-notes".to_string(),
        title: "Rust notes".to_string(),
        content: "# Ownership\n## Borrowing\n# Traits".to_string(),
        version: 3,
        tags: vec!["rust".to_string(), "notes".to_string()],
    }
}

#[test]
fn test_index_id_combines_id_and_version() {
    assert_eq!(sample().index_id(), "42.3");
}

#[test]
fn test_index_payload() {
    assert_eq!(
        sample().index_payload(),
        IndexPayload {
            slug: "rust-notes".to_string(),
            version: "3".to_string(),
            title: "Rust notes".to_string(),
            content: "# Ownership\n## Borrowing\n# Traits".to_string(),
        }
    );
}

#[test]
fn test_toc_follows_content() {
    let mut doc = sample();
    assert_eq!(doc.toc().roots().len(), 2);

    doc.content.push_str("\n# Lifetimes");
    let toc = doc.toc();
    assert_eq!(toc.roots().len(), 3);
    assert_eq!(toc.node(toc.roots()[2]).title(), "Lifetimes");
}

#[test]
fn test_raw_tags_round_trip() {
    let mut doc = sample();
    assert_eq!(doc.raw_tags(), "rust,notes");

    doc.set_raw_tags(" async , ,tokio,");
    assert_eq!(doc.tags, ["async", "tokio"]);

    doc.set_raw_tags("");
    assert!(doc.tags.is_empty());
    assert_eq!(doc.raw_tags(), "");
}

#[test]
fn test_missing_tags_deserialise_as_empty() {
    let json = r#"{"id":1,"slug":"s","title":"t","content":"","version":1}"#;
    let doc: Document = serde_json::from_str(json).unwrap();
    assert!(doc.tags.is_empty());
}

#[test]
fn test_toc_with_custom_marker() {
    let mut doc = sample();
    doc.content = "= Part\n== Chapter\n# Ownership".to_string();

    let toc = doc.toc_with(&HeadingPattern::new('=').unwrap());

    assert_eq!(toc.len(), 2);
    assert_eq!(toc.node(toc.roots()[0]).title(), "Part");
    assert_eq!(doc.toc().len(), 1);
}
