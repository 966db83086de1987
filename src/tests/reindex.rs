use super::{build_forests, reindex_all, DocumentSource, JsonLinesIndex, SearchIndex};
use crate::document::{Document, IndexPayload};
use crate::error::{Error, Result};
use crate::scanner::HeadingPattern;

struct MemorySource(Vec<Document>);

impl DocumentSource for MemorySource {
    fn documents(&self) -> Result<Vec<Document>> {
        Ok(self.0.clone())
    }
}

struct BrokenSource;

impl DocumentSource for BrokenSource {
    fn documents(&self) -> Result<Vec<Document>> {
        Err(Error::Source("store offline".to_string()))
    }
}

#[derive(Default)]
struct RecordingIndex {
    entries: Vec<(String, IndexPayload)>,
    reject: Option<String>,
}

impl SearchIndex for RecordingIndex {
    fn index(&mut self, id: &str, payload: &IndexPayload) -> Result<()> {
        if self.reject.as_deref() == Some(id) {
            return Err(Error::Source("disk full".to_string()));
        }
        self.entries.push((id.to_string(), payload.clone()));
        Ok(())
    }
}

fn doc(id: u64, content: &str) -> Document {
    Document {
        id,
        slug: format!("doc-{id}"),
        title: format!("Doc {id}"),
        content: content.to_string(),
        version: 1,
        tags: Vec::new(),
    }
}

fn corpus() -> Vec<Document> {
    vec![
        doc(1, "# A\n## B"),
        doc(2, "no headings"),
        doc(3, "# C\n# D\n### E"),
    ]
}

#[test]
fn test_reindex_all_indexes_every_document_in_order() {
    let source = MemorySource(corpus());
    let mut index = RecordingIndex::default();

    let report = reindex_all(&source, &mut index, HeadingPattern::markdown()).unwrap();

    assert_eq!(report.documents, 3);
    assert_eq!(report.headings, 5);
    let ids: Vec<&str> = index.entries.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(ids, ["1.1", "2.1", "3.1"]);
    assert_eq!(index.entries[2].1.slug, "doc-3");
}

#[test]
fn test_reindex_all_stops_at_first_failed_write() {
    let source = MemorySource(corpus());
    let mut index = RecordingIndex {
        reject: Some("2.1".to_string()),
        ..RecordingIndex::default()
    };

    let err = reindex_all(&source, &mut index, HeadingPattern::markdown()).unwrap_err();

    match err {
        Error::Index { id, reason } => {
            assert_eq!(id, "2.1");
            assert!(reason.contains("disk full"), "unexpected reason: {reason}");
        }
        other => panic!("expected index error, got {other}"),
    }
    assert_eq!(index.entries.len(), 1, "later documents must not be attempted");
}

#[test]
fn test_reindex_all_propagates_source_errors() {
    let mut index = RecordingIndex::default();
    let err = reindex_all(&BrokenSource, &mut index, HeadingPattern::markdown()).unwrap_err();
    assert!(matches!(err, Error::Source(_)));
    assert!(index.entries.is_empty());
}

#[test]
fn test_build_forests_matches_sequential_builds() {
    let docs = corpus();
    let forests = build_forests(&docs, HeadingPattern::markdown());
    assert_eq!(forests.len(), docs.len());
    for (doc, forest) in docs.iter().zip(&forests) {
        assert_eq!(&doc.toc(), forest);
    }
}

#[test]
fn test_json_lines_index_writes_one_object_per_line() {
    let source = MemorySource(vec![doc(7, "# Only")]);
    let mut index = JsonLinesIndex::new(Vec::new());

    reindex_all(&source, &mut index, HeadingPattern::markdown()).unwrap();

    let out = String::from_utf8(index.into_inner()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 1);
    let value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(value["id"], "7.1");
    assert_eq!(value["document"]["title"], "Doc 7");
    assert_eq!(value["document"]["version"], "1");
}

#[test]
fn test_reindex_all_counts_headings_under_custom_marker() {
    let source = MemorySource(vec![doc(1, "= Top\n== Sub\n# not a heading")]);
    let mut index = RecordingIndex::default();
    let pattern = HeadingPattern::new('=').unwrap();

    let report = reindex_all(&source, &mut index, &pattern).unwrap();

    assert_eq!(report.headings, 2);
}
