pub mod classify;
pub mod extract;
pub mod fields;
pub mod sections;

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::error;

use crate::model::ParsedDocument;

pub use classify::is_structured_format;

/// Parse a knowledge-pack summary into structured data. Callers gate with
/// [`is_structured_format`] first; this never panics or errors — anything
/// that goes wrong inside the pipeline degrades to `None`, and callers fall
/// back to [`ParsedDocument::fallback`] with the raw text.
pub fn parse(text: &str) -> Option<ParsedDocument> {
    let result = catch_unwind(AssertUnwindSafe(|| {
        let sections = sections::split_sections(text);
        extract::assemble(text, &sections)
    }));
    match result {
        Ok(doc) => Some(doc),
        Err(_) => {
            error!("summary parsing panicked; treating input as unstructured");
            None
        }
    }
}

/// Short display digest: up to five key-moment insights, topped up from
/// framework descriptions when moments are scarce. Always recomputed from
/// the structured record, never stored.
pub fn derive_key_points(doc: &ParsedDocument) -> Vec<String> {
    let mut points: Vec<String> = doc
        .key_moments
        .iter()
        .take(5)
        .map(|m| m.insight.clone())
        .collect();

    if points.len() < 3 {
        for framework in doc.frameworks.iter().take(2) {
            // Char-based truncation keeps multi-byte text intact.
            let head: String = framework.description.chars().take(100).collect();
            points.push(format!("{}: {}...", framework.name, head));
        }
    }

    points.truncate(5);
    points
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Framework, KeyMoment};

    fn moment(s: &str) -> KeyMoment {
        KeyMoment {
            timestamp: "00:00".into(),
            insight: s.into(),
        }
    }

    #[test]
    fn parse_round_trips_raw_content() {
        let text = "## Video Context\n**Title**: Foo\n\n## Key Moments\n– **03:21** → Something happens\n";
        let doc = parse(text).unwrap();
        assert_eq!(doc.full_content, text);
        assert_eq!(doc.title, "Foo");
        assert_eq!(doc.key_moments.len(), 1);
    }

    #[test]
    fn parse_is_deterministic() {
        let text = std::fs::read_to_string("tests/fixtures/full_pack.md").unwrap();
        assert_eq!(parse(&text), parse(&text));
    }

    #[test]
    fn parse_never_fails_on_garbage() {
        for text in ["", "hello world", "\u{0}\u{1}\u{2}", "## Key Moments\n| | |"] {
            let doc = parse(text).expect("garbage should still yield a document");
            assert_eq!(doc.full_content, text);
        }
    }

    #[test]
    fn key_points_capped_at_five() {
        let doc = ParsedDocument {
            key_moments: (0..8).map(|i| moment(&format!("insight {i}"))).collect(),
            ..ParsedDocument::default()
        };
        let points = derive_key_points(&doc);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], "insight 0");
    }

    #[test]
    fn key_points_topped_up_from_frameworks() {
        let doc = ParsedDocument {
            key_moments: vec![moment("only one")],
            frameworks: vec![
                Framework {
                    name: "Loop".into(),
                    description: "x".repeat(150),
                },
                Framework {
                    name: "Ladder".into(),
                    description: "short".into(),
                },
            ],
            ..ParsedDocument::default()
        };
        let points = derive_key_points(&doc);
        assert_eq!(points.len(), 3);
        assert_eq!(points[1], format!("Loop: {}...", "x".repeat(100)));
        assert_eq!(points[2], "Ladder: short...");
    }

    #[test]
    fn key_points_empty_document() {
        let points = derive_key_points(&ParsedDocument::default());
        assert!(points.is_empty());
    }
}
