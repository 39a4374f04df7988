use std::collections::HashMap;

use tracing::debug;

/// Canonical section headers in their canonical order. Section boundaries
/// follow this order, not document order: a header's content ends at the
/// first *later* canonical header found in the text. Known fragility when a
/// document reorders headers; kept because downstream output depends on it.
const SECTION_HEADERS: &[&str] = &[
    "## Video Context",
    "## TL;DR (≤100 words)",
    "## Key Moments",
    "## Strategic Frameworks",
    "## Debunked Assumptions",
    "## In Practice",
    "## Playbooks & Heuristics",
    "## Insight Enrichment",
    "### Feynman Flashcards",
    "### Glossary",
    "### Quick Quiz",
    "### Novel-Idea Meter",
];

/// Split a document into canonical sections. Keys are the header titles
/// lowercased with the hash prefix stripped ("video context", "glossary",
/// ...); absent headers are omitted.
pub fn split_sections(text: &str) -> HashMap<String, String> {
    let markdown = isolate_markdown(text);
    let mut sections = HashMap::new();

    for (i, header) in SECTION_HEADERS.iter().enumerate() {
        let Some(start) = markdown.find(header) else {
            continue;
        };
        let content_start = start + header.len();

        let mut end = markdown.len();
        for next_header in &SECTION_HEADERS[i + 1..] {
            if let Some(idx) = markdown[content_start..].find(next_header) {
                end = end.min(content_start + idx);
            }
        }
        if let Some(idx) = markdown[content_start..].find("\n---") {
            end = end.min(content_start + idx);
        }

        let body = markdown[content_start..end].trim();
        let key = header.trim_start_matches('#').trim().to_lowercase();
        sections.insert(key, body.to_string());
    }

    debug!(
        sections = ?sections.keys().collect::<Vec<_>>(),
        "split {} sections",
        sections.len()
    );
    sections
}

/// If the document wraps its payload in a fenced ```markdown block (the
/// generator sometimes surrounds it with commentary), operate only on the
/// interior. An unclosed fence runs to end of input.
fn isolate_markdown(text: &str) -> &str {
    const FENCE: &str = "```markdown";
    match text.find(FENCE) {
        None => text,
        Some(start) => {
            let interior_start = start + FENCE.len();
            match text[interior_start..].find("```") {
                Some(end) => &text[interior_start..interior_start + end],
                None => &text[interior_start..],
            }
        }
    }
}

// ── Tests ──
