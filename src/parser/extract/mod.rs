pub mod bullets;
pub mod enrichment;
pub mod flashcards;
pub mod frameworks;
pub mod glossary;
pub mod key_moments;
pub mod novel_ideas;
pub mod playbooks;
pub mod quiz;

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::model::{LearningPack, ParsedDocument};
use crate::parser::fields::{extract_field, extract_speakers};

/// Assemble one document from the split sections. Every field degrades to
/// its empty/default shape when the section is absent.
pub fn assemble(content: &str, sections: &HashMap<String, String>) -> ParsedDocument {
    let get = |key: &str| sections.get(key).map(String::as_str).unwrap_or("");

    let video_context = get("video context");
    let tldr = get("tl;dr (≤100 words)").trim().to_string();

    let video_url = non_empty(extract_field(video_context, "Video URL"));
    let generated_on = non_empty(extract_field(video_context, "Generated On"));
    let language = or_default(extract_field(video_context, "Language"), "en");
    let version = or_default(extract_field(video_context, "Version"), "v1.0");

    let doc = ParsedDocument {
        title: extract_field(video_context, "Title"),
        speakers: extract_speakers(video_context),
        duration: extract_field(video_context, "Duration"),
        channel: extract_field(video_context, "Channel"),
        synopsis: extract_field(video_context, "Synopsis"),
        video_url,
        language,
        generated_on,
        version,
        tldr: tldr.clone(),
        key_moments: key_moments::parse(get("key moments")),
        frameworks: frameworks::parse(get("strategic frameworks")),
        debunked_assumptions: bullets::parse(get("debunked assumptions")),
        in_practice: bullets::parse(get("in practice")),
        playbooks: playbooks::parse(get("playbooks & heuristics")),
        insight_enrichment: enrichment::parse(get("insight enrichment")),
        learning_pack: assemble_learning_pack(&tldr, sections),
        full_content: content.to_string(),
    };

    debug!(
        moments = doc.key_moments.len(),
        frameworks = doc.frameworks.len(),
        playbooks = doc.playbooks.len(),
        "assembled document"
    );
    doc
}

fn assemble_learning_pack(
    tldr: &str,
    sections: &HashMap<String, String>,
) -> Option<LearningPack> {
    let get = |key: &str| sections.get(key).map(String::as_str).unwrap_or("");

    let pack = LearningPack {
        tldr100: tldr.to_string(),
        flashcards: flashcards::parse(get("feynman flashcards")),
        glossary: glossary::parse(get("glossary")),
        quick_quiz: quiz::parse(get("quick quiz")),
        novel_idea_meter: novel_ideas::parse(get("novel-idea meter")),
    };

    // Absent sub-pack means an absent field, not a record of empties.
    if pack.is_empty() {
        None
    } else {
        Some(pack)
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

fn or_default(s: String, default: &str) -> String {
    if s.is_empty() {
        default.to_string()
    } else {
        s
    }
}

// ── Shared pattern helpers ──

/// Ordered fallback strategy: try each pattern function in turn, keep the
/// first non-empty result. Partial results are never merged across patterns.
pub(crate) fn first_nonempty<T>(text: &str, strategies: &[fn(&str) -> Vec<T>]) -> Vec<T> {
    for strategy in strategies {
        let out = strategy(text);
        if !out.is_empty() {
            return out;
        }
    }
    Vec::new()
}

static BULLET_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*•]\s+(.*)$").unwrap());
static NUMBERED_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s+(.*)$").unwrap());

/// Bullet items with continuation lines folded in (joined with a space).
/// A blank line or the next bullet ends an item.
pub(crate) fn bullet_items(text: &str) -> Vec<String> {
    chunk_items(text, &BULLET_START_RE)
}

/// Numbered items (`1. ...`) with continuation lines folded in.
pub(crate) fn numbered_items(text: &str) -> Vec<String> {
    chunk_items(text, &NUMBERED_START_RE)
}

fn chunk_items(text: &str, start_re: &Regex) -> Vec<String> {
    let mut items: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        let trimmed = line.trim();
        if let Some(caps) = start_re.captures(trimmed) {
            if let Some(done) = current.take() {
                items.push(done);
            }
            current = Some(caps[1].trim().to_string());
        } else if trimmed.is_empty() {
            if let Some(done) = current.take() {
                items.push(done);
            }
        } else if let Some(item) = current.as_mut() {
            item.push(' ');
            item.push_str(trimmed);
        }
    }
    if let Some(done) = current {
        items.push(done);
    }
    items
}

/// Data rows of a markdown pipe-table: the header row and `|---|` separator
/// rows are skipped, outer empty cells trimmed away.
pub(crate) fn table_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut header_seen = false;

    for line in text.lines() {
        let trimmed = line.trim();
        if !trimmed.starts_with('|') || trimmed.matches('|').count() < 3 {
            continue;
        }
        let cells: Vec<String> = trimmed
            .split('|')
            .map(|c| c.trim().to_string())
            .collect();
        // Drop the empty cells outside the outer pipes.
        let cells = &cells[1..cells.len().saturating_sub(1)];

        let is_separator = cells
            .iter()
            .all(|c| !c.is_empty() && c.chars().all(|ch| ch == '-' || ch == ':'));
        if is_separator {
            continue;
        }
        if !header_seen {
            header_seen = true;
            continue;
        }
        rows.push(cells.to_vec());
    }
    rows
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::sections::split_sections;

    #[test]
    fn bullet_items_with_continuations() {
        let items = bullet_items("- first item\n  carries on\n- second\n\nnot an item");
        assert_eq!(items, vec!["first item carries on", "second"]);
    }

    #[test]
    fn numbered_items_chunked() {
        let items = numbered_items("1. alpha\n2. beta\ncontinued\n3. gamma");
        assert_eq!(items, vec!["alpha", "beta continued", "gamma"]);
    }

    #[test]
    fn table_rows_skip_header_and_separator() {
        let rows = table_rows("| Name | Desc |\n|------|------|\n| Loop | Explains loop |");
        assert_eq!(rows, vec![vec!["Loop".to_string(), "Explains loop".to_string()]]);
    }

    #[test]
    fn strategy_order_first_match_wins() {
        fn specific(_: &str) -> Vec<u8> {
            vec![1]
        }
        fn fallback(_: &str) -> Vec<u8> {
            vec![2]
        }
        assert_eq!(first_nonempty("x", &[specific, fallback]), vec![1]);
    }

    #[test]
    fn strategy_exhaustion_is_empty() {
        fn nothing(_: &str) -> Vec<u8> {
            Vec::new()
        }
        assert!(first_nonempty("x", &[nothing, nothing]).is_empty());
    }

    #[test]
    fn assemble_empty_sections() {
        let sections = split_sections("no headers here at all");
        let doc = assemble("no headers here at all", &sections);
        assert_eq!(doc.full_content, "no headers here at all");
        assert_eq!(doc.language, "en");
        assert_eq!(doc.version, "v1.0");
        assert!(doc.learning_pack.is_none());
        assert!(doc.insight_enrichment.is_none());
    }

    #[test]
    fn assemble_full_fixture() {
        let text = std::fs::read_to_string("tests/fixtures/full_pack.md").unwrap();
        let sections = split_sections(&text);
        let doc = assemble(&text, &sections);
        assert_eq!(doc.title, "How Ranking Systems Really Work");
        assert_eq!(doc.speakers, vec!["Maya Chen", "Daniel Ortiz"]);
        assert!(!doc.key_moments.is_empty());
        assert!(!doc.frameworks.is_empty());
        assert!(doc.learning_pack.is_some());
        let pack = doc.learning_pack.unwrap();
        assert!(!pack.flashcards.is_empty());
        assert!(!pack.glossary.is_empty());
        assert_eq!(pack.tldr100, doc.tldr);
    }
}
