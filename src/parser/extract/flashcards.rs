use std::sync::LazyLock;

use regex::Regex;

use crate::model::{QaPair, GENERIC_FLASHCARD_ANSWER};
use crate::parser::extract::{bullet_items, first_nonempty, numbered_items};

static NUMBERED_QA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*\d+\.\s*Q:\s*(.+?)\s*A:\s*(.+)$").unwrap());
static BULLET_QA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*-\s*Q:\s*(.+?)\s*[/|]\s*A:\s*(.+)$").unwrap());

const MIN_STATEMENT_LEN: usize = 10;

/// Feynman flashcards. Explicit Q/A pairs first; bare statements get a
/// synthesized generic answer so consumers always receive a usable pair.
pub fn parse(text: &str) -> Vec<QaPair> {
    first_nonempty(
        text,
        &[
            from_numbered_qa,
            from_bullet_qa,
            from_numbered_statements,
            from_bullet_statements,
        ],
    )
}

fn from_numbered_qa(text: &str) -> Vec<QaPair> {
    capture_pairs(&NUMBERED_QA_RE, text)
}

fn from_bullet_qa(text: &str) -> Vec<QaPair> {
    capture_pairs(&BULLET_QA_RE, text)
}

fn capture_pairs(re: &Regex, text: &str) -> Vec<QaPair> {
    re.captures_iter(text)
        .map(|caps| QaPair {
            question: caps[1].trim().to_string(),
            answer: caps[2].trim().to_string(),
        })
        .collect()
}

fn from_numbered_statements(text: &str) -> Vec<QaPair> {
    statements_to_pairs(numbered_items(text))
}

fn from_bullet_statements(text: &str) -> Vec<QaPair> {
    statements_to_pairs(
        bullet_items(text)
            .into_iter()
            .filter(|item| !item.to_lowercase().starts_with("feynman"))
            .collect(),
    )
}

fn statements_to_pairs(items: Vec<String>) -> Vec<QaPair> {
    items
        .into_iter()
        .filter(|item| item.len() > MIN_STATEMENT_LEN)
        .map(|item| QaPair {
            question: item,
            answer: GENERIC_FLASHCARD_ANSWER.to_string(),
        })
        .collect()
}

// ── Tests ──
