use std::sync::LazyLock;

use regex::Regex;

use crate::model::{QaPair, GENERIC_QUIZ_ANSWER};
use crate::parser::extract::{bullet_items, first_nonempty, numbered_items};

static QA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*(?:\d+\.\s*|-\s*)Q:\s*(.+?)\s*[/|]\s*A:\s*(.+)$").unwrap()
});
static Q_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^Q:\s*").unwrap());

const MIN_QUESTION_LEN: usize = 10;

/// Quick quiz questions. Bare questions get a synthesized generic answer.
pub fn parse(text: &str) -> Vec<QaPair> {
    first_nonempty(text, &[from_explicit_qa, from_bullet_questions, from_numbered_questions])
}

fn from_explicit_qa(text: &str) -> Vec<QaPair> {
    QA_RE
        .captures_iter(text)
        .map(|caps| QaPair {
            question: caps[1].trim().to_string(),
            answer: caps[2].trim().to_string(),
        })
        .collect()
}

fn from_bullet_questions(text: &str) -> Vec<QaPair> {
    questions_to_pairs(
        bullet_items(text)
            .into_iter()
            .map(|item| Q_PREFIX_RE.replace(&item, "").to_string())
            .filter(|q| !q.to_lowercase().starts_with("quick quiz"))
            .collect(),
    )
}

fn from_numbered_questions(text: &str) -> Vec<QaPair> {
    questions_to_pairs(numbered_items(text))
}

fn questions_to_pairs(questions: Vec<String>) -> Vec<QaPair> {
    questions
        .into_iter()
        .filter(|q| q.len() > MIN_QUESTION_LEN)
        .map(|q| QaPair {
            question: q,
            answer: GENERIC_QUIZ_ANSWER.to_string(),
        })
        .collect()
}

// ── Tests ──
