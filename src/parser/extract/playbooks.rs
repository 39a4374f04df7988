use std::sync::LazyLock;

use regex::Regex;

use crate::model::Playbook;
use crate::parser::extract::{first_nonempty, table_rows};

static IF_THEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[•\-*]?\s*IF\s+(.+?),?\s+THEN\s+(.+?)\.?$").unwrap()
});
static ARROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[•\-*]?\s*(.+?)\s*[→➔]\s*(.+)$").unwrap());
static TRIGGER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:When|If)\s+").unwrap());
static ACTION_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:Do|Then)\s+").unwrap());

/// Playbooks & heuristics: pipe-table first; otherwise a line-oriented pass
/// recognizing explicit IF/THEN statements and the "<trigger> → <action>"
/// arrow form.
pub fn parse(text: &str) -> Vec<Playbook> {
    first_nonempty(text, &[from_table, from_heuristics])
}

fn from_table(text: &str) -> Vec<Playbook> {
    table_rows(text)
        .into_iter()
        .filter(|row| row.len() >= 2)
        .filter_map(|row| {
            let trigger = row[0].clone();
            let action = row[1..]
                .iter()
                .filter(|c| !c.is_empty())
                .cloned()
                .collect::<Vec<_>>()
                .join(" - ");
            if trigger.is_empty() || action.is_empty() {
                None
            } else {
                Some(Playbook { trigger, action })
            }
        })
        .collect()
}

fn from_heuristics(text: &str) -> Vec<Playbook> {
    let mut playbooks = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if let Some(caps) = IF_THEN_RE.captures(trimmed) {
            playbooks.push(Playbook {
                trigger: caps[1].trim().to_string(),
                action: caps[2].trim().to_string(),
            });
        } else if let Some(caps) = ARROW_RE.captures(trimmed) {
            playbooks.push(Playbook {
                trigger: TRIGGER_PREFIX_RE.replace(caps[1].trim(), "").to_string(),
                action: ACTION_PREFIX_RE.replace(caps[2].trim(), "").to_string(),
            });
        }
    }
    playbooks
}

// ── Tests ──
