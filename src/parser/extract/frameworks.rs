use std::sync::LazyLock;

use regex::Regex;

use crate::model::Framework;
use crate::parser::extract::{first_nonempty, table_rows};

static NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*(.+?):\s*(.+)$").unwrap());

/// Strategic frameworks: pipe-table, then "1. Name: description" lines,
/// then bold names with trailing description lines.
pub fn parse(text: &str) -> Vec<Framework> {
    first_nonempty(text, &[from_table, from_numbered, from_bold_headers])
}

fn from_table(text: &str) -> Vec<Framework> {
    table_rows(text)
        .into_iter()
        .filter(|row| row.len() >= 2)
        .filter_map(|row| {
            let name = row[0].clone();
            let description = row[1..]
                .iter()
                .filter(|c| !c.is_empty())
                .cloned()
                .collect::<Vec<_>>()
                .join(" - ");
            if name.is_empty() || description.is_empty() {
                None
            } else {
                Some(Framework { name, description })
            }
        })
        .collect()
}

fn from_numbered(text: &str) -> Vec<Framework> {
    text.lines()
        .filter_map(|line| NUMBERED_RE.captures(line.trim()))
        .map(|caps| Framework {
            name: caps[1].trim().to_string(),
            description: caps[2].trim().to_string(),
        })
        .collect()
}

/// "**Movement Loop**" on its own line, description on the lines below.
fn from_bold_headers(text: &str) -> Vec<Framework> {
    let mut frameworks = Vec::new();
    let mut name: Option<String> = None;
    let mut description: Vec<String> = Vec::new();

    let mut flush = |name: &mut Option<String>, description: &mut Vec<String>| {
        if let Some(n) = name.take() {
            if !description.is_empty() {
                frameworks.push(Framework {
                    name: n,
                    description: description.join(" ").trim().to_string(),
                });
            }
        }
        description.clear();
    };

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.len() > 4 && trimmed.starts_with("**") && trimmed.ends_with("**") {
            flush(&mut name, &mut description);
            name = Some(trimmed.trim_matches('*').trim().to_string());
        } else if name.is_some() && !trimmed.is_empty() {
            description.push(trimmed.to_string());
        }
    }
    flush(&mut name, &mut description);

    frameworks
}

// ── Tests ──
