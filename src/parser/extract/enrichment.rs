use std::sync::LazyLock;

use regex::Regex;

use crate::model::{InsightEnrichment, Sentiment};

static BULLET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[-*•]\s+(.*)$").unwrap());
static SPLIT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[;,]").unwrap());

/// Insight Enrichment: bullets of the form `- Label: value`, classified by
/// substring match on the label. Unlabeled or unmatched lines are ignored.
pub fn parse(text: &str) -> Option<InsightEnrichment> {
    if text.trim().is_empty() {
        return None;
    }

    let mut enrichment = InsightEnrichment::default();

    for line in text.lines() {
        let Some(caps) = BULLET_RE.captures(line.trim()) else {
            continue;
        };
        let Some((label, value)) = caps[1].split_once(':') else {
            continue;
        };
        let label = label.trim().to_lowercase();
        let value = value.trim();

        if label.contains("stats") || label.contains("tools") || label.contains("links") {
            append_items(&mut enrichment.stats_tools_links, value);
        } else if label.contains("sentiment") {
            enrichment.sentiment = Sentiment::classify(value);
        } else if label.contains("risks")
            || label.contains("blockers")
            || label.contains("questions")
        {
            append_items(&mut enrichment.risks_blockers_questions, value);
        }
    }

    Some(enrichment)
}

fn append_items(target: &mut Vec<String>, value: &str) {
    target.extend(
        SPLIT_RE
            .split(value)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    );
}

// ── Tests ──
