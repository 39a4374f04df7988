use std::sync::LazyLock;

use regex::Regex;

use crate::model::NovelIdea;

// "• Idea Name – 5" or "- Idea: 4/5"
static IDEA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[•\-*]\s*(.+?)\s*[–\-:]\s*(\d+)(?:/5)?\s*$").unwrap());

/// Novel-idea meter entries. Scores are kept as written (1–5 by convention,
/// not enforced).
pub fn parse(text: &str) -> Vec<NovelIdea> {
    text.lines()
        .filter_map(|line| IDEA_RE.captures(line.trim()))
        .filter_map(|caps| {
            let insight = caps[1].trim().to_string();
            let score = caps[2].parse().ok()?;
            if insight.is_empty() {
                None
            } else {
                Some(NovelIdea { insight, score })
            }
        })
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_score_format() {
        let ideas = parse("• Authentic stage signaling – 5\n• Review velocity beats volume – 4");
        assert_eq!(ideas.len(), 2);
        assert_eq!(ideas[0].insight, "Authentic stage signaling");
        assert_eq!(ideas[0].score, 5);
    }

    #[test]
    fn colon_slash_five_format() {
        let ideas = parse("- Rich-people niches: 4/5");
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].insight, "Rich-people niches");
        assert_eq!(ideas[0].score, 4);
    }

    #[test]
    fn hyphenated_insight_keeps_score_separator() {
        let ideas = parse("- Pay-per-call arbitrage - 3");
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].insight, "Pay-per-call arbitrage");
        assert_eq!(ideas[0].score, 3);
    }

    #[test]
    fn lines_without_scores_ignored() {
        assert!(parse("- an idea with no score at all").is_empty());
        assert!(parse("").is_empty());
    }
}
