use std::sync::LazyLock;

use regex::Regex;

use crate::model::KeyMoment;

// Entries like "– **03:21** → insight", tolerating the stray escapes the
// generator has emitted around timestamps ("**\*00:05**", "**03:20***").
static MOMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[–-]\s*\*\*\\?\*?(\d{1,2}:\d{2}(?::\d{2})?)\*+\s*(?:→|->)\s*(.+)$").unwrap()
});
static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Parse timestamped key moments. Timestamps are kept verbatim ("03:21",
/// "1:02:45"), never normalized, because consumers display them as-is.
pub fn parse(text: &str) -> Vec<KeyMoment> {
    let mut moments = Vec::new();

    for entry in bullet_entries(text) {
        if let Some(caps) = MOMENT_RE.captures(&entry) {
            let insight = WS_RE.replace_all(caps[2].trim(), " ").to_string();
            if !insight.is_empty() {
                moments.push(KeyMoment {
                    timestamp: caps[1].to_string(),
                    insight,
                });
            }
        }
    }
    moments
}

/// Group lines into bullet entries: an entry starts at a "–"/"-" line and
/// runs through continuation lines until the next bullet or a blank line.
fn bullet_entries(text: &str) -> Vec<String> {
    let mut entries: Vec<String> = Vec::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('–') || trimmed.starts_with('-') {
            if let Some(done) = current.take() {
                entries.push(done);
            }
            current = Some(trimmed.to_string());
        } else if trimmed.is_empty() {
            if let Some(done) = current.take() {
                entries.push(done);
            }
        } else if let Some(entry) = current.as_mut() {
            entry.push(' ');
            entry.push_str(trimmed);
        }
    }
    if let Some(done) = current {
        entries.push(done);
    }
    entries
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_moment() {
        let moments = parse("– **03:21** → Something happens");
        assert_eq!(moments.len(), 1);
        assert_eq!(moments[0].timestamp, "03:21");
        assert_eq!(moments[0].insight, "Something happens");
    }

    #[test]
    fn hyphen_bullet_and_ascii_arrow() {
        let moments = parse("- **12:05** -> Plain hyphen variant");
        assert_eq!(moments.len(), 1);
        assert_eq!(moments[0].timestamp, "12:05");
    }

    #[test]
    fn hours_timestamp_kept_verbatim() {
        let moments = parse("– **1:02:45** → Long-form discussion");
        assert_eq!(moments[0].timestamp, "1:02:45");
    }

    #[test]
    fn stray_escapes_tolerated() {
        let moments = parse("– **\\*00:05** → Early sponsors\n– **03:20*** → Chapman's mantra");
        assert_eq!(moments.len(), 2);
        assert_eq!(moments[0].timestamp, "00:05");
        assert_eq!(moments[1].timestamp, "03:20");
    }

    #[test]
    fn continuation_lines_folded() {
        let moments = parse("– **04:10** → First half of the insight\n  wraps onto a second line");
        assert_eq!(moments.len(), 1);
        assert_eq!(
            moments[0].insight,
            "First half of the insight wraps onto a second line"
        );
    }

    #[test]
    fn blank_line_ends_entry() {
        let moments = parse("– **04:10** → Insight one\n\nunrelated trailing prose");
        assert_eq!(moments.len(), 1);
        assert_eq!(moments[0].insight, "Insight one");
    }

    #[test]
    fn no_timestamp_no_match() {
        assert!(parse("– just a plain bullet without a time").is_empty());
        assert!(parse("").is_empty());
    }
}
