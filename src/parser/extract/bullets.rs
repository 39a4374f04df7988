use std::sync::LazyLock;

use regex::Regex;

static PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-*•]\s+|\d+\.\s+)").unwrap());

/// Plain bullet/numbered list items, one per line, prefix stripped. Used for
/// Debunked Assumptions and In Practice; "assumption → reality" items are
/// kept as complete statements.
pub fn parse(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if PREFIX_RE.is_match(trimmed) {
                let item = PREFIX_RE.replace(trimmed, "").trim().to_string();
                if item.is_empty() {
                    None
                } else {
                    Some(item)
                }
            } else {
                None
            }
        })
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_bullet_styles() {
        let items = parse("- first\n* second\n• third\n1. fourth");
        assert_eq!(items, vec!["first", "second", "third", "fourth"]);
    }

    #[test]
    fn arrow_statements_kept_whole() {
        let items = parse("- \"More reviews always win\" → volume matters less than velocity");
        assert_eq!(items.len(), 1);
        assert!(items[0].contains('→'));
    }

    #[test]
    fn non_list_lines_ignored() {
        let items = parse("intro sentence\n- real item\ntrailing prose");
        assert_eq!(items, vec!["real item"]);
    }

    #[test]
    fn empty_input() {
        assert!(parse("").is_empty());
    }
}
