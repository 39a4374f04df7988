use std::sync::LazyLock;

use regex::Regex;

use crate::model::{TermDefinition, GENERIC_GLOSSARY_DEFINITION};
use crate::parser::extract::first_nonempty;

static TERM_DEF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*-\s*([^:\n]+?):\s*(.+)$").unwrap());
static EG_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^e\.g\.?,?\s*").unwrap());
static LABEL_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*[^:]*:\s*").unwrap());
static COUNT_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(\d+\):\s*").unwrap());
static BULLET_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[–-]\s*").unwrap());

// Terms longer than this are almost certainly prose fragments, not terms.
const MAX_TERM_LEN: usize = 60;

/// Glossary terms. "- Term: Definition" bullets first; otherwise a bare
/// comma/semicolon-separated enumeration ("GMB, EEAT, Call-Tracking, etc.")
/// with a synthesized generic definition.
pub fn parse(text: &str) -> Vec<TermDefinition> {
    first_nonempty(text, &[from_bullets, from_enumeration])
}

fn from_bullets(text: &str) -> Vec<TermDefinition> {
    TERM_DEF_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let term = caps[1].trim().to_string();
            let definition = caps[2].trim().to_string();
            if term.is_empty()
                || definition.is_empty()
                || term.to_lowercase().starts_with("glossary")
            {
                None
            } else {
                Some(TermDefinition { term, definition })
            }
        })
        .collect()
}

fn from_enumeration(text: &str) -> Vec<TermDefinition> {
    let cleaned = text.trim();
    let cleaned = EG_PREFIX_RE.replace(cleaned, "");
    let cleaned = LABEL_PREFIX_RE.replace(&cleaned, "");
    let cleaned = COUNT_PREFIX_RE.replace(&cleaned, "");

    cleaned
        .split([',', ';'])
        .filter_map(|raw| {
            let term = BULLET_PREFIX_RE.replace(raw.trim(), "");
            let term = term
                .trim_start_matches("**")
                .trim_end_matches("**")
                .trim()
                .to_string();
            if term.len() <= 1 || term.len() > MAX_TERM_LEN {
                return None;
            }
            if matches!(term.to_lowercase().as_str(), "etc" | "etc." | "e.g." | "eg" | "and more") {
                return None;
            }
            Some(TermDefinition {
                term,
                definition: GENERIC_GLOSSARY_DEFINITION.to_string(),
            })
        })
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_definition_bullets() {
        let glossary = parse("- GMB: Google My Business listing\n- EEAT: Expertise signals");
        assert_eq!(glossary.len(), 2);
        assert_eq!(glossary[0].term, "GMB");
        assert_eq!(glossary[1].definition, "Expertise signals");
    }

    #[test]
    fn enumerated_terms_get_generic_definition() {
        let glossary = parse("GMB, EEAT, Call-Tracking, Rich-People Niche, etc.");
        let terms: Vec<&str> = glossary.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(terms, vec!["GMB", "EEAT", "Call-Tracking", "Rich-People Niche"]);
        assert!(glossary.iter().all(|t| t.definition == GENERIC_GLOSSARY_DEFINITION));
    }

    #[test]
    fn eg_prefix_stripped() {
        let glossary = parse("e.g., NAP, Citations");
        let terms: Vec<&str> = glossary.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(terms, vec!["NAP", "Citations"]);
    }

    #[test]
    fn bold_markers_stripped() {
        let glossary = parse("**Terms**: **NAP**, Citations");
        let terms: Vec<&str> = glossary.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(terms, vec!["NAP", "Citations"]);
    }

    #[test]
    fn bullets_win_over_enumeration() {
        let glossary = parse("- NAP: Name, Address, Phone");
        assert_eq!(glossary.len(), 1);
        assert_eq!(glossary[0].term, "NAP");
        assert_eq!(glossary[0].definition, "Name, Address, Phone");
    }

    #[test]
    fn overlong_fragments_dropped() {
        let text = "a run-on prose sentence that keeps going well past any plausible glossary term length and never stops";
        assert!(parse(text).is_empty());
    }

    #[test]
    fn empty_section() {
        assert!(parse("").is_empty());
    }
}
