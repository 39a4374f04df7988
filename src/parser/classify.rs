/// Marker strings the upstream generator has emitted across its format
/// revisions. Case-sensitive; the classifier only counts them.
const MARKERS: &[&str] = &[
    "## Video Context",
    "**Title**",
    "**Speakers**:",
    "**Synopsis**:",
    "## TL;DR",
    "## TL;DR (≤100 words)",
    "## Key Moments",
    "## Strategic Frameworks",
    "## Debunked Assumptions",
    "## In Practice",
    "## Playbooks & Heuristics",
    "## Insight Enrichment",
    "## Accelerated Learning Pack",
    "### Feynman Flashcards",
    "### Glossary",
    "### Quick Quiz",
    "### Novel-Idea Meter",
    "## How to Think Like",
];

const MIN_MARKERS: usize = 4;
const MIN_LEN: usize = 100;

/// Cheap heuristic gate: does this text look like a structured knowledge
/// pack? False positives/negatives are fine, the fallback path absorbs them.
pub fn is_structured_format(text: &str) -> bool {
    // Character count, not bytes: the format is full of multibyte arrows
    // and dashes.
    if text.chars().count() < MIN_LEN {
        return false;
    }
    let count = MARKERS.iter().filter(|m| text.contains(*m)).count();
    count >= MIN_MARKERS
}

// ── Tests ──
