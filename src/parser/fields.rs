use regex::Regex;

/// Extract a labeled value of the form `**Field**: value` (case-insensitive
/// on the field name, value runs to end of line). Empty string if absent.
pub fn extract_field(text: &str, field_name: &str) -> String {
    let pattern = format!(r"(?i)\*\*{}\*\*\s*:\s*([^\n]+)", regex::escape(field_name));
    // Field names are compile-time literals in this crate, the pattern
    // always builds.
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(_) => return String::new(),
    };
    re.captures(text)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default()
}

/// Extract the speaker list from a Video Context block. Handles both
/// `{Alice}, {Bob}` and `Alice, Bob`; unreplaced template tokens of the
/// form "Speaker A" are dropped.
pub fn extract_speakers(text: &str) -> Vec<String> {
    let raw = extract_field(text, "Speakers");
    if raw.is_empty() {
        return Vec::new();
    }
    raw.replace(['{', '}'], "")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && !s.starts_with("Speaker "))
        .map(str::to_string)
        .collect()
}

// ── Tests ──
