use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Synthesized answer for flashcards that arrive as bare statements.
pub const GENERIC_FLASHCARD_ANSWER: &str = "See video content for detailed explanation";
/// Synthesized answer for quiz questions without an explicit answer.
pub const GENERIC_QUIZ_ANSWER: &str = "Review video content for the answer";
/// Synthesized definition for glossary terms listed without one.
pub const GENERIC_GLOSSARY_DEFINITION: &str = "Key term mentioned in the video content";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyMoment {
    /// Verbatim "HH:MM" or "HH:MM:SS" token, never normalized.
    pub timestamp: String,
    pub insight: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Framework {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playbook {
    pub trigger: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NovelIdea {
    pub insight: String,
    /// Conventionally 1–5, not enforced.
    pub score: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermDefinition {
    pub term: String,
    pub definition: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    /// Classify a free-text sentiment description the upstream generator
    /// emits ("generally admiring", "critical of the approach", ...).
    pub fn classify(value: &str) -> Self {
        let lower = value.to_lowercase();
        if lower.contains("positive") || lower.contains("admiring") {
            Sentiment::Positive
        } else if lower.contains("negative") || lower.contains("critical") {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InsightEnrichment {
    pub stats_tools_links: Vec<String>,
    pub sentiment: Sentiment,
    pub risks_blockers_questions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LearningPack {
    pub tldr100: String,
    pub flashcards: Vec<QaPair>,
    pub glossary: Vec<TermDefinition>,
    pub quick_quiz: Vec<QaPair>,
    pub novel_idea_meter: Vec<NovelIdea>,
}

impl LearningPack {
    pub fn is_empty(&self) -> bool {
        self.tldr100.is_empty()
            && self.flashcards.is_empty()
            && self.glossary.is_empty()
            && self.quick_quiz.is_empty()
            && self.novel_idea_meter.is_empty()
    }
}

/// One structured summary, built once per classification-positive input and
/// never mutated. `full_content` always carries the untouched input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParsedDocument {
    pub title: String,
    pub speakers: Vec<String>,
    pub duration: String,
    pub channel: String,
    pub synopsis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_on: Option<String>,
    pub version: String,
    pub tldr: String,
    pub key_moments: Vec<KeyMoment>,
    pub frameworks: Vec<Framework>,
    pub debunked_assumptions: Vec<String>,
    pub in_practice: Vec<String>,
    pub playbooks: Vec<Playbook>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insight_enrichment: Option<InsightEnrichment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_pack: Option<LearningPack>,
    pub full_content: String,
}

impl Default for ParsedDocument {
    fn default() -> Self {
        ParsedDocument {
            title: String::new(),
            speakers: Vec::new(),
            duration: String::new(),
            channel: String::new(),
            synopsis: String::new(),
            video_url: None,
            language: "en".to_string(),
            generated_on: None,
            version: "v1.0".to_string(),
            tldr: String::new(),
            key_moments: Vec::new(),
            frameworks: Vec::new(),
            debunked_assumptions: Vec::new(),
            in_practice: Vec::new(),
            playbooks: Vec::new(),
            insight_enrichment: None,
            learning_pack: None,
            full_content: String::new(),
        }
    }
}

impl ParsedDocument {
    /// Minimal record for inputs where no structure was detected or parsing
    /// failed. "full_content present, everything else default" is a valid
    /// state, not an error; callers route it to an unstructured summarizer.
    pub fn fallback(raw: &str) -> Self {
        ParsedDocument {
            full_content: raw.to_string(),
            ..ParsedDocument::default()
        }
    }
}

// ── Tolerant deserialization ──
//
// Persisted summaries have arrived with loosely-typed nested entries: a
// glossary list holding bare strings, Q/A maps with short "q"/"a" keys or
// numeric values. Coerce at the boundary instead of failing the whole record.

fn coerce_string(v: &Value) -> String {
    match v {
        Value::String(s) => s.trim().to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn field<'a>(map: &'a serde_json::Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| map.get(*k))
}

impl<'de> Deserialize<'de> for QaPair {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Object(map) => {
                let question = field(&map, &["question", "q"]).map(coerce_string).unwrap_or_default();
                let answer = field(&map, &["answer", "a"])
                    .map(coerce_string)
                    .filter(|a| !a.is_empty())
                    .unwrap_or_else(|| GENERIC_FLASHCARD_ANSWER.to_string());
                Ok(QaPair { question, answer })
            }
            Value::String(s) => Ok(QaPair {
                question: s.trim().to_string(),
                answer: GENERIC_FLASHCARD_ANSWER.to_string(),
            }),
            other => Err(D::Error::custom(format!(
                "expected Q/A object or string, got {other}"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for TermDefinition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Object(map) => {
                let term = field(&map, &["term"]).map(coerce_string).unwrap_or_default();
                let definition = field(&map, &["definition", "def"])
                    .map(coerce_string)
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| GENERIC_GLOSSARY_DEFINITION.to_string());
                Ok(TermDefinition { term, definition })
            }
            Value::String(s) => Ok(TermDefinition {
                term: s.trim().to_string(),
                definition: GENERIC_GLOSSARY_DEFINITION.to_string(),
            }),
            other => Err(D::Error::custom(format!(
                "expected term/definition object or string, got {other}"
            ))),
        }
    }
}

impl<'de> Deserialize<'de> for NovelIdea {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        match value {
            Value::Object(map) => {
                let insight = field(&map, &["insight", "idea"]).map(coerce_string).unwrap_or_default();
                let score = match field(&map, &["score"]) {
                    Some(Value::Number(n)) => n.as_i64().unwrap_or(0),
                    Some(Value::String(s)) => s.trim().trim_end_matches("/5").parse().unwrap_or(0),
                    _ => 0,
                };
                Ok(NovelIdea { insight, score })
            }
            Value::String(s) => Ok(NovelIdea {
                insight: s.trim().to_string(),
                score: 0,
            }),
            other => Err(D::Error::custom(format!(
                "expected novel-idea object or string, got {other}"
            ))),
        }
    }
}

// ── Tests ──
