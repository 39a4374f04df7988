//! Parser for AI-generated video knowledge-pack summaries.
//!
//! The upstream generator emits a semi-structured markdown document whose
//! schema has drifted across revisions. This crate turns that text into one
//! stable [`ParsedDocument`]: classify → split into canonical sections →
//! per-section pattern extraction with ordered fallbacks → assemble.
//!
//! The pipeline is total: [`parse`] never panics or errors. When the input
//! is not classification-positive, or parsing fails, callers keep the raw
//! text via [`ParsedDocument::fallback`] and hand it to a secondary
//! unstructured summarizer.
//!
//! ```
//! use packparse::{is_structured_format, parse, ParsedDocument};
//!
//! let text = "just a plain transcript";
//! let doc = if is_structured_format(text) {
//!     parse(text).unwrap_or_else(|| ParsedDocument::fallback(text))
//! } else {
//!     ParsedDocument::fallback(text)
//! };
//! assert_eq!(doc.full_content, text);
//! ```

pub mod model;
pub mod parser;

pub use model::{
    Framework, InsightEnrichment, KeyMoment, LearningPack, NovelIdea, ParsedDocument, Playbook,
    QaPair, Sentiment, TermDefinition,
};
pub use parser::{derive_key_points, is_structured_format, parse};
