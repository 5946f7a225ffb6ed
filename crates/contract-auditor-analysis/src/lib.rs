//! Rule-based contract analysis: pure pattern scans over plain text.
//!
//! Each analyzer is a total function of its input. No match is never an
//! error, only an empty result.

pub mod classifier;
pub mod entities;
pub mod explainer;
pub mod pipeline;
pub mod risk;
pub mod segmenter;
pub mod taxonomy;
mod text;

pub use classifier::classify;
pub use entities::extract_entities;
pub use explainer::{ClauseGuidance, explain, known_clause_types, suggest_alternatives, summarize};
pub use pipeline::analyze;
pub use risk::{detect_risks, risk_summary};
pub use segmenter::{extract_clauses, extract_definitions};
