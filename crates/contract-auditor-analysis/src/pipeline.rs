//! Full analysis of one document: every analyzer over the same text.

use contract_auditor_core::AnalysisResult;
use contract_auditor_core::model::utc_timestamp;
use tracing::info;

use crate::{classifier, entities, risk, segmenter};

/// Analyze `text` extracted from `filename`.
///
/// The analyzers are independent; none reads another's output. Extraction
/// placeholders such as `[Unsupported file type]` are analyzed as ordinary text.
pub fn analyze(filename: &str, text: &str) -> AnalysisResult {
    let clauses = segmenter::extract_clauses(text);
    let definitions = segmenter::extract_definitions(text);
    let entities = entities::extract_entities(text);
    let risks = risk::detect_risks(text);
    let risk_summary = risk::risk_summary(&risks);
    let classification = classifier::classify(text);

    info!(
        filename,
        chars = text.chars().count(),
        clauses = clauses.len(),
        definitions = definitions.len(),
        entities = entities.total(),
        risks = risks.len(),
        risk_score = risk_summary.score,
        contract_type = %classification.primary_type,
        "analysis complete"
    );

    AnalysisResult {
        filename: filename.to_string(),
        analyzed_at: utc_timestamp(),
        text_length: text.chars().count(),
        clauses,
        definitions,
        entities,
        risks,
        risk_summary,
        classification,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contract_auditor_core::RiskCategory;

    #[test]
    fn empty_text_defaults() {
        let result = analyze("empty.txt", "");
        assert_eq!(result.filename, "empty.txt");
        assert_eq!(result.text_length, 0);
        assert!(result.clauses.is_empty());
        assert!(result.definitions.is_empty());
        assert!(result.entities.is_empty());
        assert!(result.risks.is_empty());
        assert_eq!(result.risk_summary.score, 0);
        assert_eq!(result.risk_summary.category, RiskCategory::Low);
        assert_eq!(result.classification.primary_type, "General Contract");
    }

    #[test]
    fn stamped_with_utc_time() {
        let result = analyze("deal.txt", "Either party may terminate.");
        let stamp = &result.analyzed_at;
        // YYYY-MM-DDTHH:MM:SS.ffffffZ
        assert_eq!(stamp.len(), 27, "got {stamp}");
        assert_eq!(&stamp[10..11], "T");
        assert!(stamp.ends_with('Z'));
    }

    #[test]
    fn placeholder_text_is_ordinary_input() {
        let result = analyze("scan.pdf", "[No text extracted from PDF]");
        assert!(result.clauses.is_empty());
        assert_eq!(result.classification.primary_type, "General Contract");
    }
}
