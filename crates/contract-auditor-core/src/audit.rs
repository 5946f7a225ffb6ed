//! Audit-log record: a compact summary of one analysis run.

use serde::{Deserialize, Serialize};

use crate::model::{AnalysisResult, Classification, RiskCategory};

/// One audit-log line item.
///
/// Carries counts rather than full detail; the full [`AnalysisResult`] is not persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub filename: String,
    /// ISO 8601 timestamp string (UTC).
    pub timestamp: String,
    pub contract_type: Classification,
    pub risk_score: u8,
    pub risk_category: RiskCategory,
    pub entities_count: usize,
    pub clauses_count: usize,
    pub risks_count: usize,
}

impl AuditEntry {
    /// Summarise a result, stamping the entry with the current UTC time.
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            filename: result.filename.clone(),
            timestamp: crate::model::utc_timestamp(),
            contract_type: result.classification.clone(),
            risk_score: result.risk_summary.score,
            risk_category: result.risk_summary.category,
            entities_count: result.entities.total(),
            clauses_count: result.clauses.len(),
            risks_count: result.risks.len(),
        }
    }
}
