//! Structured records produced by one analysis run.
//!
//! Every analyzer in `contract-auditor-analysis` returns one of these types;
//! [`AnalysisResult`] bundles them for the presentation and export layers.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// A top-level numbered clause, e.g. `3. TERMINATION`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    /// Bare clause number without the trailing dot ("3").
    pub number: String,
    pub heading: String,
    /// First 500 characters of `full_content`.
    pub content: String,
    pub full_content: String,
    pub subclauses: Vec<SubClause>,
    /// Byte offset of the clause header in the analyzed text.
    pub start: usize,
    /// Byte offset where the next clause header begins (or text length).
    pub end: usize,
}

/// A decimally-numbered provision nested inside a [`Clause`], e.g. `3.2`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubClause {
    pub number: String,
    /// First 200 characters of the sub-clause body.
    pub content: String,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmountKind {
    Currency,
    Percentage,
}

impl AmountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Currency => "Currency",
            Self::Percentage => "Percentage",
        }
    }
}

/// A monetary amount or percentage as it appears in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub text: String,
    pub kind: AmountKind,
}

/// Structured facts pulled out of one document.
///
/// All categories are deduplicated sets except `amounts`, which keeps every
/// occurrence in scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityBundle {
    pub parties: BTreeSet<String>,
    pub dates: BTreeSet<String>,
    pub amounts: Vec<Amount>,
    pub jurisdictions: BTreeSet<String>,
    pub emails: BTreeSet<String>,
    pub phone_numbers: BTreeSet<String>,
    pub urls: BTreeSet<String>,
}

impl EntityBundle {
    /// Total number of extracted values across all categories.
    pub fn total(&self) -> usize {
        self.parties.len()
            + self.dates.len()
            + self.amounts.len()
            + self.jurisdictions.len()
            + self.emails.len()
            + self.phone_numbers.len()
            + self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Descriptive 0-100 severity attached to each finding.
    ///
    /// Not an input to [`RiskSummary`]; the aggregate is computed from level counts.
    pub fn severity_score(&self) -> u8 {
        match self {
            Self::Low => 25,
            Self::Medium => 55,
            Self::High => 85,
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One evidence-backed match of a risk category against contract text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFinding {
    #[serde(rename = "type")]
    pub risk_type: String,
    pub risk_level: RiskLevel,
    pub description: String,
    /// At most 200 characters of the matching sentence.
    pub evidence: String,
    pub severity_score: u8,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskCategory {
    #[default]
    #[serde(rename = "Low Risk")]
    Low,
    #[serde(rename = "Medium Risk")]
    Medium,
    #[serde(rename = "High Risk")]
    High,
}

impl RiskCategory {
    /// Band an aggregate score: >= 70 high, >= 40 medium, otherwise low.
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            Self::High
        } else if score >= 40 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate 0-100 risk score for a set of findings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub score: u8,
    pub category: RiskCategory,
}

/// Number of distinct keywords a contract-type bucket matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMatch {
    pub contract_type: String,
    pub matches: usize,
}

/// Rule-based contract type for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub primary_type: String,
    /// 0-100, derived from the winning bucket's match count.
    pub confidence: f64,
    /// Qualifying buckets in declaration order.
    pub all_matches: Vec<TypeMatch>,
    pub description: String,
}

/// Everything one analysis run produced for a single document.
///
/// Immutable once built; a new upload produces a fresh result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub filename: String,
    /// ISO 8601 timestamp string (UTC).
    pub analyzed_at: String,
    pub text_length: usize,
    pub clauses: Vec<Clause>,
    pub definitions: BTreeMap<String, String>,
    pub entities: EntityBundle,
    pub risks: Vec<RiskFinding>,
    pub risk_summary: RiskSummary,
    pub classification: Classification,
}

impl AnalysisResult {
    /// Findings at the given level, in detection order.
    pub fn risks_at(&self, level: RiskLevel) -> impl Iterator<Item = &RiskFinding> {
        self.risks.iter().filter(move |r| r.risk_level == level)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Current UTC time as an ISO 8601 string with a `Z` suffix.
pub fn utc_timestamp() -> String {
    chrono::Utc::now()
        .format("%Y-%m-%dT%H:%M:%S%.6fZ")
        .to_string()
}
