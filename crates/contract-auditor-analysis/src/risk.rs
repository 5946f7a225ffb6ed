//! Keyword-driven risk detection and aggregate scoring.
//!
//! For each category of [`RISK_CATEGORIES`](crate::taxonomy::RISK_CATEGORIES),
//! the first keyword present in the text (case-insensitive substring) is used
//! to pull up to three evidence sentences; later keywords of that category are
//! not consulted.

use std::sync::LazyLock;

use contract_auditor_core::{RiskCategory, RiskFinding, RiskLevel, RiskSummary};
use regex::Regex;
use tracing::debug;

use crate::taxonomy::RISK_CATEGORIES;
use crate::text::truncate_chars;

/// Characters of leading context captured before the keyword's sentence.
const CONTEXT_WINDOW: usize = 150;
const MAX_EVIDENCE_SENTENCES: usize = 3;
const SENTENCE_CHARS: usize = 300;
const EVIDENCE_CHARS: usize = 200;

/// Evidence patterns per category, parallel to `RISK_CATEGORIES` keywords.
static EVIDENCE_PATTERNS: LazyLock<Vec<Vec<Regex>>> = LazyLock::new(|| {
    RISK_CATEGORIES
        .iter()
        .map(|category| {
            category
                .keywords
                .iter()
                .map(|kw| evidence_pattern(kw))
                .collect()
        })
        .collect()
});

fn evidence_pattern(keyword: &str) -> Regex {
    let pattern = format!(
        r"(?is).{{0,{CONTEXT_WINDOW}}}[^.!?]*?{}[^.!?]*?[.!?]",
        regex::escape(keyword)
    );
    Regex::new(&pattern).unwrap()
}

/// Scan `text` against the risk taxonomy.
///
/// Findings are in taxonomy order; exact duplicates (every field equal) are
/// collapsed.
pub fn detect_risks(text: &str) -> Vec<RiskFinding> {
    let lower = text.to_lowercase();
    let mut findings: Vec<RiskFinding> = Vec::new();

    for (category, patterns) in RISK_CATEGORIES.iter().zip(EVIDENCE_PATTERNS.iter()) {
        let Some(idx) = category.keywords.iter().position(|kw| lower.contains(kw)) else {
            continue;
        };

        for sentence in evidence_sentences(&patterns[idx], text) {
            let finding = RiskFinding {
                risk_type: category.name.to_string(),
                risk_level: category.level,
                description: category.description.to_string(),
                evidence: truncate_chars(sentence, EVIDENCE_CHARS).to_string(),
                severity_score: category.level.severity_score(),
            };
            if !findings.contains(&finding) {
                findings.push(finding);
            }
        }
    }

    debug!(count = findings.len(), "detected risks");
    findings
}

/// Up to three trimmed sentences matching a keyword's evidence pattern.
fn evidence_sentences<'t>(pattern: &Regex, text: &'t str) -> Vec<&'t str> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
        .map(|s| truncate_chars(s, SENTENCE_CHARS))
        .take(MAX_EVIDENCE_SENTENCES)
        .collect()
}

/// Aggregate score from level counts.
///
/// `floor((30 * high + 15 * medium + 5 * low) / total)`, capped at 100. The
/// per-finding `severity_score` is descriptive only and not used here.
pub fn risk_summary(findings: &[RiskFinding]) -> RiskSummary {
    if findings.is_empty() {
        return RiskSummary::default();
    }

    let count = |level: RiskLevel| findings.iter().filter(|f| f.risk_level == level).count();
    let weighted = 30 * count(RiskLevel::High) + 15 * count(RiskLevel::Medium) + 5 * count(RiskLevel::Low);
    let score = (weighted / findings.len()).min(100) as u8;

    RiskSummary {
        score,
        category: RiskCategory::from_score(score),
    }
}
