//! Keyword-count classification of contract type.
//!
//! Each bucket in [`CONTRACT_TYPES`] counts how many of its keywords occur in
//! the lower-cased text (distinct keywords, not occurrences). Buckets reaching
//! their threshold qualify; the best-scoring qualifying bucket wins, with ties
//! going to the bucket declared first.

use contract_auditor_core::{Classification, TypeMatch};
use tracing::debug;

use crate::taxonomy::{
    CONTRACT_TYPES, ContractTypeRule, GENERAL_CONTRACT, GENERAL_CONTRACT_DESCRIPTION,
    contract_type_description,
};

/// Classify `text` into one of the contract-type buckets.
///
/// No qualifying bucket yields `General Contract` with zero confidence and no matches.
pub fn classify(text: &str) -> Classification {
    let lower = text.to_lowercase();

    let all_matches: Vec<TypeMatch> = CONTRACT_TYPES
        .iter()
        .filter_map(|rule| {
            let matches = keyword_matches(rule, &lower);
            (matches >= rule.min_matches).then(|| TypeMatch {
                contract_type: rule.name.to_string(),
                matches,
            })
        })
        .collect();

    let classification = match best_match(&all_matches) {
        Some(best) => Classification {
            primary_type: best.contract_type.clone(),
            confidence: confidence(best.matches),
            description: contract_type_description(&best.contract_type).to_string(),
            all_matches: all_matches.clone(),
        },
        None => Classification {
            primary_type: GENERAL_CONTRACT.to_string(),
            confidence: 0.0,
            all_matches: Vec::new(),
            description: GENERAL_CONTRACT_DESCRIPTION.to_string(),
        },
    };

    debug!(
        primary_type = %classification.primary_type,
        confidence = classification.confidence,
        qualifying = classification.all_matches.len(),
        "classified contract"
    );
    classification
}

/// Confidence for a match count: `min(100, count / 10 * 100)`.
pub fn confidence(matches: usize) -> f64 {
    (matches as f64 / 10.0 * 100.0).min(100.0)
}

fn keyword_matches(rule: &ContractTypeRule, lower: &str) -> usize {
    rule.keywords.iter().filter(|kw| lower.contains(*kw)).count()
}

/// Highest match count; the earliest entry wins ties.
fn best_match(matches: &[TypeMatch]) -> Option<&TypeMatch> {
    matches.iter().fold(None, |best, m| match best {
        Some(b) if b.matches >= m.matches => Some(b),
        _ => Some(m),
    })
}
