//! Lexical entity extraction: parties, dates, amounts, jurisdictions, contacts.
//!
//! Every sub-extractor is an independent scan over the raw text. All
//! categories are deduplicated except amounts, which keep each occurrence.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use contract_auditor_core::{Amount, AmountKind, EntityBundle};
use regex::Regex;
use tracing::debug;

const US_STATES: &[&str] = &[
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

const COUNTRIES: &[&str] = &[
    "United States",
    "United Kingdom",
    "Canada",
    "Australia",
    "India",
];

static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // MM/DD/YYYY
        r"\b\d{1,2}/\d{1,2}/\d{4}\b",
        // Month DD, YYYY
        r"(?i)\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2},?\s+\d{4}\b",
        // YYYY-MM-DD
        r"\b\d{4}-\d{1,2}-\d{1,2}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static CURRENCY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\$[\d,]+(?:\.\d{2})?|\b(?:USD|dollars?|euros?|cents?|pounds?)\s*[\d,]+(?:\.\d{2})?")
        .unwrap()
});
static PERCENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d+(?:\.\d{1,2})?\s*%").unwrap());

static JURISDICTION_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    US_STATES
        .iter()
        .chain(COUNTRIES)
        .map(|name| {
            let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(name))).unwrap();
            (*name, re)
        })
        .collect()
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

static PHONE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // XXX-XXX-XXXX
        r"\b\d{3}-\d{3}-\d{4}\b",
        // (XXX) XXX-XXXX
        r"\(\d{3}\)\s*\d{3}-\d{4}\b",
        // XXXXXXXXXX
        r"\b\d{10}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

static PARTY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:between|party|parties|Inc\.|LLC|Corp|Corporation|Company|by\s+and\s+between)\s+([A-Z][A-Za-z\s&,]+?)(?:,|\.|\s+and\s+)",
    )
    .unwrap()
});

/// Run every sub-extractor over `text`.
pub fn extract_entities(text: &str) -> EntityBundle {
    let bundle = EntityBundle {
        parties: extract_parties(text),
        dates: extract_dates(text),
        amounts: extract_amounts(text),
        jurisdictions: extract_jurisdictions(text),
        emails: collect_matches(&EMAIL_PATTERN, text),
        phone_numbers: extract_phone_numbers(text),
        urls: collect_matches(&URL_PATTERN, text),
    };
    debug!(total = bundle.total(), "extracted entities");
    bundle
}

/// Dates in three surface forms; purely lexical, no calendar validation.
pub fn extract_dates(text: &str) -> BTreeSet<String> {
    DATE_PATTERNS
        .iter()
        .flat_map(|re| re.find_iter(text).map(|m| m.as_str().to_string()))
        .collect()
}

/// Currency amounts followed by percentages, each kept per occurrence.
pub fn extract_amounts(text: &str) -> Vec<Amount> {
    let currency = CURRENCY_PATTERN.find_iter(text).map(|m| Amount {
        text: m.as_str().to_string(),
        kind: AmountKind::Currency,
    });
    let percentages = PERCENT_PATTERN.find_iter(text).map(|m| Amount {
        text: m.as_str().to_string(),
        kind: AmountKind::Percentage,
    });
    currency.chain(percentages).collect()
}

/// US states and a handful of countries, reported by canonical name.
pub fn extract_jurisdictions(text: &str) -> BTreeSet<String> {
    JURISDICTION_PATTERNS
        .iter()
        .filter(|(_, re)| re.is_match(text))
        .map(|(name, _)| name.to_string())
        .collect()
}

pub fn extract_phone_numbers(text: &str) -> BTreeSet<String> {
    PHONE_PATTERNS
        .iter()
        .flat_map(|re| re.find_iter(text).map(|m| m.as_str().to_string()))
        .collect()
}

/// Name-like spans following party keywords ("between", "LLC", ...).
///
/// High false-positive rate: anything capitalised after a trigger up to a
/// comma, period or "and" is taken, if longer than two characters.
pub fn extract_parties(text: &str) -> BTreeSet<String> {
    PARTY_PATTERN
        .captures_iter(text)
        .map(|caps| {
            caps[1]
                .trim()
                .trim_end_matches([',', '.'])
                .to_string()
        })
        .filter(|party| party.chars().count() > 2)
        .collect()
}

fn collect_matches(re: &Regex, text: &str) -> BTreeSet<String> {
    re.find_iter(text).map(|m| m.as_str().to_string()).collect()
}
