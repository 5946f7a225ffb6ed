//! Clause segmentation and quoted-term definitions.
//!
//! # Boundaries
//!
//! - Clause header: at a line start, `<digits>.` then whitespace, then a heading
//!   line made only of ASCII capitals and whitespace (`3. TERMINATION`).
//! - Clause body: everything between the end of the heading line and the next
//!   header (or end of text), trimmed.
//! - Sub-clause: inside a clause body, a line starting `<digits>.<digits>` followed
//!   by whitespace (`3.1 Either party ...`). Its body runs to the next sub-clause
//!   line or the end of the parent body.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use contract_auditor_core::{Clause, SubClause};
use regex::Regex;
use tracing::debug;

use crate::text::truncate_chars;

const CLAUSE_PREVIEW_CHARS: usize = 500;
const SUBCLAUSE_PREVIEW_CHARS: usize = 200;

static DEFINITION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)"([^"]+)"\s*(?:means|is|shall|refers to)\s*([^.]+\.)"#).unwrap()
});

/// A matched clause header.
struct Header<'a> {
    start: usize,
    /// End of the heading line (exclusive); the clause body starts here.
    heading_end: usize,
    number: &'a str,
    heading: &'a str,
}

/// Split raw text into top-level clauses with nested sub-clauses.
///
/// Clauses come back in document order and never overlap. Text with no
/// numbered headers yields an empty list.
pub fn extract_clauses(text: &str) -> Vec<Clause> {
    let headers = find_headers(text);
    let mut clauses = Vec::with_capacity(headers.len());

    for (i, header) in headers.iter().enumerate() {
        let end = headers.get(i + 1).map_or(text.len(), |next| next.start);
        let raw = &text[header.heading_end..end];
        let full_content = raw.trim();
        let body_offset = header.heading_end + (raw.len() - raw.trim_start().len());

        clauses.push(Clause {
            number: header.number.to_string(),
            heading: header.heading.to_string(),
            content: truncate_chars(full_content, CLAUSE_PREVIEW_CHARS).to_string(),
            full_content: full_content.to_string(),
            subclauses: extract_subclauses(full_content, body_offset),
            start: header.start,
            end,
        });
    }

    debug!(count = clauses.len(), "extracted clauses");
    clauses
}

/// Extract `"Term" means ...` style definitions.
///
/// The definition runs to the first period after the trigger word. A term
/// defined twice keeps its last definition.
pub fn extract_definitions(text: &str) -> BTreeMap<String, String> {
    let mut definitions = BTreeMap::new();
    for caps in DEFINITION_PATTERN.captures_iter(text) {
        let term = caps[1].trim().to_string();
        let definition = caps[2].trim().to_string();
        definitions.insert(term, definition);
    }
    debug!(count = definitions.len(), "extracted definitions");
    definitions
}

// ── Clause headers ──

fn find_headers(text: &str) -> Vec<Header<'_>> {
    let mut headers = Vec::new();
    // A header may span lines (`1.\nTERMS`); skip line starts it already covered.
    let mut resume_at = 0;
    for start in line_starts(text) {
        if start < resume_at {
            continue;
        }
        if let Some(header) = parse_header(text, start) {
            resume_at = header.heading_end;
            headers.push(header);
        }
    }
    headers
}

fn parse_header(text: &str, start: usize) -> Option<Header<'_>> {
    let rest = &text[start..];
    let digits = leading_digits(rest);
    if digits == 0 {
        return None;
    }
    let after_dot = rest[digits..].strip_prefix('.')?;
    let heading_src = after_dot.trim_start();
    if heading_src.len() == after_dot.len() {
        return None;
    }
    if !heading_src.starts_with(|c: char| c.is_ascii_uppercase()) {
        return None;
    }

    let line_len = heading_src.find('\n').unwrap_or(heading_src.len());
    let line = &heading_src[..line_len];
    if !line
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_whitespace())
    {
        return None;
    }

    let heading_start = start + (rest.len() - heading_src.len());
    Some(Header {
        start,
        heading_end: heading_start + line_len,
        number: &rest[..digits],
        heading: line.trim(),
    })
}

// ── Sub-clauses ──

/// Sub-clauses of one clause body; `base` is the body's offset in the full text.
fn extract_subclauses(body: &str, base: usize) -> Vec<SubClause> {
    let bounds: Vec<(usize, usize)> = line_starts(body)
        .filter_map(|start| subclause_number_len(&body[start..]).map(|len| (start, len)))
        .collect();

    bounds
        .iter()
        .enumerate()
        .map(|(i, &(start, number_len))| {
            let end = bounds.get(i + 1).map_or(body.len(), |&(next, _)| next);
            let content = body[start + number_len..end].trim();
            SubClause {
                number: body[start..start + number_len].to_string(),
                content: truncate_chars(content, SUBCLAUSE_PREVIEW_CHARS).to_string(),
                start: base + start,
                end: base + end,
            }
        })
        .collect()
}

/// Byte length of a leading `<digits>.<digits>` that is followed by whitespace.
fn subclause_number_len(line: &str) -> Option<usize> {
    let major = leading_digits(line);
    if major == 0 || line.as_bytes().get(major) != Some(&b'.') {
        return None;
    }
    let minor = leading_digits(&line[major + 1..]);
    if minor == 0 {
        return None;
    }
    let len = major + 1 + minor;
    line[len..]
        .starts_with(char::is_whitespace)
        .then_some(len)
}

// ── Helpers ──

fn line_starts(text: &str) -> impl Iterator<Item = usize> + '_ {
    std::iter::once(0).chain(text.match_indices('\n').map(|(i, _)| i + 1))
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_CLAUSES: &str = "1. TERMINATION\nThis agreement may be terminated with 30 days notice.\n2. CONFIDENTIALITY\nAll information is confidential.";

    #[test]
    fn two_clause_scenario() {
        let clauses = extract_clauses(TWO_CLAUSES);
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[0].number, "1");
        assert_eq!(clauses[0].heading, "TERMINATION");
        assert_eq!(
            clauses[0].full_content,
            "This agreement may be terminated with 30 days notice."
        );
        assert_eq!(clauses[1].number, "2");
        assert_eq!(clauses[1].heading, "CONFIDENTIALITY");
        assert_eq!(clauses[1].full_content, "All information is confidential.");
        assert!(clauses.iter().all(|c| c.subclauses.is_empty()));
    }

    #[test]
    fn spans_are_ordered_and_contiguous() {
        let text = format!("Preamble text.\n{TWO_CLAUSES}\n3. GOVERNING LAW\nDelaware.");
        let clauses = extract_clauses(&text);
        assert_eq!(clauses.len(), 3);
        for pair in clauses.windows(2) {
            assert!(pair[0].start < pair[1].start);
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(clauses.last().unwrap().end, text.len());
        let rebuilt: String = clauses.iter().map(|c| &text[c.start..c.end]).collect();
        assert_eq!(rebuilt, &text[clauses[0].start..]);
        for clause in &clauses {
            assert!(text[clause.start..clause.end].contains(&clause.full_content));
        }
    }

    #[test]
    fn subclauses_nest_inside_parent() {
        let text = "1. PAYMENT\n1.1 Fees are due monthly.\n1.2 Late fees apply\nafter thirty days.\n2. TERM\n2.1 One year.";
        let clauses = extract_clauses(text);
        assert_eq!(clauses.len(), 2);

        let first = &clauses[0];
        assert_eq!(first.subclauses.len(), 2);
        assert_eq!(first.subclauses[0].number, "1.1");
        assert_eq!(first.subclauses[0].content, "Fees are due monthly.");
        assert_eq!(first.subclauses[1].number, "1.2");
        assert_eq!(first.subclauses[1].content, "Late fees apply\nafter thirty days.");

        for clause in &clauses {
            for sub in &clause.subclauses {
                assert!(sub.start >= clause.start && sub.end <= clause.end);
                assert!(text[sub.start..sub.end].starts_with(&sub.number));
            }
        }
        assert_eq!(clauses[1].subclauses[0].content, "One year.");
    }

    #[test]
    fn mixed_case_heading_is_not_a_clause() {
        assert!(extract_clauses("1. Termination\nEither party may leave.").is_empty());
        assert!(extract_clauses("1. TERMINATION. Either party may leave.").is_empty());
    }

    #[test]
    fn subclause_line_is_not_a_top_level_clause() {
        let clauses = extract_clauses("1.1 SOMETHING\n2. REAL HEADING\nBody.");
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].number, "2");
    }

    #[test]
    fn header_may_wrap_after_number() {
        let clauses = extract_clauses("4.\nNOTICES\nIn writing.");
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].heading, "NOTICES");
        assert_eq!(clauses[0].full_content, "In writing.");
    }

    #[test]
    fn previews_are_truncated() {
        let long_body = "x".repeat(700);
        let long_sub = "y".repeat(300);
        let text = format!("1. SCOPE\n{long_body}\n1.1 {long_sub}");
        let clauses = extract_clauses(&text);
        assert_eq!(clauses[0].content.chars().count(), 500);
        assert!(clauses[0].full_content.len() > 1000);
        assert_eq!(clauses[0].subclauses[0].content.chars().count(), 200);
    }

    #[test]
    fn empty_and_unnumbered_text() {
        assert!(extract_clauses("").is_empty());
        assert!(extract_clauses("No numbered clauses here.").is_empty());
        assert!(extract_definitions("").is_empty());
    }

    #[test]
    fn definitions_last_write_wins() {
        let text = r#""Services" means the consulting work. "Fee" is the monthly charge. "Services" refers to the hosted platform."#;
        let defs = extract_definitions(text);
        assert_eq!(defs.len(), 2);
        assert_eq!(defs["Services"], "the hosted platform.");
        assert_eq!(defs["Fee"], "the monthly charge.");
    }

    #[test]
    fn definition_trigger_is_case_insensitive() {
        let defs = extract_definitions(r#"The "Effective Date" SHALL mean March 1, 2025."#);
        assert_eq!(defs["Effective Date"], "mean March 1, 2025.");
    }

    #[test]
    fn idempotent() {
        assert_eq!(extract_clauses(TWO_CLAUSES), extract_clauses(TWO_CLAUSES));
    }
}
