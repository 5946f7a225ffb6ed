//! Vertical card display for analysis results and audit entries.

use contract_auditor_analysis::ClauseGuidance;
use contract_auditor_core::{AnalysisResult, AuditEntry, RiskFinding, RiskLevel};

const MAX_LIST_ITEMS: usize = 10;
const MAX_RISKS_PER_LEVEL: usize = 5;
const PREVIEW_CHARS: usize = 80;

// ── Public API ──

/// Print an analysis as a card grouped by analyzer.
pub fn print_analysis_card(result: &AnalysisResult) {
    println!("=== {} ===", result.filename);
    println!("  {:<26} {}", "analyzed_at", result.analyzed_at);
    println!("  {:<26} {} chars", "text_length", result.text_length);
    println!();

    print_clauses(result);
    print_definitions(result);
    print_entities(result);
    print_risks(result);
    print_classification(result);
    print_summary(result);
}

/// Print recent audit entries, one line each.
pub fn print_audit_entries(entries: &[AuditEntry]) {
    if entries.is_empty() {
        println!("No audit entries recorded.");
        return;
    }
    println!(
        "  {:<26} {:<20} {:<22} {:>5}  {:<12} {:>7} {:>7} {:>5}",
        "timestamp", "file", "type", "score", "category", "entities", "clauses", "risks"
    );
    for e in entries {
        println!(
            "  {:<26} {:<20} {:<22} {:>5}  {:<12} {:>7} {:>7} {:>5}",
            e.timestamp,
            shorten(&e.filename, 20),
            e.contract_type.primary_type,
            e.risk_score,
            e.risk_category.as_str(),
            e.entities_count,
            e.clauses_count,
            e.risks_count
        );
    }
}

/// Print explainer output for one clause type.
pub fn print_guidance(
    clause_type: &str,
    guidance: &ClauseGuidance,
    alternatives: Option<&[String]>,
    summary: Option<&str>,
) {
    println!("=== {clause_type} ===");
    println!("{}", guidance.explanation);
    println!();

    println!("Key points");
    for point in &guidance.key_points {
        println!("  - {point}");
    }
    println!();
    println!("  {:<26} {}", "tip", guidance.tips);

    if let Some(alts) = alternatives {
        println!();
        println!("Alternatives");
        for alt in alts {
            println!("  - {alt}");
        }
    }
    if let Some(summary) = summary {
        println!();
        println!("Summary");
        for line in summary.lines() {
            println!("  {line}");
        }
    }
}

// ── Sections ──

fn print_clauses(result: &AnalysisResult) {
    println!("Clauses ({})", result.clauses.len());
    for clause in &result.clauses {
        println!("  {}. {}", clause.number, clause.heading);
        let preview = shorten(&clause.content, PREVIEW_CHARS);
        if !preview.is_empty() {
            println!("      {preview}");
        }
        for sub in &clause.subclauses {
            println!("    {:<8} {}", sub.number, shorten(&sub.content, PREVIEW_CHARS));
        }
    }
    println!();
}

fn print_definitions(result: &AnalysisResult) {
    let len = result.definitions.len();
    if len == 0 {
        return;
    }
    println!("Definitions ({len})");
    for (term, definition) in result.definitions.iter().take(MAX_LIST_ITEMS) {
        println!("  {:<26} {}", format!("\"{term}\""), shorten(definition, PREVIEW_CHARS));
    }
    if len > MAX_LIST_ITEMS {
        println!("    ... and {} more", len - MAX_LIST_ITEMS);
    }
    println!();
}

fn print_entities(result: &AnalysisResult) {
    let e = &result.entities;
    println!("Entities ({})", e.total());
    print_list("parties", e.parties.iter().map(String::as_str));
    print_list("jurisdictions", e.jurisdictions.iter().map(String::as_str));
    print_list("dates", e.dates.iter().map(String::as_str));
    let amounts: Vec<String> = e
        .amounts
        .iter()
        .map(|a| format!("{} ({})", a.text, a.kind.as_str()))
        .collect();
    print_list("amounts", amounts.iter().map(String::as_str));
    print_list("emails", e.emails.iter().map(String::as_str));
    print_list("phone_numbers", e.phone_numbers.iter().map(String::as_str));
    print_list("urls", e.urls.iter().map(String::as_str));
    println!();
}

fn print_risks(result: &AnalysisResult) {
    let summary = &result.risk_summary;
    println!("Risk");
    println!("  {:<26} {}/100", "score", summary.score);
    println!("  {:<26} {}", "category", summary.category);
    println!("  {:<26} {}", "identified", result.risks.len());

    for level in [RiskLevel::High, RiskLevel::Medium] {
        let findings: Vec<&RiskFinding> = result.risks_at(level).collect();
        if findings.is_empty() {
            continue;
        }
        println!("  {} ({}):", level.as_str().to_uppercase(), findings.len());
        for risk in findings.iter().take(MAX_RISKS_PER_LEVEL) {
            println!("    {}", risk.risk_type);
            println!("      {}", risk.description);
            println!("      evidence: {}", risk.evidence.replace('\n', " "));
        }
    }
    println!();
}

fn print_classification(result: &AnalysisResult) {
    let c = &result.classification;
    println!("Classification");
    println!("  {:<26} {}", "primary_type", c.primary_type);
    println!("  {:<26} {:.1}%", "confidence", c.confidence);
    println!("  {:<26} {}", "description", c.description);
    for m in &c.all_matches {
        println!("    {:<22} {} matches", m.contract_type, m.matches);
    }
    println!();
}

fn print_summary(result: &AnalysisResult) {
    println!("Summary");
    println!(
        "  risk {}/100 | {} clauses | {} parties | {}",
        result.risk_summary.score,
        result.clauses.len(),
        result.entities.parties.len(),
        result.classification.primary_type
    );
}

// ── Helpers ──

fn print_list<'a>(label: &str, items: impl Iterator<Item = &'a str>) {
    let items: Vec<&str> = items.collect();
    if items.is_empty() {
        return;
    }
    let shown = items.len().min(MAX_LIST_ITEMS);
    print!("  {:<26} {}", label, items[..shown].join(", "));
    if items.len() > MAX_LIST_ITEMS {
        print!(" ... and {} more", items.len() - MAX_LIST_ITEMS);
    }
    println!();
}

/// First line of `s`, cut to `max` chars with a trailing ellipsis.
fn shorten(s: &str, max: usize) -> String {
    let line = s.lines().next().unwrap_or("").trim();
    if line.chars().count() <= max {
        return line.to_string();
    }
    let cut: String = line.chars().take(max.saturating_sub(3)).collect();
    format!("{cut}...")
}
