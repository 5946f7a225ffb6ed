//! Plain-text analysis report for download or archiving.

use std::path::Path;

use chrono::{Local, NaiveDateTime};
use contract_auditor_core::AnalysisResult;
use tracing::info;

use crate::error::ReportError;

const MAX_PARTIES: usize = 3;
const MAX_JURISDICTIONS: usize = 3;
const MAX_DATES: usize = 2;
const MAX_RISKS: usize = 5;
const MAX_CLAUSES: usize = 3;
const HEADING_CHARS: usize = 50;

const DISCLAIMER: &str =
    "This report is for informational purposes. Consult legal counsel for definitive advice.";

/// Render the report body for `result`, stamped with `generated_at`.
pub fn render_report(result: &AnalysisResult, generated_at: NaiveDateTime) -> String {
    let mut lines: Vec<String> = vec![
        "CONTRACT ANALYSIS REPORT".into(),
        String::new(),
        format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S")),
        format!("Contract: {}", result.filename),
        String::new(),
    ];

    // ── 1. Contract type
    let class = &result.classification;
    lines.push("1. Contract Type".into());
    lines.push(format!("Type: {}", class.primary_type));
    lines.push(format!("Confidence: {:.1}%", class.confidence));
    lines.push(String::new());

    // ── 2. Entities
    let entities = &result.entities;
    lines.push("2. Extracted Entities".into());
    let mut push_list = |label: &str, items: Vec<&str>| {
        if !items.is_empty() {
            lines.push(format!("{label}: {}", items.join(", ")));
        }
    };
    push_list(
        "Parties",
        entities.parties.iter().take(MAX_PARTIES).map(String::as_str).collect(),
    );
    push_list(
        "Jurisdictions",
        entities
            .jurisdictions
            .iter()
            .take(MAX_JURISDICTIONS)
            .map(String::as_str)
            .collect(),
    );
    push_list(
        "Key Dates",
        entities.dates.iter().take(MAX_DATES).map(String::as_str).collect(),
    );
    lines.push(String::new());

    // ── 3. Risk
    let summary = &result.risk_summary;
    lines.push("3. Risk Analysis".into());
    lines.push(format!("Overall Risk Score: {}/100", summary.score));
    lines.push(format!("Risk Category: {}", summary.category));
    lines.push(String::new());
    lines.push("Key Risks Identified:".into());
    for risk in result.risks.iter().take(MAX_RISKS) {
        lines.push(format!(
            "- {}: {}",
            risk.risk_type,
            risk.risk_level.as_str().to_uppercase()
        ));
    }
    lines.push(String::new());

    // ── 4. Clauses
    lines.push("4. Extracted Clauses".into());
    for clause in result.clauses.iter().take(MAX_CLAUSES) {
        let heading: String = clause.heading.chars().take(HEADING_CHARS).collect();
        lines.push(format!("Clause {}: {heading}", clause.number));
    }
    lines.push(String::new());

    // ── 5. Recommendations
    lines.push("5. Recommendations".into());
    let [first, second] = recommendations(summary.score);
    lines.push(first.into());
    lines.push(second.into());
    lines.push(String::new());

    lines.push(DISCLAIMER.into());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn recommendations(score: u8) -> [&'static str; 2] {
    if score >= 70 {
        [
            "- HIGH RISK: Seek legal review before signing",
            "- Negotiate terms to reduce identified risks",
        ]
    } else if score >= 40 {
        [
            "- MEDIUM RISK: Review key clauses carefully",
            "- Consider negotiating high-risk clauses",
        ]
    } else {
        [
            "- LOW RISK: Standard contract terms",
            "- Proceed with normal review process",
        ]
    }
}

/// Render with the current local time and write to `path`.
pub fn write_report(path: &Path, result: &AnalysisResult) -> Result<(), ReportError> {
    let body = render_report(result, Local::now().naive_local());
    std::fs::write(path, body).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "wrote report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contract_auditor_analysis::analyze;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 21)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    const TWO_CLAUSES: &str = "1. TERMINATION\nThis agreement may be terminated with 30 days notice.\n2. CONFIDENTIALITY\nAll information is confidential.";

    #[test]
    fn sections_in_order() {
        let result = analyze("deal.txt", TWO_CLAUSES);
        let report = render_report(&result, at());

        let order = [
            "CONTRACT ANALYSIS REPORT",
            "Generated: 2026-02-21 10:30:00",
            "Contract: deal.txt",
            "1. Contract Type",
            "2. Extracted Entities",
            "3. Risk Analysis",
            "4. Extracted Clauses",
            "5. Recommendations",
            DISCLAIMER,
        ];
        let mut pos = 0;
        for marker in order {
            let found = report[pos..].find(marker).unwrap_or_else(|| panic!("missing {marker}"));
            pos += found + marker.len();
        }

        assert!(report.contains("Type: General Contract"));
        assert!(report.contains("Confidence: 0.0%"));
        assert!(report.contains("Overall Risk Score: 15/100"));
        assert!(report.contains("Risk Category: Low Risk"));
        assert!(report.contains("- Termination Clauses: MEDIUM"));
        assert!(report.contains("- Confidentiality: MEDIUM"));
        assert!(report.contains("Clause 1: TERMINATION"));
        assert!(report.contains("Clause 2: CONFIDENTIALITY"));
        assert!(report.contains("- LOW RISK: Standard contract terms"));
    }

    #[test]
    fn empty_entity_lines_are_omitted() {
        let result = analyze("deal.txt", TWO_CLAUSES);
        let report = render_report(&result, at());
        assert!(!report.contains("Parties:"));
        assert!(!report.contains("Key Dates:"));
    }

    #[test]
    fn entity_lists_are_capped() {
        let mut result = analyze("deal.txt", "");
        for d in ["01/01/2024", "02/01/2024", "03/01/2024"] {
            result.entities.dates.insert(d.into());
        }
        let report = render_report(&result, at());
        assert!(report.contains("Key Dates: 01/01/2024, 02/01/2024\n"));
    }

    #[test]
    fn recommendation_bands() {
        assert_eq!(recommendations(70)[0], "- HIGH RISK: Seek legal review before signing");
        assert_eq!(recommendations(40)[0], "- MEDIUM RISK: Review key clauses carefully");
        assert_eq!(recommendations(39)[0], "- LOW RISK: Standard contract terms");
    }

    #[test]
    fn write_failure_is_report_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = analyze("deal.txt", TWO_CLAUSES);
        let target = dir.path().join("missing").join("report.txt");
        let err = write_report(&target, &result).unwrap_err();
        assert!(matches!(err, ReportError::Write { .. }));

        let ok = dir.path().join("report.txt");
        write_report(&ok, &result).unwrap();
        assert!(std::fs::read_to_string(ok).unwrap().starts_with("CONTRACT ANALYSIS REPORT"));
    }
}
