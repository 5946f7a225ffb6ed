//! End-to-end checks of the analyzers against realistic contract text.

use contract_auditor_analysis::{analyze, classify, detect_risks, extract_clauses, risk_summary};
use contract_auditor_core::{AmountKind, RiskCategory, RiskLevel};

const SERVICE_AGREEMENT: &str = r#"MASTER SERVICES AGREEMENT

This Agreement is entered into on March 1, 2024 by and between Northwind Traders, a Delaware corporation, and Contoso Services LLC.

1. DEFINITIONS
"Services" means the consulting and support work described in each statement of work.
"Fees" shall mean the amounts payable under Section 3.

2. SERVICES
2.1 The service provider shall perform the services with reasonable skill.
2.2 The contractor may engage subcontractors with prior written consent.

3. PAYMENT
3.1 Client shall pay $12,500.00 per month within 30 days of invoice.
3.2 Late payments accrue interest at 1.5% per month.

4. TERMINATION
Either party may terminate this Agreement for cause upon 30 days written notice.

5. CONFIDENTIALITY
Each party shall keep all proprietary information confidential.

6. GOVERNING LAW
This Agreement is governed by the laws of the State of New York. Notices go to legal@northwind.example or 212-555-0187.
"#;

#[test]
fn service_agreement_structure() {
    let clauses = extract_clauses(SERVICE_AGREEMENT);
    let numbers: Vec<&str> = clauses.iter().map(|c| c.number.as_str()).collect();
    assert_eq!(numbers, vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(clauses[1].heading, "SERVICES");
    assert_eq!(clauses[5].heading, "GOVERNING LAW");

    let payment = &clauses[2];
    assert_eq!(payment.subclauses.len(), 2);
    assert_eq!(payment.subclauses[0].number, "3.1");
    assert!(payment.subclauses[1].content.starts_with("Late payments accrue"));

    for pair in clauses.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    for clause in &clauses {
        for sub in &clause.subclauses {
            assert!(sub.start >= clause.start && sub.end <= clause.end);
        }
    }
}

#[test]
fn service_agreement_full_analysis() {
    let result = analyze("msa.txt", SERVICE_AGREEMENT);

    assert_eq!(result.definitions["Services"].split_whitespace().next(), Some("the"));
    assert!(result.definitions.contains_key("Fees"));

    let entities = &result.entities;
    assert!(entities.dates.contains("March 1, 2024"));
    assert!(entities.jurisdictions.contains("New York"));
    assert!(entities.jurisdictions.contains("Delaware"));
    assert!(entities.emails.contains("legal@northwind.example"));
    assert!(entities.phone_numbers.contains("212-555-0187"));
    assert!(entities.parties.contains("Northwind Traders"));
    assert!(
        entities
            .amounts
            .iter()
            .any(|a| a.text == "$12,500.00" && a.kind == AmountKind::Currency)
    );
    assert!(
        entities
            .amounts
            .iter()
            .any(|a| a.text == "1.5%" && a.kind == AmountKind::Percentage)
    );

    let types: Vec<&str> = result.risks.iter().map(|r| r.risk_type.as_str()).collect();
    assert!(types.contains(&"Termination Clauses"));
    assert!(types.contains(&"Confidentiality"));
    assert!(result.risks.iter().all(|r| r.evidence.chars().count() <= 200));

    assert_eq!(result.classification.primary_type, "Service Agreement");
    assert_eq!(result.risk_summary, risk_summary(&result.risks));
}

#[test]
fn scenario_two_clauses_low_risk() {
    let text = "1. TERMINATION\nThis agreement may be terminated with 30 days notice.\n2. CONFIDENTIALITY\nAll information is confidential.";

    let clauses = extract_clauses(text);
    assert_eq!(clauses.len(), 2);
    assert_eq!((clauses[0].number.as_str(), clauses[0].heading.as_str()), ("1", "TERMINATION"));
    assert_eq!(
        (clauses[1].number.as_str(), clauses[1].heading.as_str()),
        ("2", "CONFIDENTIALITY")
    );

    let risks = detect_risks(text);
    assert_eq!(risks.len(), 2);
    assert_eq!(risks[0].risk_type, "Termination Clauses");
    assert_eq!(risks[1].risk_type, "Confidentiality");
    assert!(risks.iter().all(|r| r.risk_level == RiskLevel::Medium));

    let summary = risk_summary(&risks);
    assert_eq!(summary.score, 15);
    assert_eq!(summary.category, RiskCategory::Low);
}

#[test]
fn scenario_employment_classification() {
    let text = "The employer agrees to hire the employee. This employment begins on the start date.";
    let result = classify(text);
    assert_eq!(result.primary_type, "Employment");
    let matches = result.all_matches[0].matches;
    let expected = (matches as f64 / 10.0 * 100.0).min(100.0);
    assert!((result.confidence - expected).abs() < 1e-9);
}

#[test]
fn high_risk_contract() {
    let text = "The Vendor shall pay liquidated damages for any breach. \
                The Vendor shall indemnify and hold harmless the Client. \
                This is an exclusive arrangement. \
                All patent rights vest in the Client. \
                The Vendor shall not compete with the Client for two years.";
    let result = analyze("risky.txt", text);
    assert!(result.risks.iter().all(|r| r.risk_level == RiskLevel::High));
    assert_eq!(result.risk_summary.score, 30);
    assert_eq!(result.risk_summary.category, RiskCategory::Low);
    assert_eq!(result.risks_at(RiskLevel::High).count(), result.risks.len());
}

#[test]
fn analysis_is_idempotent() {
    let a = analyze("msa.txt", SERVICE_AGREEMENT);
    let b = analyze("msa.txt", SERVICE_AGREEMENT);
    assert_eq!(a.clauses, b.clauses);
    assert_eq!(a.definitions, b.definitions);
    assert_eq!(a.entities, b.entities);
    assert_eq!(a.risks, b.risks);
    assert_eq!(a.classification, b.classification);
}

#[test]
fn result_serializes_to_json() {
    let result = analyze("msa.txt", SERVICE_AGREEMENT);
    let json = result.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["filename"], "msa.txt");
    assert_eq!(value["classification"]["primary_type"], "Service Agreement");
    assert!(value["risks"][0]["type"].is_string());
}
