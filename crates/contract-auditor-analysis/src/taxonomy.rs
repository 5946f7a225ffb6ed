//! Fixed keyword tables driving the risk detector and the contract classifier.
//!
//! Both tables are ordered slices: declaration order is the scan order for risk
//! categories and the tie-break order for contract types.

use contract_auditor_core::RiskLevel;

/// One bucket of the risk taxonomy.
pub struct RiskCategoryRule {
    pub name: &'static str,
    /// Lower-case keywords; the first one present in the text wins.
    pub keywords: &'static [&'static str],
    pub level: RiskLevel,
    pub description: &'static str,
}

pub const RISK_CATEGORIES: &[RiskCategoryRule] = &[
    RiskCategoryRule {
        name: "Penalty Clauses",
        keywords: &["penalty", "fine", "damages", "liquidated", "breach", "indemnify"],
        level: RiskLevel::High,
        description: "Clauses imposing penalties for breach",
    },
    RiskCategoryRule {
        name: "Indemnity Clauses",
        keywords: &[
            "indemnify",
            "indemnification",
            "hold harmless",
            "defending",
            "liability",
        ],
        level: RiskLevel::High,
        description: "Clauses requiring indemnification",
    },
    RiskCategoryRule {
        name: "Termination Clauses",
        keywords: &[
            "termination",
            "terminate",
            "terminate for cause",
            "terminate without cause",
        ],
        level: RiskLevel::Medium,
        description: "Clauses specifying termination rights",
    },
    RiskCategoryRule {
        name: "Lock-in Period",
        keywords: &[
            "lock",
            "lock-in",
            "locked in",
            "exclusive",
            "no exit",
            "cannot terminate",
        ],
        level: RiskLevel::High,
        description: "Clauses restricting early termination",
    },
    RiskCategoryRule {
        name: "Auto-Renewal",
        keywords: &[
            "auto-renewal",
            "automatic renewal",
            "renew",
            "unless notice",
            "renewal",
        ],
        level: RiskLevel::Medium,
        description: "Clauses with automatic renewal",
    },
    RiskCategoryRule {
        name: "Arbitration",
        keywords: &[
            "arbitration",
            "arbitrator",
            "binding arbitration",
            "arbitrate",
        ],
        level: RiskLevel::Medium,
        description: "Arbitration dispute resolution clauses",
    },
    RiskCategoryRule {
        name: "Intellectual Property",
        keywords: &[
            "intellectual property",
            "patent",
            "copyright",
            "trademark",
            "ip",
            "proprietary",
            "work made for hire",
        ],
        level: RiskLevel::High,
        description: "IP assignment and ownership clauses",
    },
    RiskCategoryRule {
        name: "Confidentiality",
        keywords: &[
            "confidential",
            "confidentiality",
            "nda",
            "non-disclosure",
            "proprietary",
        ],
        level: RiskLevel::Medium,
        description: "Confidentiality and NDA clauses",
    },
    RiskCategoryRule {
        name: "Limitation of Liability",
        keywords: &[
            "limitation of liability",
            "limit of liability",
            "liable",
            "not liable",
            "exclude",
        ],
        level: RiskLevel::Medium,
        description: "Clauses limiting liability",
    },
    RiskCategoryRule {
        name: "Non-Competition",
        keywords: &[
            "non-compete",
            "non-competition",
            "compete",
            "competitor",
            "restrictive covenant",
        ],
        level: RiskLevel::High,
        description: "Non-compete and restrictive covenant clauses",
    },
];

/// One contract-type bucket of the classifier.
pub struct ContractTypeRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    /// Distinct keywords that must be present for the bucket to qualify.
    pub min_matches: usize,
    pub description: &'static str,
}

pub const CONTRACT_TYPES: &[ContractTypeRule] = &[
    ContractTypeRule {
        name: "Employment",
        keywords: &[
            "employment",
            "employee",
            "employer",
            "salary",
            "compensation",
            "work",
            "position",
            "job",
        ],
        min_matches: 3,
        description: "Agreement between employer and employee defining terms of work",
    },
    ContractTypeRule {
        name: "Lease",
        keywords: &[
            "lease",
            "landlord",
            "tenant",
            "rent",
            "property",
            "premises",
            "leaseholder",
        ],
        min_matches: 2,
        description: "Agreement for renting property or equipment",
    },
    ContractTypeRule {
        name: "Service Agreement",
        keywords: &[
            "service",
            "services",
            "service provider",
            "contractor",
            "engagement",
            "work",
        ],
        min_matches: 3,
        description: "Contract for provision of services",
    },
    ContractTypeRule {
        name: "Vendor",
        keywords: &["vendor", "supplier", "supply", "purchasing", "goods", "material"],
        min_matches: 2,
        description: "Agreement for supply of goods or services from a vendor",
    },
    ContractTypeRule {
        name: "Partnership",
        keywords: &[
            "partnership",
            "partner",
            "joint venture",
            "co-founder",
            "equity",
            "profit",
            "loss",
        ],
        min_matches: 2,
        description: "Agreement establishing partnership between parties",
    },
    ContractTypeRule {
        name: "NDA",
        keywords: &[
            "non-disclosure",
            "nda",
            "confidential",
            "confidentiality agreement",
            "proprietary",
        ],
        min_matches: 2,
        description: "Non-disclosure agreement protecting confidential information",
    },
    ContractTypeRule {
        name: "License Agreement",
        keywords: &[
            "license",
            "licensed",
            "licensor",
            "licensee",
            "intellectual property",
            "ip",
        ],
        min_matches: 2,
        description: "Agreement granting rights to use intellectual property",
    },
    ContractTypeRule {
        name: "Loan Agreement",
        keywords: &[
            "loan",
            "lender",
            "borrower",
            "principal",
            "interest",
            "repayment",
            "debt",
        ],
        min_matches: 3,
        description: "Agreement for borrowing and repayment of funds",
    },
];

/// Fallback type when no bucket qualifies.
pub const GENERAL_CONTRACT: &str = "General Contract";
pub const GENERAL_CONTRACT_DESCRIPTION: &str = "Contract of unknown type";

/// Description for a contract type name, falling back to the general description.
pub fn contract_type_description(name: &str) -> &'static str {
    CONTRACT_TYPES
        .iter()
        .find(|rule| rule.name == name)
        .map(|rule| rule.description)
        .unwrap_or(GENERAL_CONTRACT_DESCRIPTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_risk_categories_in_order() {
        let names: Vec<&str> = RISK_CATEGORIES.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "Penalty Clauses",
                "Indemnity Clauses",
                "Termination Clauses",
                "Lock-in Period",
                "Auto-Renewal",
                "Arbitration",
                "Intellectual Property",
                "Confidentiality",
                "Limitation of Liability",
                "Non-Competition",
            ]
        );
    }

    #[test]
    fn eight_contract_types_in_tie_break_order() {
        let names: Vec<&str> = CONTRACT_TYPES.iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec![
                "Employment",
                "Lease",
                "Service Agreement",
                "Vendor",
                "Partnership",
                "NDA",
                "License Agreement",
                "Loan Agreement",
            ]
        );
    }

    #[test]
    fn keywords_are_lower_case() {
        let all = RISK_CATEGORIES
            .iter()
            .flat_map(|c| c.keywords.iter())
            .chain(CONTRACT_TYPES.iter().flat_map(|c| c.keywords.iter()));
        for kw in all {
            assert_eq!(*kw, kw.to_lowercase(), "keyword {kw:?} must be lower-case");
        }
    }

    #[test]
    fn description_lookup() {
        assert_eq!(
            contract_type_description("Lease"),
            "Agreement for renting property or equipment"
        );
        assert_eq!(
            contract_type_description(GENERAL_CONTRACT),
            "Contract of unknown type"
        );
        assert_eq!(contract_type_description("Unknown"), "Contract of unknown type");
    }
}
