//! Plain-language guidance for clause types.
//!
//! Pure lookups keyed by clause-type name; nothing here scans a whole document.

/// Explanation, checklist and negotiation tip for one clause type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClauseGuidance {
    pub explanation: String,
    pub key_points: Vec<String>,
    pub tips: String,
}

/// Static table row; converted to an owned [`ClauseGuidance`] on lookup.
struct GuidanceEntry {
    clause_type: &'static str,
    explanation: &'static str,
    key_points: &'static [&'static str],
    tips: &'static str,
}

const GUIDANCE: &[GuidanceEntry] = &[
    GuidanceEntry {
        clause_type: "Termination",
        explanation: "This clause specifies the conditions and procedures for ending the contract.",
        key_points: &[
            "Define notice periods required",
            "Specify termination for-cause vs. without-cause",
            "Detail post-termination obligations",
            "State severance/exit fees if any",
        ],
        tips: "Ensure notice periods are reasonable and align with business needs.",
    },
    GuidanceEntry {
        clause_type: "Confidentiality",
        explanation: "This clause protects sensitive business information from unauthorized disclosure.",
        key_points: &[
            "Define what qualifies as Confidential Information",
            "Specify duration of confidentiality obligation",
            "List exceptions (public knowledge, independently developed)",
            "Detail remedies for breach",
        ],
        tips: "Clarify what information is covered and how long protection lasts.",
    },
    GuidanceEntry {
        clause_type: "Indemnity",
        explanation: "One party agrees to cover losses of the other party if certain events occur.",
        key_points: &[
            "Define indemnifiable events clearly",
            "Specify indemnifying party's obligations",
            "Cap indemnification limits if possible",
            "Require prompt notice of claims",
        ],
        tips: "Negotiate caps on indemnification liability to limit exposure.",
    },
    GuidanceEntry {
        clause_type: "Non-Competition",
        explanation: "Restricts one party from engaging in competing business during and after the contract.",
        key_points: &[
            "Geographic scope of restriction",
            "Time period of non-compete",
            "Specific activities restricted",
            "Exceptions or carve-outs",
        ],
        tips: "Ensure non-compete is narrowly tailored to protect legitimate interests.",
    },
    GuidanceEntry {
        clause_type: "Compensation",
        explanation: "Details how payment will be made for services or goods provided.",
        key_points: &[
            "Payment amount clearly stated",
            "Payment schedule and frequency",
            "What triggers payment obligations",
            "Adjustment mechanisms if any",
        ],
        tips: "Specify exact amounts and payment dates to avoid disputes.",
    },
    GuidanceEntry {
        clause_type: "Intellectual Property",
        explanation: "Determines ownership of creations and inventions made during the contract term.",
        key_points: &[
            "Ownership of work product",
            "Pre-existing IP rights preserved",
            "Scope of IP assignment if any",
            "License grants",
        ],
        tips: "Protect your pre-existing IP and clarify ownership of work created.",
    },
    GuidanceEntry {
        clause_type: "Limitation of Liability",
        explanation: "Caps the amount one party can claim from another in case of breach or damage.",
        key_points: &[
            "Excluded damages (e.g., consequential)",
            "Liability caps or limits",
            "Damages calculation method",
            "Exceptions to limitations",
        ],
        tips: "Understand which damages are excluded and negotiate reasonable caps.",
    },
    GuidanceEntry {
        clause_type: "Governing Law",
        explanation: "Specifies which jurisdiction's laws will interpret and enforce the contract.",
        key_points: &[
            "Choice of law (which state/country)",
            "Jurisdiction for disputes",
            "Dispute resolution method (litigation vs. arbitration)",
        ],
        tips: "Choose a neutral jurisdiction if possible.",
    },
];

const ALTERNATIVES: &[(&str, &[&str])] = &[
    (
        "Termination",
        &[
            "Multi-tier notice: 30 days for without-cause, 10 days for cause with cure period",
            "Immediate termination for material breach with 30-day cure opportunity",
            "Termination for convenience with 60-day notice and proportional fee refund",
        ],
    ),
    (
        "Confidentiality",
        &[
            "Information ceases to be confidential if it enters public domain without breach",
            "Carve-outs: Information already known, independently developed, received from third parties",
            "Obligation survives termination for 2-3 years",
        ],
    ),
    (
        "Indemnity",
        &[
            "Indemnification capped at annual contract value",
            "Indemnifying party not liable for indirect or consequential damages",
            "Indemnified party must mitigate damages and provide prompt notice",
        ],
    ),
    (
        "Intellectual Property",
        &[
            "Pre-existing IP retained by creator; only custom work assigned",
            "License back of IP to creator for personal, non-commercial use",
            "Joint ownership of derivative works",
        ],
    ),
    (
        "Compensation",
        &[
            "Fixed fee + hourly rate for out-of-scope work",
            "Payment in installments tied to milestones",
            "Annual adjustment tied to inflation (CPI)",
        ],
    ),
];

const GENERIC_ALTERNATIVE: &str = "Consult with legal counsel for alternative language";

/// Keyword → plain-language meaning, checked in this order by [`summarize`].
const SUMMARY_KEYWORDS: &[(&str, &str)] = &[
    ("must", "party is obligated to"),
    ("shall", "party must"),
    ("may", "party has the option to"),
    ("not", "party is prohibited from"),
    ("terminate", "contract can be ended"),
    ("pay", "payment is required"),
    ("confidential", "information must be kept private"),
];

const SHORT_CLAUSE_CHARS: usize = 100;

/// Clause types with dedicated guidance, in table order.
pub fn known_clause_types() -> impl Iterator<Item = &'static str> {
    GUIDANCE.iter().map(|g| g.clause_type)
}

/// Guidance for a clause type; unknown types get a generic record.
pub fn explain(clause_type: &str) -> ClauseGuidance {
    match GUIDANCE.iter().find(|g| g.clause_type == clause_type) {
        Some(entry) => ClauseGuidance {
            explanation: entry.explanation.to_string(),
            key_points: entry.key_points.iter().map(|p| p.to_string()).collect(),
            tips: entry.tips.to_string(),
        },
        None => ClauseGuidance {
            explanation: format!("No specific guidance available for {clause_type}"),
            key_points: vec!["Review the clause carefully in context".to_string()],
            tips: "Consider consulting legal counsel for specialized clauses".to_string(),
        },
    }
}

/// Alternative phrasings to negotiate toward.
pub fn suggest_alternatives(clause_type: &str) -> Vec<String> {
    ALTERNATIVES
        .iter()
        .find(|(name, _)| *name == clause_type)
        .map(|(_, alts)| alts.iter().map(|a| a.to_string()).collect())
        .unwrap_or_else(|| vec![GENERIC_ALTERNATIVE.to_string()])
}

/// Heuristic plain-language summary of a single clause's text.
pub fn summarize(clause_text: &str) -> String {
    if clause_text.chars().count() < SHORT_CLAUSE_CHARS {
        return "Short clause with limited scope.".to_string();
    }

    let lower = clause_text.to_lowercase();
    let points: Vec<String> = SUMMARY_KEYWORDS
        .iter()
        .filter(|(keyword, _)| lower.contains(keyword))
        .map(|(_, meaning)| format!("- {meaning}"))
        .collect();

    if points.is_empty() {
        "Review clause carefully for exact obligations and restrictions.".to_string()
    } else {
        format!("Key obligations:\n{}", points.join("\n"))
    }
}
