pub mod audit;
pub mod model;

pub use audit::AuditEntry;
pub use model::{
    Amount, AmountKind, AnalysisResult, Clause, Classification, EntityBundle, RiskCategory,
    RiskFinding, RiskLevel, RiskSummary, SubClause, TypeMatch,
};
