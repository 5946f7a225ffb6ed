//! Document I/O around the analyzers: text extraction in, audit log and report out.

mod audit_log;
mod error;
pub mod extract;
pub mod report;

pub use audit_log::AuditLog;
pub use error::{ReportError, StoreError};
pub use extract::{extract_file, extract_text};
pub use report::{render_report, write_report};
