//! Rendering a run's result as the single outcome line

use crate::error::Result;
use crate::types::CreatedIssue;

/// Prefix of a successful outcome
pub const SUCCESS_MARK: &str = "✅";
/// Prefix of a failed outcome
pub const FAILURE_MARK: &str = "❌";

/// Outcome line shown on the console and written to the audit log
pub fn outcome_line(result: &Result<CreatedIssue>) -> String {
    match result {
        Ok(issue) => format!("{SUCCESS_MARK} Ticket creado: {}", issue.key),
        Err(e) => format!("{FAILURE_MARK} {e}"),
    }
}
