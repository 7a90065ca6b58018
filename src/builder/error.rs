//! Build errors for rule set construction.

use thiserror::Error;

/// Errors that can occur when building rule sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("No rules defined. Add at least one rule with .eq(event) or .rule(operator, event)")]
    EmptyRules,
}
