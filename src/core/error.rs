//! Errors raised by rule evaluation and rule set construction.

use thiserror::Error;

/// Errors that can occur while evaluating a rule against an event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The rule's operator has no implementation
    #[error("Comparison operator '{operator}' is not supported")]
    UnsupportedOperator { operator: String },
}

/// A rule set was built from an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("A rule set needs at least one rule")]
pub struct EmptyRulesError;
