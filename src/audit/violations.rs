//! Problems found when auditing a machine definition.

use crate::core::TransitionId;
use thiserror::Error;

/// Configuration problems reported by [`audit`](crate::audit::audit).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionViolation {
    #[error("Transition {transition} uses unsupported operator '{operator}'")]
    UnsupportedOperator {
        transition: TransitionId,
        operator: String,
    },

    #[error("Machine has no initial state")]
    NotInitialized,
}
