//! Errors raised while defining or driving a machine.

use crate::core::{RuleError, State, StateId};
use std::fmt;
use thiserror::Error;

/// Errors that can occur while defining states and transitions or firing events.
///
/// None of these are transient; retrying the same call yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError {
    /// A transition evaluated during firing uses an operator with no implementation
    #[error("Comparison operator '{operator}' is not supported")]
    UnsupportedOperator { operator: String },

    /// An event was fired before an initial state was set
    #[error("Machine has no current state. Call .initialize(value) before firing events")]
    Uninitialized,

    /// A transition endpoint was not issued by this machine
    #[error("State {id} does not belong to this machine")]
    UnknownState { id: StateId },
}

impl From<RuleError> for MachineError {
    fn from(err: RuleError) -> Self {
        match err {
            RuleError::UnsupportedOperator { operator } => Self::UnsupportedOperator { operator },
        }
    }
}

/// A traced run that stopped early, together with the states it reached
/// before the failing event.
#[derive(Debug, Clone, PartialEq)]
pub struct TracedRunError<V> {
    /// Why the run stopped
    pub source: MachineError,
    /// State reached after each event that was processed successfully
    pub completed: Vec<State<V>>,
}

impl<V> fmt::Display for TracedRunError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (after {} completed events)",
            self.source,
            self.completed.len()
        )
    }
}

impl<V: fmt::Debug> std::error::Error for TracedRunError<V> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl<V> From<TracedRunError<V>> for MachineError {
    fn from(err: TracedRunError<V>) -> Self {
        err.source
    }
}
