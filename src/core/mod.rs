//! Core data types of the state machine.
//!
//! This module contains the plain values the engine operates on:
//! - States and their identifiers
//! - Rules, operators and events that guard transitions
//! - Transitions between states
//! - Immutable history of fired transitions
//! - Errors raised while evaluating rules
//!
//! Nothing here holds mutable machine state; that lives in the graph store
//! and the engine.

mod error;
mod history;
mod rule;
mod state;
mod transition;
mod value;

pub use error::{EmptyRulesError, RuleError};
pub use history::{FiredTransition, TransitionHistory};
pub use rule::{Event, Operator, Rule, Rules};
pub use state::{State, StateId, StoreId};
pub use transition::{Transition, TransitionId};
pub use value::Value;
