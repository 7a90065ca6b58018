//! fsmgraph: a labeled-transition state machine
//!
//! A machine holds a current state and a directed multigraph of states
//! connected by rule-guarded transitions. The driver feeds it discrete
//! events; each event is checked against the transitions leaving the current
//! state and the first match moves the machine.
//!
//! # Core Concepts
//!
//! - **State**: an identifier plus a caller-chosen payload
//! - **Transition**: a directed edge guarded by one or more rules
//! - **Rule**: an operator and the event it compares against
//! - **Machine**: owns the graph store and the current-state pointer
//!
//! # Example
//!
//! ```rust
//! use fsmgraph::builder::eq;
//! use fsmgraph::{Machine, Value};
//!
//! let mut machine: Machine<Value> = Machine::new();
//! let locked = machine.initialize("locked".into());
//! let unlocked = machine.define_state("unlocked".into());
//!
//! machine.connect(&locked, &unlocked, eq("coin")).unwrap();
//! machine.connect(&unlocked, &locked, eq("push")).unwrap();
//! machine.connect(&locked, &locked, eq("push")).unwrap();
//! machine.connect(&unlocked, &unlocked, eq("coin")).unwrap();
//!
//! let trace = machine.run_traced(["coin", "push"]).unwrap();
//! let rendered: Vec<String> = trace.iter().map(ToString::to_string).collect();
//! assert_eq!(rendered, vec!["unlocked", "locked"]);
//!
//! // Events nothing matches are ignored.
//! machine.fire_event("jump").unwrap();
//! assert_eq!(machine.current(), Some(&locked));
//! ```

pub mod audit;
pub mod builder;
pub mod core;
pub mod engine;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Event, Operator, Rule, Rules, State, StateId, Transition, TransitionId, Value};
pub use crate::engine::{Machine, MachineError, TracedRunError};
pub use crate::store::GraphStore;
