//! The event-driven engine.
//!
//! A [`Machine`] owns a graph store and a pointer to the current state.
//! Setup happens through `initialize`, `define_state` and `connect`; after
//! that the store is only read while events are fired.
//!
//! # Lifecycle
//!
//! - **Uninitialized**: freshly created, no current state. Firing fails.
//! - **Ready**: after `initialize`. Stays ready for any number of events;
//!   there is no terminal state.

mod error;
mod machine;

pub use error::{MachineError, TracedRunError};
pub use machine::Machine;
