//! States: the nodes of a machine's transition graph.
//!
//! A state pairs an identifier, allocated by the graph store that owns it,
//! with a caller-chosen payload. The engine only ever compares identifiers;
//! the payload is carried along for display and identity on the caller's side.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of the graph store that issued a state.
///
/// Unique per store within a process, so handles from one machine are never
/// mistaken for another machine's states with the same [`StateId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreId(pub(crate) u64);

/// Identifier of a state within one graph store.
///
/// Identifiers are allocated sequentially starting at 0 and are never reused
/// within the store that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateId(pub u64);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node in the machine: a unique identifier plus an opaque value.
///
/// States are immutable once created. Handles returned by
/// [`Machine::initialize`](crate::Machine::initialize) and
/// [`Machine::define_state`](crate::Machine::define_state) are clones of the
/// stored record and can be passed back to
/// [`Machine::connect`](crate::Machine::connect).
///
/// # Example
///
/// ```rust
/// use fsmgraph::{Machine, Value};
///
/// let mut machine: Machine<Value> = Machine::new();
/// let locked = machine.initialize("locked".into());
///
/// assert_eq!(locked.id().0, 0);
/// assert_eq!(locked.to_string(), "locked");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct State<V> {
    store: StoreId,
    id: StateId,
    value: V,
}

impl<V> State<V> {
    pub(crate) fn new(store: StoreId, id: StateId, value: V) -> Self {
        Self { store, id, value }
    }

    /// The store that issued this state.
    pub fn store(&self) -> StoreId {
        self.store
    }

    /// The identifier allocated for this state.
    pub fn id(&self) -> StateId {
        self.id
    }

    /// The payload this state was created with.
    pub fn value(&self) -> &V {
        &self.value
    }
}

/// Renders the payload only; the identifier is not part of the display form.
impl<V: fmt::Display> fmt::Display for State<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
