//! Graph store: the authoritative registry of states and transitions.
//!
//! The store is a directed multigraph. Each state owns an ordered list of
//! outgoing transitions, so parallel edges between the same pair of states
//! coexist and are returned in the order they were added. Identifier
//! counters belong to the store instance; two stores never share ids.

use crate::core::{Rules, State, StateId, StoreId, Transition, TransitionId};
use crate::engine::MachineError;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

const FIRST_TRANSITION_ID: u64 = 1;

static NEXT_STORE_ID: AtomicU64 = AtomicU64::new(0);

/// Registry of states and the transitions leaving each of them.
#[derive(Clone, Debug)]
pub struct GraphStore<V> {
    id: StoreId,
    states: Vec<State<V>>,
    outgoing: HashMap<StateId, Vec<Transition>>,
    next_transition_id: u64,
}

impl<V> Default for GraphStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> GraphStore<V> {
    pub fn new() -> Self {
        Self {
            id: StoreId(NEXT_STORE_ID.fetch_add(1, Ordering::Relaxed)),
            states: Vec::new(),
            outgoing: HashMap::new(),
            next_transition_id: FIRST_TRANSITION_ID,
        }
    }

    /// Allocate the next state id and store a state carrying `value`.
    pub fn add_state(&mut self, value: V) -> State<V>
    where
        V: Clone,
    {
        let id = StateId(self.states.len() as u64);
        let state = State::new(self.id, id, value);
        self.states.push(state.clone());
        debug!(state_id = %id, "state added");
        state
    }

    /// Allocate the next transition id and store an edge `from -> to`.
    ///
    /// Rule operators are not inspected here. Fails only if either endpoint
    /// was not issued by this store.
    pub fn add_transition(
        &mut self,
        from: StateId,
        to: StateId,
        rules: Rules,
    ) -> Result<Transition, MachineError> {
        self.require_state(from)?;
        self.require_state(to)?;

        let id = TransitionId(self.next_transition_id);
        self.next_transition_id += 1;

        let transition = Transition {
            id,
            from,
            to,
            rules,
        };
        self.outgoing
            .entry(from)
            .or_default()
            .push(transition.clone());
        debug!(transition_id = %id, %from, %to, "transition added");
        Ok(transition)
    }

    /// Every transition leaving `state`, in insertion order.
    pub fn outgoing(&self, state: StateId) -> &[Transition] {
        self.outgoing.get(&state).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn state(&self, id: StateId) -> Option<&State<V>> {
        usize::try_from(id.0)
            .ok()
            .and_then(|index| self.states.get(index))
    }

    pub fn contains(&self, id: StateId) -> bool {
        self.state(id).is_some()
    }

    /// Identity stamped on every state this store issues.
    pub fn id(&self) -> StoreId {
        self.id
    }

    /// Whether `state` is a handle issued by this store.
    pub fn owns(&self, state: &State<V>) -> bool {
        state.store() == self.id && self.contains(state.id())
    }

    pub fn states(&self) -> &[State<V>] {
        &self.states
    }

    /// All transitions, ordered by id.
    pub fn transitions(&self) -> Vec<&Transition> {
        let mut all: Vec<&Transition> = self.outgoing.values().flatten().collect();
        all.sort_by_key(|transition| transition.id);
        all
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.outgoing.values().map(Vec::len).sum()
    }

    fn require_state(&self, id: StateId) -> Result<(), MachineError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(MachineError::UnknownState { id })
        }
    }
}
