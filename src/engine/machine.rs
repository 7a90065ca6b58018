//! State machine that steps through rule-guarded transitions on events.

use crate::core::{
    Event, FiredTransition, Rules, State, StateId, Transition, TransitionHistory,
};
use crate::engine::error::{MachineError, TracedRunError};
use crate::store::GraphStore;
use chrono::Utc;
use std::fmt::Display;
use tracing::{debug, info, warn};

/// Labeled-transition state machine over a multigraph of states.
///
/// # Example
///
/// ```rust
/// use fsmgraph::builder::eq;
/// use fsmgraph::{Machine, Value};
///
/// let mut machine: Machine<Value> = Machine::new();
/// let locked = machine.initialize("locked".into());
/// let unlocked = machine.define_state("unlocked".into());
///
/// machine.connect(&locked, &unlocked, eq("coin")).unwrap();
/// machine.connect(&unlocked, &locked, eq("push")).unwrap();
///
/// let last = machine.run(["coin", "push"], false).unwrap();
/// assert_eq!(last, locked);
/// ```
#[derive(Clone, Debug)]
pub struct Machine<V> {
    current: Option<StateId>,
    store: GraphStore<V>,
    history: TransitionHistory,
}

impl<V> Default for Machine<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Machine<V> {
    /// Create an empty machine with no current state.
    pub fn new() -> Self {
        Self {
            current: None,
            store: GraphStore::new(),
            history: TransitionHistory::new(),
        }
    }

    /// Create a state and make it the current state.
    ///
    /// Calling this again moves `current` to a fresh state; states created
    /// earlier stay in the graph.
    pub fn initialize(&mut self, value: V) -> State<V>
    where
        V: Clone,
    {
        let state = self.store.add_state(value);
        self.current = Some(state.id());
        debug!(state_id = %state.id(), "machine initialized");
        state
    }

    /// Create a state without touching the current state.
    pub fn define_state(&mut self, value: V) -> State<V>
    where
        V: Clone,
    {
        self.store.add_state(value)
    }

    /// Register a transition `from -> to` guarded by `rules`.
    ///
    /// Self-loops are allowed and model events that are consumed without
    /// moving. Operators are not checked until the transition is evaluated.
    /// Both handles must have been issued by this machine.
    pub fn connect(
        &mut self,
        from: &State<V>,
        to: &State<V>,
        rules: Rules,
    ) -> Result<Transition, MachineError> {
        for state in [from, to] {
            if !self.store.owns(state) {
                return Err(MachineError::UnknownState { id: state.id() });
            }
        }
        self.store.add_transition(from.id(), to.id(), rules)
    }

    /// Evaluate the transitions leaving the current state against `event`.
    ///
    /// Transitions are tried in the order they were connected and the first
    /// match moves the machine. An event nothing matches is ignored. A rule
    /// with an unsupported operator stops evaluation with an error, even if
    /// a later transition would have matched; the current state is left as is.
    pub fn fire_event(&mut self, event: impl Into<Event>) -> Result<(), MachineError> {
        let event = event.into();
        let current = self.current.ok_or(MachineError::Uninitialized)?;

        let Some(transition) = self.select(current, &event)? else {
            debug!(state_id = %current, %event, "no transition matched, event ignored");
            return Ok(());
        };

        let (id, to) = (transition.id, transition.to);
        info!(transition_id = %id, from = %current, %to, %event, "transition fired");

        self.history.push(FiredTransition {
            transition: id,
            from: current,
            to,
            event,
            timestamp: Utc::now(),
        });
        self.current = Some(to);
        Ok(())
    }

    /// Feed `events` to [`fire_event`](Self::fire_event) in order and return
    /// the final current state.
    ///
    /// Stops at the first failing event and returns its error. With `trace`
    /// set, the rendered current state is reported through `tracing` after
    /// every processed event.
    pub fn run<I>(&mut self, events: I, trace: bool) -> Result<State<V>, MachineError>
    where
        I: IntoIterator,
        I::Item: Into<Event>,
        V: Clone + Display,
    {
        self.run_with(events, |state| {
            if trace {
                info!(state_id = %state.id(), value = %state, "current state");
            }
        })
    }

    /// Like [`run`](Self::run), but hands the state reached after each
    /// successful event to `on_step` before the next event is fired.
    pub fn run_with<I, F>(&mut self, events: I, mut on_step: F) -> Result<State<V>, MachineError>
    where
        I: IntoIterator,
        I::Item: Into<Event>,
        F: FnMut(&State<V>),
        V: Clone,
    {
        for event in events {
            self.fire_event(event)?;
            on_step(self.current_state()?);
        }
        self.current_state().cloned()
    }

    /// Like [`run`](Self::run), but returns the state reached after each event.
    ///
    /// On failure the states reached before the failing event travel with
    /// the error in [`TracedRunError::completed`].
    pub fn run_traced<I>(&mut self, events: I) -> Result<Vec<State<V>>, TracedRunError<V>>
    where
        I: IntoIterator,
        I::Item: Into<Event>,
        V: Clone,
    {
        let mut completed = Vec::new();
        match self.run_with(events, |state| completed.push(state.clone())) {
            Ok(_) => Ok(completed),
            Err(source) => Err(TracedRunError { source, completed }),
        }
    }

    /// The current state, if the machine has been initialized.
    pub fn current(&self) -> Option<&State<V>> {
        self.current.and_then(|id| self.store.state(id))
    }

    pub fn is_initialized(&self) -> bool {
        self.current.is_some()
    }

    pub fn store(&self) -> &GraphStore<V> {
        &self.store
    }

    /// Transitions fired so far, oldest first.
    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    /// Hand over the recorded history and start a fresh one.
    ///
    /// Long-running drivers call this periodically to keep memory bounded.
    pub fn take_history(&mut self) -> TransitionHistory {
        std::mem::take(&mut self.history)
    }

    fn current_state(&self) -> Result<&State<V>, MachineError> {
        self.current().ok_or(MachineError::Uninitialized)
    }

    fn select(
        &self,
        current: StateId,
        event: &Event,
    ) -> Result<Option<&Transition>, MachineError> {
        for transition in self.store.outgoing(current) {
            match transition.accepts(event) {
                Ok(true) => return Ok(Some(transition)),
                Ok(false) => {}
                Err(err) => {
                    warn!(transition_id = %transition.id, state_id = %current, %event, error = %err, "evaluation aborted");
                    return Err(err.into());
                }
            }
        }
        Ok(None)
    }
}


#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::builder::eq;
    use crate::core::Value;

    fn turnstile() -> (Machine<Value>, State<Value>, State<Value>) {
        let mut machine = Machine::new();
        let locked = machine.initialize(Value::from("locked"));
        let unlocked = machine.define_state(Value::from("unlocked"));

        machine.connect(&locked, &unlocked, eq("coin")).unwrap();
        machine.connect(&unlocked, &locked, eq("push")).unwrap();
        machine.connect(&locked, &locked, eq("push")).unwrap();
        machine.connect(&unlocked, &unlocked, eq("coin")).unwrap();

        (machine, locked, unlocked)
    }

    #[test]
    fn coin_then_push_returns_to_locked() {
        let (mut machine, locked, unlocked) = turnstile();

        let trace = machine.run_traced(["coin", "push"]).unwrap();

        assert_eq!(trace, vec![unlocked.clone(), locked.clone()]);
        assert_eq!(machine.current(), Some(&locked));

        let path = machine.history().path();
        assert_eq!(path, vec![locked.id(), unlocked.id(), locked.id()]);
    }

    #[test]
    fn run_matches_folded_fire_event() {
        let events = ["coin", "coin", "push", "push", "jump", "coin"];

        let (mut folded, _, _) = turnstile();
        for event in events {
            folded.fire_event(event).unwrap();
        }

        let (mut ran, _, _) = turnstile();
        let last = ran.run(events, false).unwrap();

        assert_eq!(Some(&last), folded.current());
        assert_eq!(ran.history().path(), folded.history().path());
    }
}
