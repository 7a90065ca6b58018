//! History of fired transitions.
//!
//! Tracks the transitions a machine has taken. `record` is the pure form
//! that returns a new history; `push` appends in place.

use super::rule::Event;
use super::state::StateId;
use super::transition::TransitionId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single fired transition.
///
/// # Example
///
/// ```rust
/// use fsmgraph::core::{Event, FiredTransition, StateId, TransitionId};
/// use chrono::Utc;
///
/// let fired = FiredTransition {
///     transition: TransitionId(1),
///     from: StateId(0),
///     to: StateId(1),
///     event: Event::from("coin"),
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FiredTransition {
    /// The transition that matched
    pub transition: TransitionId,
    /// The state being transitioned from
    pub from: StateId,
    /// The state being transitioned to
    pub to: StateId,
    /// The event that triggered the move
    pub event: Event,
    /// When the transition fired
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of fired transitions.
///
/// The `record` method returns a new history with the transition added and
/// leaves the original untouched; `push` appends in place. Self-loop firings
/// are recorded like any other successful match.
///
/// # Example
///
/// ```rust
/// use fsmgraph::core::{Event, FiredTransition, StateId, TransitionHistory, TransitionId};
/// use chrono::Utc;
///
/// let history = TransitionHistory::new();
///
/// let history = history.record(FiredTransition {
///     transition: TransitionId(1),
///     from: StateId(0),
///     to: StateId(1),
///     event: Event::from("coin"),
///     timestamp: Utc::now(),
/// });
///
/// let history = history.record(FiredTransition {
///     transition: TransitionId(2),
///     from: StateId(1),
///     to: StateId(0),
///     event: Event::from("push"),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.path(), vec![StateId(0), StateId(1), StateId(0)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionHistory {
    entries: Vec<FiredTransition>,
}

impl TransitionHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a fired transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the entry added.
    pub fn record(&self, fired: FiredTransition) -> Self {
        let mut history = self.clone();
        history.push(fired);
        history
    }

    /// Append a fired transition in place.
    ///
    /// Amortized constant time; the engine uses this on every firing.
    pub fn push(&mut self, fired: FiredTransition) {
        self.entries.push(fired);
    }

    /// Drop every recorded entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get the path of states traversed.
    ///
    /// Returns the source of the first entry, then the target of each entry.
    pub fn path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.entries.len() + 1);
        if let Some(first) = self.entries.first() {
            path.push(first.from);
        }
        path.extend(self.entries.iter().map(|entry| entry.to));
        path
    }

    /// Total duration from the first to the last recorded entry.
    ///
    /// Returns `None` if nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.first()?, self.entries.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn entries(&self) -> &[FiredTransition] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fired(id: u64, from: u64, to: u64, event: &str) -> FiredTransition {
        FiredTransition {
            transition: TransitionId(id),
            from: StateId(from),
            to: StateId(to),
            event: Event::from(event),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = TransitionHistory::new();
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = TransitionHistory::new();
        let new_history = history.record(fired(1, 0, 1, "coin"));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn push_appends_in_place() {
        let mut history = TransitionHistory::new();
        history.push(fired(1, 0, 1, "coin"));
        history.push(fired(2, 1, 0, "push"));

        assert_eq!(history.path(), vec![StateId(0), StateId(1), StateId(0)]);

        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn path_includes_self_loops() {
        let history = TransitionHistory::new()
            .record(fired(3, 0, 0, "push"))
            .record(fired(1, 0, 1, "coin"));

        assert_eq!(history.path(), vec![StateId(0), StateId(0), StateId(1)]);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = TransitionHistory::new().record(FiredTransition {
            timestamp: start,
            ..fired(1, 0, 1, "coin")
        });
        let history = history.record(FiredTransition {
            timestamp: start + chrono::Duration::milliseconds(250),
            ..fired(2, 1, 0, "push")
        });

        assert_eq!(history.duration(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = TransitionHistory::new().record(fired(1, 0, 1, "coin"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: TransitionHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
