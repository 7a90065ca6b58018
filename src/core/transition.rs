//! Rule-guarded edges between states.

use super::error::RuleError;
use super::rule::{Event, Rules};
use super::state::StateId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a transition within one graph store.
///
/// Allocated sequentially starting at 1 and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransitionId(pub u64);

impl fmt::Display for TransitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed edge `from -> to` guarded by a non-empty rule set.
///
/// Several transitions may connect the same ordered pair of states, and a
/// transition may loop back to its own source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub id: TransitionId,
    pub from: StateId,
    pub to: StateId,
    pub rules: Rules,
}

impl Transition {
    /// Check whether this transition fires for `event`.
    pub fn accepts(&self, event: &Event) -> Result<bool, RuleError> {
        self.rules.evaluate(event)
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Operator, Rule};

    fn transition(from: u64, to: u64, operator: Operator, event: &str) -> Transition {
        Transition {
            id: TransitionId(1),
            from: StateId(from),
            to: StateId(to),
            rules: Rules::single(Rule::new(operator, event)),
        }
    }

    #[test]
    fn accepts_matching_event() {
        let t = transition(0, 1, Operator::Equals, "coin");

        assert!(t.accepts(&Event::from("coin")).unwrap());
        assert!(!t.accepts(&Event::from("push")).unwrap());
    }

    #[test]
    fn accepts_propagates_unsupported_operator() {
        let t = transition(0, 1, Operator::from_tag("ne"), "coin");
        assert!(t.accepts(&Event::from("push")).is_err());
    }

    #[test]
    fn self_loop_is_detected() {
        assert!(transition(2, 2, Operator::Equals, "push").is_self_loop());
        assert!(!transition(0, 1, Operator::Equals, "push").is_self_loop());
    }
}
