//! Helpers for constructing transition rules.
//!
//! Most transitions carry a single equality rule, so [`eq`] covers the common
//! case. [`rule`] accepts any operator, and [`RulesBuilder`] assembles rule
//! sets with several entries.

pub mod error;
pub mod rules;

pub use error::BuildError;
pub use rules::RulesBuilder;

use crate::core::{Event, Operator, Rule, Rules};

/// Create a single-entry rule set.
///
/// # Example
///
/// ```
/// use fsmgraph::builder::rule;
/// use fsmgraph::Operator;
///
/// let rules = rule(Operator::from_tag("eq"), "coin");
/// assert_eq!(rules.len(), 1);
/// ```
pub fn rule(operator: Operator, event: impl Into<Event>) -> Rules {
    Rules::single(Rule::new(operator, event))
}

/// Create a rule set that matches when the event equals `event`.
///
/// # Example
///
/// ```
/// use fsmgraph::builder::eq;
/// use fsmgraph::Event;
///
/// let rules = eq("push");
/// assert!(rules.evaluate(&Event::from("push")).unwrap());
/// ```
pub fn eq(event: impl Into<Event>) -> Rules {
    rule(Operator::Equals, event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eq_builds_equals_rule() {
        let rules = eq("coin");
        let only = rules.iter().next().unwrap();

        assert_eq!(only.operator, Operator::Equals);
        assert_eq!(only.event, Event::from("coin"));
    }

    #[test]
    fn rule_keeps_unrecognized_operator() {
        let rules = rule(Operator::from_tag("eqs"), "coin");
        assert!(rules.evaluate(&Event::from("coin")).is_err());
    }
}
