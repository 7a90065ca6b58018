//! Trigger rules that guard transitions.
//!
//! A rule pairs a comparison [`Operator`] with the [`Event`] it compares
//! against. Rules are evaluated against incoming events when the machine
//! fires; definition never inspects the operator, so an unrecognized
//! operator is only reported once a transition carrying it is evaluated.

use super::error::{EmptyRulesError, RuleError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque text token supplied by the driver at each step.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event(String);

impl Event {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Event {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl From<String> for Event {
    fn from(token: String) -> Self {
        Self(token)
    }
}

/// Comparison kind used to decide whether a rule matches an event.
///
/// `Equals` is the only implemented comparison. Tags that do not name a
/// known operator are kept as `Unrecognized` so a machine can still be
/// defined with them; evaluating such a rule fails.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Matches when the event equals the rule's comparison value.
    Equals,

    /// An operator tag with no implementation.
    Unrecognized(String),
}

impl Operator {
    /// Tag for [`Operator::Equals`].
    pub const EQ: &'static str = "eq";

    /// Resolve an operator from its textual tag.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fsmgraph::Operator;
    ///
    /// assert_eq!(Operator::from_tag("eq"), Operator::Equals);
    /// assert_eq!(
    ///     Operator::from_tag("gt"),
    ///     Operator::Unrecognized("gt".to_string())
    /// );
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            Self::EQ => Self::Equals,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::Equals => Self::EQ,
            Self::Unrecognized(tag) => tag.as_str(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A single trigger condition: an operator and its comparison event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub operator: Operator,
    pub event: Event,
}

impl Rule {
    pub fn new(operator: Operator, event: impl Into<Event>) -> Self {
        Self {
            operator,
            event: event.into(),
        }
    }

    /// Evaluate this rule against an incoming event.
    ///
    /// Returns `Ok(true)` on a match, `Ok(false)` otherwise, and
    /// [`RuleError::UnsupportedOperator`] if the operator has no
    /// implementation, whether or not the event would have matched.
    pub fn evaluate(&self, event: &Event) -> Result<bool, RuleError> {
        match &self.operator {
            Operator::Equals => Ok(self.event == *event),
            Operator::Unrecognized(tag) => Err(RuleError::UnsupportedOperator {
                operator: tag.clone(),
            }),
        }
    }
}

/// The non-empty, insertion-ordered set of rules guarding one transition.
///
/// A transition fires if any of its rules matches. Rules are evaluated in
/// the order they were added and the first match wins.
///
/// # Example
///
/// ```rust
/// use fsmgraph::{Event, Operator, Rule, Rules};
///
/// let rules = Rules::single(Rule::new(Operator::Equals, "coin"))
///     .and(Rule::new(Operator::Equals, "token"));
///
/// assert_eq!(rules.len(), 2);
/// assert_eq!(rules.evaluate(&Event::from("token")).unwrap(), true);
/// assert_eq!(rules.evaluate(&Event::from("push")).unwrap(), false);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rule>")]
pub struct Rules(Vec<Rule>);

impl Rules {
    pub fn single(rule: Rule) -> Self {
        Self(vec![rule])
    }

    /// Append another rule, evaluated after every rule already present.
    pub fn and(mut self, rule: Rule) -> Self {
        self.0.push(rule);
        self
    }

    /// Build from a list of rules, or `None` if the list is empty.
    pub fn from_vec(rules: Vec<Rule>) -> Option<Self> {
        if rules.is_empty() {
            None
        } else {
            Some(Self(rules))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a rule set holds at least one rule.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Evaluate every rule in order, stopping at the first match or the
    /// first unsupported operator.
    pub fn evaluate(&self, event: &Event) -> Result<bool, RuleError> {
        for rule in &self.0 {
            if rule.evaluate(event)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl TryFrom<Vec<Rule>> for Rules {
    type Error = EmptyRulesError;

    fn try_from(rules: Vec<Rule>) -> Result<Self, Self::Error> {
        Self::from_vec(rules).ok_or(EmptyRulesError)
    }
}

impl<'a> IntoIterator for &'a Rules {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equals_matches_identical_event() {
        let rule = Rule::new(Operator::Equals, "coin");

        assert!(rule.evaluate(&Event::from("coin")).unwrap());
        assert!(!rule.evaluate(&Event::from("push")).unwrap());
    }

    #[test]
    fn equals_is_case_sensitive() {
        let rule = Rule::new(Operator::Equals, "coin");
        assert!(!rule.evaluate(&Event::from("Coin")).unwrap());
    }

    #[test]
    fn unrecognized_operator_fails_even_when_event_matches() {
        let rule = Rule::new(Operator::from_tag("eqs"), "coin");

        let err = rule.evaluate(&Event::from("coin")).unwrap_err();
        assert!(matches!(
            err,
            RuleError::UnsupportedOperator { ref operator } if operator == "eqs"
        ));
    }

    #[test]
    fn operator_tag_roundtrips() {
        assert_eq!(Operator::from_tag(Operator::Equals.tag()), Operator::Equals);
        assert_eq!(Operator::from_tag("lt").tag(), "lt");
        assert_eq!(Operator::Equals.to_string(), "eq");
    }

    #[test]
    fn rules_evaluate_in_insertion_order() {
        let rules = Rules::single(Rule::new(Operator::Equals, "coin"))
            .and(Rule::new(Operator::from_tag("bogus"), "coin"));

        // First rule matches before the unsupported one is reached.
        assert!(rules.evaluate(&Event::from("coin")).unwrap());
        // No match on the first rule, so evaluation reaches the second.
        assert!(rules.evaluate(&Event::from("push")).is_err());
    }

    #[test]
    fn rules_from_empty_vec_is_none() {
        assert!(Rules::from_vec(Vec::new()).is_none());

        let rules = Rules::from_vec(vec![Rule::new(Operator::Equals, "a")]).unwrap();
        assert_eq!(rules.len(), 1);
        assert!(!rules.is_empty());
    }

    #[test]
    fn rules_serialize_correctly() {
        let rules = Rules::single(Rule::new(Operator::Equals, "coin"))
            .and(Rule::new(Operator::from_tag("gt"), "5"));

        let json = serde_json::to_string(&rules).unwrap();
        let deserialized: Rules = serde_json::from_str(&json).unwrap();
        assert_eq!(rules, deserialized);
    }

    #[test]
    fn try_from_empty_vec_fails() {
        assert_eq!(Rules::try_from(Vec::new()), Err(EmptyRulesError));
    }

    #[test]
    fn empty_rules_are_rejected_on_deserialize() {
        let result: Result<Rules, _> = serde_json::from_str("[]");
        assert!(result.is_err());
    }
}
