//! Builder for constructing rule sets.

use crate::builder::error::BuildError;
use crate::core::{Event, Operator, Rule, Rules};

/// Builder for constructing rule sets with a fluent API.
///
/// Rules are evaluated in the order they are added.
#[derive(Clone, Debug, Default)]
pub struct RulesBuilder {
    rules: Vec<Rule>,
}

impl RulesBuilder {
    /// Create a new rule set builder.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Match when the event equals `event`.
    pub fn eq(self, event: impl Into<Event>) -> Self {
        self.rule(Operator::Equals, event)
    }

    /// Add a rule with an explicit operator.
    pub fn rule(mut self, operator: Operator, event: impl Into<Event>) -> Self {
        self.rules.push(Rule::new(operator, event));
        self
    }

    /// Add a rule using an operator tag such as `"eq"`.
    pub fn tagged(self, tag: &str, event: impl Into<Event>) -> Self {
        self.rule(Operator::from_tag(tag), event)
    }

    /// Build the rule set.
    pub fn build(self) -> Result<Rules, BuildError> {
        Rules::from_vec(self.rules).ok_or(BuildError::EmptyRules)
    }
}
