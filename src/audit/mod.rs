//! Static audit of a machine definition.
//!
//! Firing an event only reports the first unsupported operator it happens to
//! evaluate. Auditing walks the whole graph up front and uses Stillwater's
//! `Validation` to accumulate every violation in one pass. It is opt-in and
//! does not change how events are fired.
//!
//! # Example
//!
//! ```rust
//! use fsmgraph::audit::{audit, DefinitionViolation};
//! use fsmgraph::builder::{eq, rule};
//! use fsmgraph::{Machine, Operator};
//! use stillwater::validation::Validation;
//!
//! let mut machine = Machine::new();
//! let locked = machine.initialize("locked");
//! let unlocked = machine.define_state("unlocked");
//! machine.connect(&locked, &unlocked, rule(Operator::from_tag("eqs"), "coin")).unwrap();
//! machine.connect(&unlocked, &locked, eq("push")).unwrap();
//!
//! match audit(&machine) {
//!     Validation::Failure(violations) => assert_eq!(violations.len(), 1),
//!     Validation::Success(_) => panic!("expected a violation"),
//! }
//! ```

pub mod violations;

pub use violations::DefinitionViolation;

use crate::core::Operator;
use crate::engine::Machine;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check a machine definition, accumulating ALL violations.
///
/// Returns `Validation::Success(())` if the machine is initialized and every
/// rule uses an implemented operator.
pub fn audit<V>(machine: &Machine<V>) -> Validation<(), NonEmptyVec<DefinitionViolation>> {
    let initialized = if machine.is_initialized() {
        Validation::success(())
    } else {
        Validation::fail(DefinitionViolation::NotInitialized)
    };
    let mut checks: Vec<Validation<(), NonEmptyVec<DefinitionViolation>>> = vec![initialized];

    for transition in machine.store().transitions() {
        for rule in &transition.rules {
            let check = match &rule.operator {
                Operator::Equals => Validation::success(()),
                Operator::Unrecognized(tag) => {
                    Validation::fail(DefinitionViolation::UnsupportedOperator {
                        transition: transition.id,
                        operator: tag.clone(),
                    })
                }
            };
            checks.push(check);
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{eq, RulesBuilder};
    use crate::core::TransitionId;

    #[test]
    fn audit_accumulates_all_violations() {
        let mut machine = Machine::new();
        let a = machine.define_state("a");
        let b = machine.define_state("b");
        let rules = RulesBuilder::new()
            .eq("go")
            .tagged("gt", "3")
            .tagged("lt", "9")
            .build()
            .unwrap();
        machine.connect(&a, &b, rules).unwrap();

        match audit(&machine) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, DefinitionViolation::NotInitialized)));
                assert!(errors.iter().any(|e| *e
                    == DefinitionViolation::UnsupportedOperator {
                        transition: TransitionId(1),
                        operator: "lt".to_string(),
                    }));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn audit_succeeds_for_valid_machine() {
        let mut machine = Machine::new();
        let a = machine.initialize("a");
        let b = machine.define_state("b");
        machine.connect(&a, &b, eq("go")).unwrap();
        machine.connect(&b, &b, eq("go")).unwrap();

        assert!(audit(&machine).is_success());
    }

    #[test]
    fn audit_does_not_change_firing() {
        let mut machine = Machine::new();
        let a = machine.initialize("a");
        let b = machine.define_state("b");
        machine.connect(&a, &b, eq("go")).unwrap();
        machine
            .connect(&b, &a, RulesBuilder::new().tagged("ne", "x").build().unwrap())
            .unwrap();

        assert!(audit(&machine).is_failure());
        assert!(machine.fire_event("go").is_ok());
        assert_eq!(machine.current(), Some(&b));
    }
}
