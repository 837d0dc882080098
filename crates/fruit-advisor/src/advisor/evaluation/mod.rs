mod explanation;
mod rules;

pub use explanation::{benefits, explain};
pub use rules::RuleViolation;

use super::domain::{Nutrition, Profile};
use tracing::debug;

/// Outcome of running the fixed rule set against one catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleVerdict {
    Accepted,
    Rejected(RuleViolation),
}

impl RuleVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, RuleVerdict::Accepted)
    }
}

/// Evaluate the rules in their fixed order, reporting the first failure.
pub fn evaluate(fruit: &Nutrition, profile: &Profile) -> RuleVerdict {
    match rules::check_profile(fruit, profile) {
        Ok(()) => {
            debug!(fruit = fruit.name(), "accepted");
            RuleVerdict::Accepted
        }
        Err(violation) => {
            debug!(fruit = fruit.name(), rule = %violation.summary(), "rejected");
            RuleVerdict::Rejected(violation)
        }
    }
}

pub fn passes_rules(fruit: &Nutrition, profile: &Profile) -> bool {
    evaluate(fruit, profile).is_accepted()
}
