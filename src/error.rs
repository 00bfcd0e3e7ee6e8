//! Error types

use std::fmt;

/// Error returned when a rule list violates the rule table ordering invariants
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum RuleError {
    /// The rule at `index` has an empty match pattern.
    EmptyPattern { index: usize },
    /// The rules at `first` and `second` have the same match pattern.
    DuplicatePattern { first: usize, second: usize },
    /// The pattern of the rule at `shorter` is a strict prefix of the pattern of the
    /// later rule at `longer`, so the longer rule can never match.
    ShadowedPattern { shorter: usize, longer: usize },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::EmptyPattern { index } => write!(f, "rule {} has an empty pattern", index),
            RuleError::DuplicatePattern { first, second } => {
                write!(f, "rules {} and {} have the same pattern", first, second)
            }
            RuleError::ShadowedPattern { shorter, longer } => write!(
                f,
                "rule {} shadows rule {}: a prefix must come after the longer pattern",
                shorter, longer
            ),
        }
    }
}

impl std::error::Error for RuleError {}
