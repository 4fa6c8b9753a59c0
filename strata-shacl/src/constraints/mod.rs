//! SHACL constraint types and validators
//!
//! This module defines the constraint types supported by the validator
//! and provides validation logic for each constraint type.

pub mod cardinality;
pub mod datatype;

use strata_core::Term;
use strata_vocab::{shacl_names, xsd};

/// A SHACL constraint that can be validated against values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    // Cardinality constraints
    /// sh:minCount - minimum number of values
    MinCount(usize),
    /// sh:maxCount - maximum number of values
    MaxCount(usize),

    // Value type constraints
    /// sh:datatype - values must be literals of this datatype IRI
    Datatype(String),
}

impl Constraint {
    /// Get a human-readable description of this constraint
    pub fn description(&self) -> String {
        match self {
            Constraint::MinCount(n) => format!("sh:minCount {}", n),
            Constraint::MaxCount(n) => format!("sh:maxCount {}", n),
            Constraint::Datatype(dt) => format!(
                "sh:datatype {}",
                xsd::datatype_local_name(dt).unwrap_or(dt)
            ),
        }
    }

    /// Constraint component name reported as a violation's source
    pub fn component(&self) -> &'static str {
        match self {
            Constraint::MinCount(_) => shacl_names::MIN_COUNT,
            Constraint::MaxCount(_) => shacl_names::MAX_COUNT,
            Constraint::Datatype(_) => shacl_names::DATATYPE,
        }
    }

    /// Validate the full value set of one property on one focus node
    ///
    /// Cardinality yields at most one violation; datatype yields one per
    /// offending value.
    pub fn validate(&self, values: &[&Term]) -> Vec<ConstraintViolation> {
        match self {
            Constraint::MinCount(min) => {
                cardinality::validate_min_count(values, *min).into_iter().collect()
            }
            Constraint::MaxCount(max) => {
                cardinality::validate_max_count(values, *max).into_iter().collect()
            }
            Constraint::Datatype(dt) => values
                .iter()
                .filter_map(|value| datatype::validate_datatype(value, dt))
                .collect(),
        }
    }
}

/// Result of validating a single constraint
#[derive(Debug, Clone)]
pub struct ConstraintViolation {
    /// The constraint that was violated
    pub constraint: Constraint,
    /// The value that violated the constraint (if applicable)
    pub value: Option<Term>,
    /// Human-readable message about the violation
    pub message: String,
}
