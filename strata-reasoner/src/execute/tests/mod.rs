//! Tests for the execute module.
//!
//! This module is organized by rule category:
//! - `data_structure_tests` - FactSet tests
//! - `property_rule_tests` - Property rules (rdfs2, rdfs3, rdfs5, rdfs7)
//! - `class_rule_tests` - Class hierarchy rules (rdfs9, rdfs11)

mod property_rule_tests;

use super::util::{domain, range, rdf_type, sub_class_of, sub_property_of};
use super::*;
use strata_core::{Term, Triple};

/// Create a test IRI term.
pub(crate) fn iri(name: &str) -> Term {
    Term::iri(name)
}

/// Create an asserted triple with an explicit id.
pub(crate) fn fact(id: &str, s: Term, p: Term, o: Term) -> Triple {
    Triple::new(id, s, p, o)
}

/// Collect the derived triple ids of a rule's output.
pub(crate) fn conclusions(inferences: &[crate::types::Inference]) -> Vec<String> {
    inferences
        .iter()
        .map(|inf| inf.triple.id.to_string())
        .collect()
}
