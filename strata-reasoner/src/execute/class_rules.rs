//! Class hierarchy RDFS rules (rdfs9, rdfs11).

use crate::types::Inference;

use super::fact_set::FactSet;
use super::util::{is_class_term, rdf_type, sub_class_of};

/// Apply rdfs9 (subClassOf entailment)
///
/// Rule: type(x, C1), subClassOf(C1, C2) → type(x, C2)
///
/// For each rdf:type assertion whose class has superclasses, derive type
/// facts for each direct superclass. Deeper superclasses arrive through
/// rdfs11 in a later pass.
pub fn apply_subclass_rule(facts: &FactSet) -> Vec<Inference> {
    let rdf_type = rdf_type();
    let sub_class_of = sub_class_of();
    let mut out = Vec::new();

    for typed in facts.get_by_p(&rdf_type) {
        for edge in facts.get_by_ps(&sub_class_of, &typed.object) {
            let c2 = &edge.object;
            if !is_class_term(c2) || facts.contains(&typed.subject, &rdf_type, c2) {
                continue;
            }
            out.push(Inference::new(
                typed.subject.clone(),
                rdf_type.clone(),
                c2.clone(),
                &typed.id,
                &edge.id,
            ));
        }
    }
    out
}

/// Apply rdfs11 (subClassOf transitivity)
///
/// Rule: subClassOf(C1, C2), subClassOf(C2, C3) → subClassOf(C1, C3)
pub fn apply_subclass_transitivity_rule(facts: &FactSet) -> Vec<Inference> {
    let sub_class_of = sub_class_of();
    let mut out = Vec::new();

    for first in facts.get_by_p(&sub_class_of) {
        for second in facts.get_by_ps(&sub_class_of, &first.object) {
            let (c1, c3) = (&first.subject, &second.object);
            if !is_class_term(c3) || facts.contains(c1, &sub_class_of, c3) {
                continue;
            }
            out.push(Inference::new(
                c1.clone(),
                sub_class_of.clone(),
                c3.clone(),
                &first.id,
                &second.id,
            ));
        }
    }
    out
}
