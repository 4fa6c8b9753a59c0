//! Property RDFS rules (rdfs2, rdfs3, rdfs5, rdfs7).
//!
//! Each rule scans the fact set in insertion order and emits one
//! [`Inference`] per match whose conclusion is not yet a known fact.
//! Justifications list the two matched triples in pattern order.

use crate::types::Inference;

use super::fact_set::FactSet;
use super::util::{domain, is_class_term, range, rdf_type, sub_property_of};

/// Apply rdfs2 (domain propagation)
///
/// Rule: p(x, y), domain(p, C) → type(x, C)
pub fn apply_domain_rule(facts: &FactSet) -> Vec<Inference> {
    let rdf_type = rdf_type();
    let domain = domain();
    let mut out = Vec::new();

    for data in facts.iter() {
        if !is_class_term(&data.subject) {
            continue;
        }
        for decl in facts.get_by_ps(&domain, &data.predicate) {
            let class = &decl.object;
            if !is_class_term(class) || facts.contains(&data.subject, &rdf_type, class) {
                continue;
            }
            out.push(Inference::new(
                data.subject.clone(),
                rdf_type.clone(),
                class.clone(),
                &data.id,
                &decl.id,
            ));
        }
    }
    out
}

/// Apply rdfs3 (range propagation)
///
/// Rule: p(x, y), range(p, C) → type(y, C)
///
/// Literal objects are skipped: a literal never becomes a subject.
pub fn apply_range_rule(facts: &FactSet) -> Vec<Inference> {
    let rdf_type = rdf_type();
    let range = range();
    let mut out = Vec::new();

    for data in facts.iter() {
        if !is_class_term(&data.object) {
            continue;
        }
        for decl in facts.get_by_ps(&range, &data.predicate) {
            let class = &decl.object;
            if !is_class_term(class) || facts.contains(&data.object, &rdf_type, class) {
                continue;
            }
            out.push(Inference::new(
                data.object.clone(),
                rdf_type.clone(),
                class.clone(),
                &data.id,
                &decl.id,
            ));
        }
    }
    out
}

/// Apply rdfs5 (subPropertyOf transitivity)
///
/// Rule: subPropertyOf(p, q), subPropertyOf(q, r) → subPropertyOf(p, r)
pub fn apply_sub_property_transitivity_rule(facts: &FactSet) -> Vec<Inference> {
    let sub_property_of = sub_property_of();
    let mut out = Vec::new();

    for first in facts.get_by_p(&sub_property_of) {
        for second in facts.get_by_ps(&sub_property_of, &first.object) {
            let (p, r) = (&first.subject, &second.object);
            if !is_class_term(r) || facts.contains(p, &sub_property_of, r) {
                continue;
            }
            out.push(Inference::new(
                p.clone(),
                sub_property_of.clone(),
                r.clone(),
                &first.id,
                &second.id,
            ));
        }
    }
    out
}

/// Apply rdfs7 (subPropertyOf entailment)
///
/// Rule: p(x, y), subPropertyOf(p, q) → q(x, y)
///
/// Only IRIs can become predicates, so non-IRI super-properties are skipped.
pub fn apply_sub_property_rule(facts: &FactSet) -> Vec<Inference> {
    let sub_property_of = sub_property_of();
    let mut out = Vec::new();

    for data in facts.iter() {
        for decl in facts.get_by_ps(&sub_property_of, &data.predicate) {
            let q = &decl.object;
            if !q.is_iri() || facts.contains(&data.subject, q, &data.object) {
                continue;
            }
            out.push(Inference::new(
                data.subject.clone(),
                q.clone(),
                data.object.clone(),
                &data.id,
                &decl.id,
            ));
        }
    }
    out
}
