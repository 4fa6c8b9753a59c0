//! Tests for property rules.
//!
//! This module tests:
//! - Domain rule (rdfs2)
//! - Range rule (rdfs3)
//! - SubPropertyOf transitivity (rdfs5)
//! - SubPropertyOf entailment (rdfs7)

use super::*;

#[test]
fn test_domain_rule() {
    // rdfs2: enrolledIn(alice, CS101), domain(enrolledIn, Student) → type(alice, Student)
    let facts = FactSet::from_triples(&[
        fact("t1", iri("enrolledIn"), domain(), iri("Student")),
        fact("t2", iri("alice"), iri("enrolledIn"), iri("CS101")),
    ]);

    let out = apply_domain_rule(&facts);
    assert_eq!(out.len(), 1);
    assert!(out[0].triple.matches(&iri("alice"), &rdf_type(), &iri("Student")));

    // Data triple first, then the domain declaration
    let sources: Vec<_> = out[0].source_triple_ids.iter().map(|id| id.as_str()).collect();
    assert_eq!(sources, vec!["t2", "t1"]);
}

#[test]
fn test_domain_rule_skips_known_facts() {
    let facts = FactSet::from_triples(&[
        fact("t1", iri("enrolledIn"), domain(), iri("Student")),
        fact("t2", iri("alice"), iri("enrolledIn"), iri("CS101")),
        fact("t3", iri("alice"), rdf_type(), iri("Student")),
    ]);
    assert!(apply_domain_rule(&facts).is_empty());
}

#[test]
fn test_domain_rule_multiple_domains() {
    let facts = FactSet::from_triples(&[
        fact("t1", iri("teaches"), domain(), iri("Instructor")),
        fact("t2", iri("teaches"), domain(), iri("Employee")),
        fact("t3", iri("bob"), iri("teaches"), iri("CS101")),
    ]);
    let out = apply_domain_rule(&facts);
    assert_eq!(
        conclusions(&out),
        vec![
            format!("bob|{}|Instructor", strata_vocab::rdf::TYPE),
            format!("bob|{}|Employee", strata_vocab::rdf::TYPE),
        ]
    );
}

#[test]
fn test_range_rule() {
    // rdfs3: advisor(alice, bob), range(advisor, Professor) → type(bob, Professor)
    let facts = FactSet::from_triples(&[
        fact("t1", iri("advisor"), range(), iri("Professor")),
        fact("t2", iri("alice"), iri("advisor"), iri("bob")),
    ]);

    let out = apply_range_rule(&facts);
    assert_eq!(out.len(), 1);
    assert!(out[0].triple.matches(&iri("bob"), &rdf_type(), &iri("Professor")));
    let sources: Vec<_> = out[0].source_triple_ids.iter().map(|id| id.as_str()).collect();
    assert_eq!(sources, vec!["t2", "t1"]);
}

#[test]
fn test_range_rule_skips_literal_objects() {
    // A literal never becomes a subject
    let facts = FactSet::from_triples(&[
        fact("t1", iri("name"), range(), iri("Name")),
        fact("t2", iri("alice"), iri("name"), Term::string("Alice")),
    ]);
    assert!(apply_range_rule(&facts).is_empty());
}

#[test]
fn test_sub_property_transitivity_rule() {
    // rdfs5: sp(hasMother, hasParent), sp(hasParent, hasAncestor) → sp(hasMother, hasAncestor)
    let facts = FactSet::from_triples(&[
        fact("t1", iri("hasMother"), sub_property_of(), iri("hasParent")),
        fact("t2", iri("hasParent"), sub_property_of(), iri("hasAncestor")),
    ]);

    let out = apply_sub_property_transitivity_rule(&facts);
    assert_eq!(out.len(), 1);
    assert!(out[0]
        .triple
        .matches(&iri("hasMother"), &sub_property_of(), &iri("hasAncestor")));
    let sources: Vec<_> = out[0].source_triple_ids.iter().map(|id| id.as_str()).collect();
    assert_eq!(sources, vec!["t1", "t2"]);
}

#[test]
fn test_sub_property_rule() {
    // rdfs7: hasMother(alice, carol), sp(hasMother, hasParent) → hasParent(alice, carol)
    let facts = FactSet::from_triples(&[
        fact("t1", iri("hasMother"), sub_property_of(), iri("hasParent")),
        fact("t2", iri("alice"), iri("hasMother"), iri("carol")),
    ]);

    let out = apply_sub_property_rule(&facts);
    assert_eq!(out.len(), 1);
    assert!(out[0]
        .triple
        .matches(&iri("alice"), &iri("hasParent"), &iri("carol")));
    let sources: Vec<_> = out[0].source_triple_ids.iter().map(|id| id.as_str()).collect();
    assert_eq!(sources, vec!["t2", "t1"]);
}

#[test]
fn test_sub_property_rule_keeps_literal_objects() {
    let facts = FactSet::from_triples(&[
        fact("t1", iri("nickname"), sub_property_of(), iri("label")),
        fact("t2", iri("alice"), iri("nickname"), Term::string("Al")),
    ]);
    let out = apply_sub_property_rule(&facts);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].triple.object, Term::string("Al"));
}

#[test]
fn test_sub_property_rule_skips_non_iri_super_property() {
    // Only IRIs can become predicates
    let facts = FactSet::from_triples(&[
        fact("t1", iri("p"), sub_property_of(), Term::blank("b0")),
        fact("t2", iri("alice"), iri("p"), iri("x")),
    ]);
    assert!(apply_sub_property_rule(&facts).is_empty());
}
