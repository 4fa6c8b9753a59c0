//! Shared test harness for strata-shacl integration tests.

#![allow(dead_code)]

#[path = "../../../strata-reasoner/tests/support/span_capture.rs"]
pub mod span_capture;

use std::sync::Arc;
use strata_core::{Term, Triple};
use strata_reasoner::RuleCatalog;
use strata_shacl::ShapeValidator;
use strata_vocab::{rdf, rdfs};

pub fn iri(name: &str) -> Term {
    Term::iri(name)
}

pub fn rdf_type() -> Term {
    Term::iri(rdf::TYPE)
}

pub fn sub_class_of() -> Term {
    Term::iri(rdfs::SUB_CLASS_OF)
}

/// Number triples `g1`, `g2`, ... in order.
pub fn graph(triples: Vec<(Term, Term, Term)>) -> Vec<Triple> {
    triples
        .into_iter()
        .enumerate()
        .map(|(i, (s, p, o))| Triple::new(format!("g{}", i + 1), s, p, o))
        .collect()
}

/// Validator backed by the standard rule catalog.
pub fn validator() -> ShapeValidator {
    ShapeValidator::new(Arc::new(RuleCatalog::standard()))
}
