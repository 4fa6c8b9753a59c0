//! Shared test harness for strata-reasoner integration tests.

// Helpers are used by some integration test crates but not others.
#![allow(dead_code)]

pub mod span_capture;

use std::sync::Arc;
use strata_core::{MemoryStore, Term};
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

pub fn sub_property_of() -> Term {
    Term::iri(rdfs::SUB_PROPERTY_OF)
}

pub fn domain() -> Term {
    Term::iri(rdfs::DOMAIN)
}

pub fn range() -> Term {
    Term::iri(rdfs::RANGE)
}

/// Build a store from `(s, p, o)` terms, ids `t1`, `t2`, ... in order.
pub fn store_of(triples: Vec<(Term, Term, Term)>) -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    for (s, p, o) in triples {
        store.insert(s, p, o);
    }
    Arc::new(store)
}
