//! Shared helpers for rule implementations.
//!
//! - `rdf_type()`, `sub_class_of()`, ... - vocabulary terms used as join keys
//! - `is_class_term()` - position guard for class and property positions

use strata_core::Term;
use strata_vocab::{rdf, rdfs};

/// Term for the rdf:type predicate.
pub fn rdf_type() -> Term {
    Term::iri(rdf::TYPE)
}

/// Term for the rdfs:subClassOf predicate.
pub fn sub_class_of() -> Term {
    Term::iri(rdfs::SUB_CLASS_OF)
}

/// Term for the rdfs:subPropertyOf predicate.
pub fn sub_property_of() -> Term {
    Term::iri(rdfs::SUB_PROPERTY_OF)
}

/// Term for the rdfs:domain predicate.
pub fn domain() -> Term {
    Term::iri(rdfs::DOMAIN)
}

/// Term for the rdfs:range predicate.
pub fn range() -> Term {
    Term::iri(rdfs::RANGE)
}

/// Classes (and anything placed in subject position) must be IRIs or blank nodes.
#[inline]
pub fn is_class_term(term: &Term) -> bool {
    term.is_resource()
}
