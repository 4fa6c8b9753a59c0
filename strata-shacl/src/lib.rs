//! SHACL validation engine for Strata
//!
//! This crate validates RDF graphs against node shapes that target a class
//! and constrain the values of its instances' properties.
//!
//! # Overview
//!
//! Validation works by:
//! 1. Taking `ShapeDefinition`s, built directly or compiled from SHACL triples
//!    with `ShapeCompiler`
//! 2. Determining focus nodes for each shape via `sh:targetClass`, including
//!    instances of subclasses, using scoped inference per candidate node
//! 3. Checking each focus node's property values against the constraints
//! 4. Producing a `ValidationReport` with conformance status and all violations
//!
//! # Supported Constraints
//!
//! - Cardinality: `sh:minCount`, `sh:maxCount`
//! - Value type: `sh:datatype`
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use strata_core::{Term, Triple};
//! use strata_reasoner::RuleCatalog;
//! use strata_shacl::{PropertyConstraint, ShapeDefinition, ShapeValidator};
//! use strata_vocab::{rdf, xsd};
//!
//! let shape = ShapeDefinition::new(Term::iri("Person"))
//!     .with_property(PropertyConstraint::new(Term::iri("age")).with_datatype(xsd::INTEGER));
//! let graph = vec![
//!     Triple::new("t1", Term::iri("alice"), Term::iri(rdf::TYPE), Term::iri("Person")),
//!     Triple::new("t2", Term::iri("alice"), Term::iri("age"), Term::string("thirty")),
//! ];
//!
//! let validator = ShapeValidator::new(Arc::new(RuleCatalog::standard()));
//! let report = validator.validate(&[shape], &graph).unwrap();
//! assert!(!report.conforms);
//! assert_eq!(report.violations[0].source_constraint, "datatype");
//! ```

pub mod compile;
pub mod constraints;
pub mod error;
pub mod shape;
pub mod validate;

pub use compile::ShapeCompiler;
pub use constraints::{Constraint, ConstraintViolation};
pub use error::{Result, ShaclError};
pub use shape::{PropertyConstraint, ShapeDefinition};
pub use validate::{ShapeValidator, ValidationReport, Violation};

/// SHACL vocabulary full IRIs (re-exported from strata-vocab)
pub use strata_vocab::shacl;

/// Constraint component local names (re-exported from strata-vocab)
pub use strata_vocab::shacl_names as predicates;
