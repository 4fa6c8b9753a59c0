//! # Strata Core
//!
//! Shared data model for the Strata reasoner and shape validator.
//!
//! This crate provides:
//! - Core types: `Term`, `Literal`, `Triple`, `TripleId`, `TripleKey`
//! - The `TripleStore` trait the reasoner reads from
//! - `MemoryStore`, an in-memory store
//!
//! ## Design Principles
//!
//! 1. **Async at the store seam only**: reading triples is async, everything else is plain computation
//! 2. **Content identity**: triples are the same when their content is, regardless of id
//!
//! ## Example
//!
//! ```
//! use strata_core::{MemoryStore, Term};
//!
//! let store = MemoryStore::new();
//! let id = store.insert(Term::iri("alice"), Term::iri("knows"), Term::iri("bob"));
//! assert_eq!(id.as_str(), "t1");
//! ```

pub mod error;
pub mod store;
pub mod term;
pub mod triple;

pub use error::{Error, Result};
pub use store::{MemoryStore, TripleStore};
pub use term::{Literal, Term};
pub use triple::{Triple, TripleId, TripleKey};
