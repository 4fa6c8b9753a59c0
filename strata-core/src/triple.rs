//! Triples, triple ids and triple keys
//!
//! A [`Triple`] carries its content (`subject`, `predicate`, `object`) and an
//! opaque [`TripleId`] used when citing it in provenance. Set membership is
//! always decided on content via [`TripleKey`], never on the id.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use strata_vocab::xsd;

use crate::term::Term;

/// Opaque triple identifier
///
/// Store-assigned ids carry no meaning. Derived triples use
/// `"{subject}|{predicate}|{object}"` so the same derivation always yields
/// the same id. Each part is the term's display form, escaped so that
/// distinct triples never share an id: `\` and `|` are backslash-escaped
/// everywhere, `"` inside literal lexical forms, and IRIs that would read as
/// a blank node, literal or bracketed IRI are wrapped in `<...>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TripleId(Arc<str>);

impl TripleId {
    /// Create an id from any string
    pub fn new(id: impl AsRef<str>) -> Self {
        TripleId(Arc::from(id.as_ref()))
    }

    /// Deterministic id for a derived triple
    pub fn derived(subject: &Term, predicate: &Term, object: &Term) -> Self {
        let mut id = String::new();
        push_id_part(&mut id, subject);
        id.push('|');
        push_id_part(&mut id, predicate);
        id.push('|');
        push_id_part(&mut id, object);
        TripleId(Arc::from(id))
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn push_id_part(id: &mut String, term: &Term) {
    match term {
        Term::Iri { value } => {
            let wrap = value.starts_with("_:") || value.starts_with(['"', '<']);
            if wrap {
                id.push('<');
            }
            push_escaped(id, value, &['|']);
            if wrap {
                id.push('>');
            }
        }
        Term::BlankNode { label } => {
            id.push_str("_:");
            push_escaped(id, label, &['|']);
        }
        Term::Literal(lit) => {
            id.push('"');
            push_escaped(id, &lit.lexical, &['|', '"']);
            id.push('"');
            match (&lit.lang, lit.datatype.as_ref()) {
                (Some(lang), _) => {
                    id.push('@');
                    push_escaped(id, lang, &['|']);
                }
                (None, xsd::STRING) => {}
                (None, dt) => {
                    id.push_str("^^<");
                    push_escaped(id, dt, &['|']);
                    id.push('>');
                }
            }
        }
    }
}

fn push_escaped(id: &mut String, s: &str, special: &[char]) {
    for c in s.chars() {
        if c == '\\' || special.contains(&c) {
            id.push('\\');
        }
        id.push(c);
    }
}

impl fmt::Display for TripleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TripleId {
    fn from(s: &str) -> Self {
        TripleId::new(s)
    }
}

impl From<String> for TripleId {
    fn from(s: String) -> Self {
        TripleId(Arc::from(s))
    }
}

/// Content of a triple, without its id
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TripleKey {
    pub s: Term,
    pub p: Term,
    pub o: Term,
}

impl TripleKey {
    pub fn new(s: Term, p: Term, o: Term) -> Self {
        Self { s, p, o }
    }
}

/// An immutable subject-predicate-object statement
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Triple {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
    pub id: TripleId,
}

impl Triple {
    /// Create a triple with an explicit id
    pub fn new(id: impl Into<TripleId>, subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
            id: id.into(),
        }
    }

    /// Create a derived triple, whose id is computed from its content
    pub fn derived(subject: Term, predicate: Term, object: Term) -> Self {
        let id = TripleId::derived(&subject, &predicate, &object);
        Self {
            subject,
            predicate,
            object,
            id,
        }
    }

    /// Content key for set membership
    pub fn key(&self) -> TripleKey {
        TripleKey::new(
            self.subject.clone(),
            self.predicate.clone(),
            self.object.clone(),
        )
    }

    /// Check whether this triple has the given content
    pub fn matches(&self, s: &Term, p: &Term, o: &Term) -> bool {
        &self.subject == s && &self.predicate == p && &self.object == o
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.subject, self.predicate, self.object)
    }
}
