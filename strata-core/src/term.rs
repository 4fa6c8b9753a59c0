//! Term - a node or value in a triple position
//!
//! A `Term` is one of:
//! - `Iri`: a named resource (classes, properties, individuals)
//! - `BlankNode`: an anonymous resource, identified by a local label
//! - `Literal`: a lexical value with a datatype IRI and optional language tag
//!
//! All string data is held in `Arc<str>` so terms clone cheaply; the reasoner
//! clones terms freely while building derived triples and indexes.
//!
//! ## Display
//!
//! The display form is the one used in derived triple ids:
//! - IRIs print as-is (`http://example.org/alice`)
//! - Blank nodes print as `_:label`
//! - Literals print as `"lexical"@lang` or `"lexical"^^<datatype>`
//!   (`xsd:string` literals print as `"lexical"`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use strata_vocab::{rdf, xsd};

use crate::error::{Error, Result};

/// A literal value: lexical form plus datatype (and language tag for `rdf:langString`)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    /// The lexical form, exactly as asserted
    pub lexical: Arc<str>,
    /// Datatype IRI
    pub datatype: Arc<str>,
    /// Language tag, only for `rdf:langString` literals
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<Arc<str>>,
}

impl Literal {
    /// Create a typed literal
    pub fn typed(lexical: impl AsRef<str>, datatype: impl AsRef<str>) -> Self {
        Self {
            lexical: Arc::from(lexical.as_ref()),
            datatype: Arc::from(datatype.as_ref()),
            lang: None,
        }
    }

    /// Create a plain (`xsd:string`) literal
    pub fn string(lexical: impl AsRef<str>) -> Self {
        Self::typed(lexical, xsd::STRING)
    }

    /// Create a language-tagged (`rdf:langString`) literal
    pub fn lang_string(lexical: impl AsRef<str>, lang: impl AsRef<str>) -> Self {
        Self {
            lexical: Arc::from(lexical.as_ref()),
            datatype: Arc::from(rdf::LANG_STRING),
            lang: Some(Arc::from(lang.as_ref())),
        }
    }
}

/// A term in subject, predicate or object position
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "termType", rename_all = "camelCase")]
pub enum Term {
    /// Named resource
    Iri {
        /// The full IRI
        value: Arc<str>,
    },
    /// Anonymous resource
    BlankNode {
        /// Local label (without the `_:` prefix)
        label: Arc<str>,
    },
    /// Literal value
    Literal(Literal),
}

impl Term {
    /// Create an IRI term
    pub fn iri(value: impl AsRef<str>) -> Self {
        Term::Iri {
            value: Arc::from(value.as_ref()),
        }
    }

    /// Create a blank node term
    pub fn blank(label: impl AsRef<str>) -> Self {
        Term::BlankNode {
            label: Arc::from(label.as_ref()),
        }
    }

    /// Create a plain string literal term
    pub fn string(lexical: impl AsRef<str>) -> Self {
        Term::Literal(Literal::string(lexical))
    }

    /// Create a typed literal term
    pub fn typed(lexical: impl AsRef<str>, datatype: impl AsRef<str>) -> Self {
        Term::Literal(Literal::typed(lexical, datatype))
    }

    /// Create an `xsd:integer` literal term
    pub fn integer(value: i64) -> Self {
        Term::typed(value.to_string(), xsd::INTEGER)
    }

    /// Parse a term from its display form.
    ///
    /// Accepts `_:label` for blank nodes, `"lexical"`, `"lexical"@lang` and
    /// `"lexical"^^<datatype>` for literals, and anything else as an IRI
    /// (optionally wrapped in angle brackets).
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::invalid_term("empty term"));
        }
        if let Some(label) = s.strip_prefix("_:") {
            if label.is_empty() {
                return Err(Error::invalid_term("blank node without label"));
            }
            return Ok(Term::blank(label));
        }
        if let Some(rest) = s.strip_prefix('"') {
            let end = rest
                .rfind('"')
                .ok_or_else(|| Error::invalid_term(format!("unterminated literal: {}", s)))?;
            let lexical = &rest[..end];
            let suffix = &rest[end + 1..];
            return if suffix.is_empty() {
                Ok(Term::string(lexical))
            } else if let Some(lang) = suffix.strip_prefix('@') {
                Ok(Term::Literal(Literal::lang_string(lexical, lang)))
            } else if let Some(dt) = suffix.strip_prefix("^^") {
                let dt = dt.trim_start_matches('<').trim_end_matches('>');
                Ok(Term::typed(lexical, dt))
            } else {
                Err(Error::invalid_term(format!("unexpected literal suffix: {}", s)))
            };
        }
        let iri = s.trim_start_matches('<').trim_end_matches('>');
        Ok(Term::iri(iri))
    }

    /// Get the IRI string if this is an IRI term
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri { value } => Some(value),
            _ => None,
        }
    }

    /// Get the literal if this is a literal term
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Check if this is an IRI
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri { .. })
    }

    /// Check if this is a blank node
    pub fn is_blank(&self) -> bool {
        matches!(self, Term::BlankNode { .. })
    }

    /// Check if this is a literal
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Check if this term can appear in subject position (IRI or blank node)
    pub fn is_resource(&self) -> bool {
        !self.is_literal()
    }

    /// Check if this term is the IRI `iri`
    pub fn is_iri_eq(&self, iri: &str) -> bool {
        self.as_iri() == Some(iri)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri { value } => write!(f, "{}", value),
            Term::BlankNode { label } => write!(f, "_:{}", label),
            Term::Literal(lit) => match (&lit.lang, lit.datatype.as_ref()) {
                (Some(lang), _) => write!(f, "\"{}\"@{}", lit.lexical, lang),
                (None, xsd::STRING) => write!(f, "\"{}\"", lit.lexical),
                (None, dt) => write!(f, "\"{}\"^^<{}>", lit.lexical, dt),
            },
        }
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}
