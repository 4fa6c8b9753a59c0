//! Result types for inference runs

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::BTreeMap;
use strata_core::{Term, Triple, TripleId};

/// Justification ids for one inference (every RDFS rule joins exactly two triples)
pub type SourceIds = SmallVec<[TripleId; 2]>;

/// A triple produced by a rule, with the ids of the triples it was derived from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inference {
    pub triple: Triple,
    /// Matched triples, in rule pattern order
    pub source_triple_ids: SourceIds,
}

impl Inference {
    /// Build an inference for the derived content `(s, p, o)`
    pub fn new(s: Term, p: Term, o: Term, first: &TripleId, second: &TripleId) -> Self {
        let mut source_triple_ids = SourceIds::new();
        source_triple_ids.push(first.clone());
        source_triple_ids.push(second.clone());
        Self {
            triple: Triple::derived(s, p, o),
            source_triple_ids,
        }
    }
}

/// Why a derived triple exists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    pub rule_id: String,
    pub source_triple_ids: Vec<TripleId>,
}

/// Counters for a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceStats {
    /// Passes performed, including the final pass that confirmed the fixed point
    pub iterations: usize,
    /// Number of derived triples
    pub triples_inferred: usize,
    /// Wall-clock time of the run
    pub duration_ms: u64,
    /// Derived triples credited to each rule
    #[serde(default)]
    pub rules_fired: BTreeMap<String, usize>,
}

impl InferenceStats {
    /// Record that a rule was credited with a derived triple
    pub fn record_rule_fired(&mut self, rule_id: &str) {
        *self.rules_fired.entry(rule_id.to_string()).or_insert(0) += 1;
    }
}

/// Output of an inference run
///
/// `derived_triples` holds only triples absent from the input, in derivation
/// order. Every one of them has an entry in `provenance`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferenceResult {
    pub derived_triples: Vec<Triple>,
    pub provenance: BTreeMap<TripleId, Provenance>,
    pub stats: InferenceStats,
}

impl InferenceResult {
    /// Check whether `(s, p, o)` was derived
    pub fn contains(&self, s: &Term, p: &Term, o: &Term) -> bool {
        self.derived_triples.iter().any(|t| t.matches(s, p, o))
    }

    /// Provenance of a derived triple
    pub fn provenance_of(&self, id: &TripleId) -> Option<&Provenance> {
        self.provenance.get(id)
    }

    pub fn len(&self) -> usize {
        self.derived_triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.derived_triples.is_empty()
    }
}
