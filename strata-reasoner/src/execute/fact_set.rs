//! Working set of facts with deduplication.
//!
//! The FactSet holds every triple known during a run (input plus derived),
//! deduplicated by content, with predicate-keyed indexes for rule joins.
//! Insertion order is preserved so every scan is deterministic.

use hashbrown::HashMap;
use strata_core::{Term, Triple, TripleKey};

/// Content-deduplicated triples with join indexes
#[derive(Debug, Default, Clone)]
pub struct FactSet {
    /// All triples, in insertion order
    triples: Vec<Triple>,
    /// Content key -> position in `triples`
    seen: HashMap<TripleKey, usize>,
    /// Index by predicate for join lookups
    by_p: HashMap<Term, Vec<usize>>,
    /// Index by (predicate, subject) for join lookups
    by_ps: HashMap<(Term, Term), Vec<usize>>,
    /// Index by (predicate, object) for join lookups
    by_po: HashMap<(Term, Term), Vec<usize>>,
}

impl FactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from triples; later duplicates (by content) are dropped
    pub fn from_triples<'a>(triples: impl IntoIterator<Item = &'a Triple>) -> Self {
        let mut set = Self::new();
        for triple in triples {
            set.try_add(triple.clone());
        }
        set
    }

    /// Try to add a triple, returns true if it was new
    pub fn try_add(&mut self, triple: Triple) -> bool {
        let key = triple.key();
        if self.seen.contains_key(&key) {
            return false;
        }

        let idx = self.triples.len();
        self.seen.insert(key, idx);

        // Index by predicate
        self.by_p
            .entry(triple.predicate.clone())
            .or_default()
            .push(idx);

        // Index by (predicate, subject)
        self.by_ps
            .entry((triple.predicate.clone(), triple.subject.clone()))
            .or_default()
            .push(idx);

        // Index by (predicate, object)
        self.by_po
            .entry((triple.predicate.clone(), triple.object.clone()))
            .or_default()
            .push(idx);

        self.triples.push(triple);
        true
    }

    /// Check if a triple with this content exists
    pub fn contains(&self, s: &Term, p: &Term, o: &Term) -> bool {
        self.seen
            .contains_key(&TripleKey::new(s.clone(), p.clone(), o.clone()))
    }

    /// Check if a triple with the same content as `triple` exists
    pub fn contains_triple(&self, triple: &Triple) -> bool {
        self.seen.contains_key(&triple.key())
    }

    /// Get the stored triple with this content
    pub fn get(&self, key: &TripleKey) -> Option<&Triple> {
        self.seen.get(key).map(|&i| &self.triples[i])
    }

    /// Get all triples with a specific predicate
    pub fn get_by_p(&self, p: &Term) -> impl Iterator<Item = &Triple> {
        self.by_p
            .get(p)
            .into_iter()
            .flat_map(|indices| indices.iter().map(|&i| &self.triples[i]))
    }

    /// Get all triples with a specific (predicate, subject)
    pub fn get_by_ps(&self, p: &Term, s: &Term) -> impl Iterator<Item = &Triple> {
        self.by_ps
            .get(&(p.clone(), s.clone()))
            .into_iter()
            .flat_map(|indices| indices.iter().map(|&i| &self.triples[i]))
    }

    /// Get all triples with a specific (predicate, object)
    pub fn get_by_po(&self, p: &Term, o: &Term) -> impl Iterator<Item = &Triple> {
        self.by_po
            .get(&(p.clone(), o.clone()))
            .into_iter()
            .flat_map(|indices| indices.iter().map(|&i| &self.triples[i]))
    }

    /// All triples, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Get number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Consume and return all triples
    pub fn into_triples(self) -> Vec<Triple> {
        self.triples
    }
}
