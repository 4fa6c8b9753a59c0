//! Triple store interface
//!
//! The reasoner only ever reads from a store, through [`TripleStore::match_pattern`].
//! The trait is the async seam between the engine and whatever holds the graph;
//! everything after the read is synchronous.
//!
//! [`MemoryStore`] is an in-memory implementation for tests and for embedders
//! whose graph already lives in memory.

use async_trait::async_trait;
use hashbrown::HashMap;
use parking_lot::RwLock;

use crate::error::Result;
use crate::term::Term;
use crate::triple::{Triple, TripleId, TripleKey};

/// Read access to a set of triples
///
/// `None` in any position is a wildcard. `match_pattern(None, None, None)`
/// returns every triple in the store.
#[async_trait]
pub trait TripleStore: Send + Sync {
    async fn match_pattern(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Result<Vec<Triple>>;
}

#[derive(Debug, Default)]
struct MemoryInner {
    /// Triples in insertion order
    triples: Vec<Triple>,
    /// Content key -> position in `triples`
    index: HashMap<TripleKey, usize>,
    /// Counter for minted ids
    next_id: u64,
}

/// In-memory triple store
///
/// Deduplicates by content. Ids minted by [`MemoryStore::insert`] are `t1`,
/// `t2`, ... and inserting an already-present triple returns its existing id.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from triples that already carry ids
    ///
    /// Later triples with the same content as an earlier one are dropped.
    pub fn from_triples(triples: impl IntoIterator<Item = Triple>) -> Self {
        let store = Self::new();
        for triple in triples {
            store.insert_triple(triple);
        }
        store
    }

    /// Insert a triple by content, minting an id if it is new
    pub fn insert(&self, subject: Term, predicate: Term, object: Term) -> TripleId {
        let mut inner = self.inner.write();
        let key = TripleKey::new(subject, predicate, object);
        if let Some(&idx) = inner.index.get(&key) {
            return inner.triples[idx].id.clone();
        }
        inner.next_id += 1;
        let id = TripleId::from(format!("t{}", inner.next_id));
        let triple = Triple::new(id.clone(), key.s.clone(), key.p.clone(), key.o.clone());
        let idx = inner.triples.len();
        inner.triples.push(triple);
        inner.index.insert(key, idx);
        id
    }

    /// Insert a triple keeping its id
    ///
    /// Returns the id the store holds for this content, which is the existing
    /// one when the content was already present.
    pub fn insert_triple(&self, triple: Triple) -> TripleId {
        let mut inner = self.inner.write();
        let key = triple.key();
        if let Some(&idx) = inner.index.get(&key) {
            return inner.triples[idx].id.clone();
        }
        let id = triple.id.clone();
        let idx = inner.triples.len();
        inner.triples.push(triple);
        inner.index.insert(key, idx);
        id
    }

    /// Number of triples held
    pub fn len(&self) -> usize {
        self.inner.read().triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of every triple, in insertion order
    pub fn triples(&self) -> Vec<Triple> {
        self.inner.read().triples.clone()
    }
}

#[async_trait]
impl TripleStore for MemoryStore {
    async fn match_pattern(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
    ) -> Result<Vec<Triple>> {
        let inner = self.inner.read();
        let matched: Vec<Triple> = inner
            .triples
            .iter()
            .filter(|t| subject.map_or(true, |s| &t.subject == s))
            .filter(|t| predicate.map_or(true, |p| &t.predicate == p))
            .filter(|t| object.map_or(true, |o| &t.object == o))
            .cloned()
            .collect();
        tracing::trace!(matched = matched.len(), total = inner.triples.len(), "memory store match");
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iri(s: &str) -> Term {
        Term::iri(s)
    }

    #[test]
    fn test_insert_mints_sequential_ids() {
        let store = MemoryStore::new();
        assert_eq!(store.insert(iri("a"), iri("p"), iri("b")).as_str(), "t1");
        assert_eq!(store.insert(iri("b"), iri("p"), iri("c")).as_str(), "t2");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_reinsert_returns_existing_id() {
        let store = MemoryStore::new();
        let first = store.insert(iri("a"), iri("p"), iri("b"));
        let again = store.insert(iri("a"), iri("p"), iri("b"));
        assert_eq!(first, again);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_from_triples_dedups_by_content() {
        let store = MemoryStore::from_triples(vec![
            Triple::new("x1", iri("a"), iri("p"), iri("b")),
            Triple::new("x2", iri("a"), iri("p"), iri("b")),
        ]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.triples()[0].id.as_str(), "x1");
    }

    #[tokio::test]
    async fn test_match_pattern_wildcards() {
        let store = MemoryStore::new();
        store.insert(iri("alice"), iri("knows"), iri("bob"));
        store.insert(iri("alice"), iri("age"), Term::integer(30));
        store.insert(iri("bob"), iri("knows"), iri("carol"));

        let all = store.match_pattern(None, None, None).await.unwrap();
        assert_eq!(all.len(), 3);

        let alice = store.match_pattern(Some(&iri("alice")), None, None).await.unwrap();
        assert_eq!(alice.len(), 2);

        let knows_bob = store
            .match_pattern(None, Some(&iri("knows")), Some(&iri("bob")))
            .await
            .unwrap();
        assert_eq!(knows_bob.len(), 1);
        assert_eq!(knows_bob[0].id.as_str(), "t1");
    }
}
