//! # Strata Reasoner
//!
//! RDFS forward-chaining inference engine.
//!
//! This crate provides:
//! - The six RDFS entailment rules (rdfs2, rdfs3, rdfs5, rdfs7, rdfs9, rdfs11)
//! - A fixed-point chainer with depth and inference-count limits
//! - Per-triple provenance (rule id and justifying triple ids)
//! - A scoped inference primitive for callers that only need part of the closure
//!
//! ## Key Types
//!
//! - [`Reasoner`]: reads a [`TripleStore`] and runs the profile's rule set
//! - [`ForwardChainer`]: runs a [`RuleSet`] over an explicit list of triples
//! - [`RuleCatalog`]: rule sets by [`ReasoningProfile`]
//! - [`ScopedInference`]: inference over a caller-selected slice of triples and rules
//!
//! ## Example
//!
//! ```ignore
//! use strata_reasoner::{Reasoner, ReasoningConfig};
//!
//! let reasoner = Reasoner::new(store);
//! let result = reasoner.infer(Some(ReasoningConfig::default().with_max_depth(5))).await?;
//! for triple in &result.derived_triples {
//!     println!("{} via {}", triple, result.provenance[&triple.id].rule_id);
//! }
//! ```

pub mod config;
pub mod error;
pub mod execute;
pub mod fixpoint;
pub mod rules;
pub mod types;

// Re-exports for convenience
pub use config::{ReasoningConfig, ReasoningProfile};
pub use error::{ReasoningError, Result};
pub use fixpoint::ForwardChainer;
pub use rules::{RdfsRule, RuleCatalog, RuleSet, RDFS_RULE_IDS};
pub use types::{Inference, InferenceResult, InferenceStats, Provenance};

use std::sync::Arc;
use strata_core::{Triple, TripleStore};
use tracing::Instrument;

/// Inference over an explicit slice of triples with a subset of rules
///
/// The rules are taken from the rule set of `config.profile`, keeping that
/// set's order. No store is read.
pub trait ScopedInference: Send + Sync {
    fn infer_scoped(
        &self,
        triples: &[Triple],
        rule_ids: &[&str],
        config: &ReasoningConfig,
    ) -> Result<InferenceResult>;
}

impl ScopedInference for RuleCatalog {
    fn infer_scoped(
        &self,
        triples: &[Triple],
        rule_ids: &[&str],
        config: &ReasoningConfig,
    ) -> Result<InferenceResult> {
        let rules = self.rules_for(config.profile)?.subset(rule_ids)?;
        ForwardChainer::new(rules).chain(triples, config)
    }
}

/// Reasoner service over a triple store
///
/// Holds no per-run state; concurrent and repeated calls are independent.
pub struct Reasoner<S> {
    store: Arc<S>,
    catalog: Arc<RuleCatalog>,
}

impl<S> Clone for Reasoner<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            catalog: Arc::clone(&self.catalog),
        }
    }
}

impl<S: TripleStore> Reasoner<S> {
    /// Create a reasoner with the standard rule catalog
    pub fn new(store: Arc<S>) -> Self {
        Self::with_catalog(store, Arc::new(RuleCatalog::standard()))
    }

    /// Create a reasoner with a caller-supplied rule catalog
    pub fn with_catalog(store: Arc<S>, catalog: Arc<RuleCatalog>) -> Self {
        Self { store, catalog }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn catalog(&self) -> &Arc<RuleCatalog> {
        &self.catalog
    }

    /// Materialize everything the store's triples entail
    ///
    /// `None` uses [`ReasoningConfig::default`]. The store is read once, in
    /// full; the run itself is synchronous.
    pub async fn infer(&self, config: Option<ReasoningConfig>) -> Result<InferenceResult> {
        let config = config.unwrap_or_default();
        let span = tracing::info_span!(
            "reasoner_infer",
            profile = %config.profile,
            max_depth = config.max_depth,
            max_inferences = config.max_inferences,
        );

        self.run(config).instrument(span).await
    }

    async fn run(&self, config: ReasoningConfig) -> Result<InferenceResult> {
        config.validate()?;
        let rules = self.catalog.rules_for(config.profile)?.clone();

        let triples = self.store.match_pattern(None, None, None).await?;
        tracing::debug!(triples = triples.len(), "loaded triples from store");

        let result = ForwardChainer::new(rules).chain(&triples, &config)?;
        tracing::info!(
            derived = result.stats.triples_inferred,
            iterations = result.stats.iterations,
            duration_ms = result.stats.duration_ms,
            "inference complete"
        );
        Ok(result)
    }
}

impl<S: TripleStore> ScopedInference for Reasoner<S> {
    fn infer_scoped(
        &self,
        triples: &[Triple],
        rule_ids: &[&str],
        config: &ReasoningConfig,
    ) -> Result<InferenceResult> {
        self.catalog.infer_scoped(triples, rule_ids, config)
    }
}
