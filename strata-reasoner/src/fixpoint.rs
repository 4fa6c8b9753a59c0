//! Fixed-point iteration for RDFS reasoning
//!
//! This module implements the main reasoning loop: every rule is applied to
//! the working set as it stood at the start of a pass, the inferences are
//! merged in rule order, and passes repeat until one adds nothing or a limit
//! is hit.

use std::collections::BTreeMap;
use std::time::Instant;

use strata_core::Triple;

use crate::config::ReasoningConfig;
use crate::error::{ReasoningError, Result};
use crate::execute::FactSet;
use crate::rules::RuleSet;
use crate::types::{Inference, InferenceResult, InferenceStats, Provenance};

/// Runs a rule set to its fixed point over a list of triples
#[derive(Debug, Clone)]
pub struct ForwardChainer {
    rules: RuleSet,
}

impl ForwardChainer {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Compute every triple entailed by `initial` under this chainer's rules
    ///
    /// This function:
    /// 1. Seeds the working set from `initial` (deduplicated by content)
    /// 2. Runs passes until one adds nothing, failing if `max_depth` passes
    ///    were not enough
    /// 3. Fails as soon as a new triple would exceed `max_inferences`
    /// 4. Returns the derived triples in derivation order with provenance
    pub fn chain(&self, initial: &[Triple], config: &ReasoningConfig) -> Result<InferenceResult> {
        config.validate()?;

        let span = tracing::debug_span!(
            "reasoner_chain",
            input = initial.len(),
            rules = self.rules.len(),
            max_depth = config.max_depth,
            max_inferences = config.max_inferences,
        );
        let _guard = span.enter();

        let start = Instant::now();
        let mut facts = FactSet::from_triples(initial);
        let seed_len = facts.len();
        let mut provenance = BTreeMap::new();
        let mut stats = InferenceStats::default();
        let mut derived_count = 0usize;

        loop {
            if stats.iterations >= config.max_depth {
                tracing::warn!(
                    limit = config.max_depth,
                    derived = derived_count,
                    "fixed point not reached within depth limit"
                );
                return Err(ReasoningError::MaxDepthExceeded {
                    limit: config.max_depth,
                });
            }

            // All rules see the same snapshot of the working set
            let mut pass: Vec<(&str, Vec<Inference>)> = Vec::with_capacity(self.rules.len());
            for rule in self.rules.iter() {
                let inferences = rule.apply(&facts).map_err(|e| match e {
                    ReasoningError::RuleFailed { .. } => e,
                    other => ReasoningError::rule_failed(rule.id(), other.to_string()),
                })?;
                pass.push((rule.id(), inferences));
            }

            let mut added = 0usize;
            for (rule_id, inferences) in pass {
                for inference in inferences {
                    if facts.contains_triple(&inference.triple) {
                        continue;
                    }
                    if derived_count == config.max_inferences {
                        tracing::warn!(
                            limit = config.max_inferences,
                            pass = stats.iterations + 1,
                            "inference limit reached"
                        );
                        return Err(ReasoningError::MaxInferencesExceeded {
                            limit: config.max_inferences,
                        });
                    }
                    provenance.insert(
                        inference.triple.id.clone(),
                        Provenance {
                            rule_id: rule_id.to_string(),
                            source_triple_ids: inference.source_triple_ids.into_vec(),
                        },
                    );
                    stats.record_rule_fired(rule_id);
                    facts.try_add(inference.triple);
                    derived_count += 1;
                    added += 1;
                }
            }

            stats.iterations += 1;
            tracing::trace!(pass = stats.iterations, added, total = facts.len(), "pass complete");

            if added == 0 {
                break;
            }
        }

        let derived_triples: Vec<Triple> = facts.into_triples().split_off(seed_len);
        stats.triples_inferred = derived_triples.len();
        stats.duration_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(
            iterations = stats.iterations,
            derived = stats.triples_inferred,
            "fixed point reached"
        );

        Ok(InferenceResult {
            derived_triples,
            provenance,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execute::util::{domain, rdf_type, sub_class_of};
    use crate::rules::RdfsRule;
    use std::sync::Arc;
    use strata_core::Term;

    fn iri(name: &str) -> Term {
        Term::iri(name)
    }

    fn chainer() -> ForwardChainer {
        ForwardChainer::new(RuleSet::rdfs())
    }

    #[test]
    fn test_empty_input_converges_in_one_pass() {
        let result = chainer().chain(&[], &ReasoningConfig::default()).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.stats.iterations, 1);
    }

    #[test]
    fn test_first_rule_in_order_wins_provenance() {
        // rdfs2 and rdfs9 both derive (x type C) in the first pass
        let input = vec![
            Triple::new("t1", iri("p"), domain(), iri("C")),
            Triple::new("t2", iri("x"), iri("p"), iri("y")),
            Triple::new("t3", iri("x"), rdf_type(), iri("D")),
            Triple::new("t4", iri("D"), sub_class_of(), iri("C")),
        ];
        let result = chainer().chain(&input, &ReasoningConfig::default()).unwrap();

        let id = strata_core::TripleId::derived(&iri("x"), &rdf_type(), &iri("C"));
        let prov = result.provenance_of(&id).unwrap();
        assert_eq!(prov.rule_id, "rdfs2");
        assert_eq!(result.stats.rules_fired.get("rdfs2"), Some(&1));
        assert_eq!(result.stats.rules_fired.get("rdfs9"), None);
    }

    #[test]
    fn test_duplicate_input_is_not_derived() {
        let input = vec![
            Triple::new("t1", iri("S"), sub_class_of(), iri("A")),
            Triple::new("t2", iri("alice"), rdf_type(), iri("S")),
            Triple::new("t3", iri("alice"), rdf_type(), iri("A")),
        ];
        let result = chainer().chain(&input, &ReasoningConfig::default()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_inference_limit_counts_only_derived_triples() {
        // 1 derivation with a limit of 1 succeeds even though the working set holds 3 triples
        let input = vec![
            Triple::new("t1", iri("S"), sub_class_of(), iri("A")),
            Triple::new("t2", iri("alice"), rdf_type(), iri("S")),
        ];
        let config = ReasoningConfig::default().with_max_inferences(1);
        let result = chainer().chain(&input, &config).unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_invalid_config_rejected_before_work() {
        let config = ReasoningConfig::default().with_max_depth(0);
        let err = chainer().chain(&[], &config).unwrap_err();
        assert!(matches!(err, ReasoningError::InvalidConfig(_)));
    }

    #[derive(Debug)]
    struct FailingRule;

    impl RdfsRule for FailingRule {
        fn id(&self) -> &str {
            "broken"
        }

        fn description(&self) -> &str {
            "always fails"
        }

        fn apply(&self, _facts: &FactSet) -> Result<Vec<Inference>> {
            Err(ReasoningError::InvalidConfig("boom".to_string()))
        }
    }

    #[test]
    fn test_rule_error_aborts_run() {
        let rules = RuleSet::new(vec![Arc::new(FailingRule) as Arc<dyn RdfsRule>]).unwrap();
        let err = ForwardChainer::new(rules)
            .chain(&[], &ReasoningConfig::default())
            .unwrap_err();
        match err {
            ReasoningError::RuleFailed { rule_id, message } => {
                assert_eq!(rule_id, "broken");
                assert!(message.contains("boom"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
