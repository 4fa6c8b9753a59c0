//! Rule set and rule catalog
//!
//! An [`RdfsRule`] is a pure function from the current fact set to the
//! inferences it supports. A [`RuleSet`] is an immutable, ordered list of
//! rules; the order fixes which rule gets provenance credit when two rules
//! derive the same triple in one pass. A [`RuleCatalog`] maps a
//! [`ReasoningProfile`] to its rule set.

use hashbrown::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::config::ReasoningProfile;
use crate::error::{ReasoningError, Result};
use crate::execute::{
    apply_domain_rule, apply_range_rule, apply_sub_property_rule,
    apply_sub_property_transitivity_rule, apply_subclass_rule, apply_subclass_transitivity_rule,
    FactSet,
};
use crate::types::Inference;

/// Rule ids of the RDFS rule set, in application order
pub const RDFS_RULE_IDS: [&str; 6] = ["rdfs2", "rdfs3", "rdfs5", "rdfs7", "rdfs9", "rdfs11"];

/// A forward-chaining entailment rule
///
/// `apply` receives the full current fact set on every call, must not retain
/// state between calls, and returns only conclusions that are not already
/// facts. An `Err` aborts the whole run.
pub trait RdfsRule: fmt::Debug + Send + Sync {
    /// Stable rule id, used in provenance
    fn id(&self) -> &str;

    /// Human-readable rule pattern
    fn description(&self) -> &str;

    fn apply(&self, facts: &FactSet) -> Result<Vec<Inference>>;
}

/// One of the built-in RDFS rules
#[derive(Clone, Copy)]
pub struct BuiltinRule {
    id: &'static str,
    description: &'static str,
    apply_fn: fn(&FactSet) -> Vec<Inference>,
}

impl fmt::Debug for BuiltinRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinRule").field("id", &self.id).finish()
    }
}

impl RdfsRule for BuiltinRule {
    fn id(&self) -> &str {
        self.id
    }

    fn description(&self) -> &str {
        self.description
    }

    fn apply(&self, facts: &FactSet) -> Result<Vec<Inference>> {
        Ok((self.apply_fn)(facts))
    }
}

const BUILTIN_RULES: [BuiltinRule; 6] = [
    BuiltinRule {
        id: "rdfs2",
        description: "(x p y), (p rdfs:domain c) => (x rdf:type c)",
        apply_fn: apply_domain_rule,
    },
    BuiltinRule {
        id: "rdfs3",
        description: "(x p y), (p rdfs:range c) => (y rdf:type c)",
        apply_fn: apply_range_rule,
    },
    BuiltinRule {
        id: "rdfs5",
        description: "(p rdfs:subPropertyOf q), (q rdfs:subPropertyOf r) => (p rdfs:subPropertyOf r)",
        apply_fn: apply_sub_property_transitivity_rule,
    },
    BuiltinRule {
        id: "rdfs7",
        description: "(x p y), (p rdfs:subPropertyOf q) => (x q y)",
        apply_fn: apply_sub_property_rule,
    },
    BuiltinRule {
        id: "rdfs9",
        description: "(x rdf:type c), (c rdfs:subClassOf d) => (x rdf:type d)",
        apply_fn: apply_subclass_rule,
    },
    BuiltinRule {
        id: "rdfs11",
        description: "(c rdfs:subClassOf d), (d rdfs:subClassOf e) => (c rdfs:subClassOf e)",
        apply_fn: apply_subclass_transitivity_rule,
    },
];

/// Immutable, ordered collection of rules
///
/// Cloning is cheap (the rule list is shared).
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Arc<[Arc<dyn RdfsRule>]>,
}

impl RuleSet {
    /// Build a rule set; rule ids must be unique
    pub fn new(rules: Vec<Arc<dyn RdfsRule>>) -> Result<Self> {
        for (i, rule) in rules.iter().enumerate() {
            if rules[..i].iter().any(|r| r.id() == rule.id()) {
                return Err(ReasoningError::InvalidConfig(format!(
                    "duplicate rule id '{}'",
                    rule.id()
                )));
            }
        }
        Ok(Self {
            rules: rules.into(),
        })
    }

    /// The six RDFS rules in their fixed order
    pub fn rdfs() -> Self {
        let rules: Vec<Arc<dyn RdfsRule>> = BUILTIN_RULES
            .iter()
            .map(|rule| Arc::new(*rule) as Arc<dyn RdfsRule>)
            .collect();
        Self {
            rules: rules.into(),
        }
    }

    /// Restrict to the named rules, keeping this set's order
    pub fn subset(&self, ids: &[&str]) -> Result<Self> {
        if let Some(unknown) = ids.iter().find(|id| self.get(id).is_none()) {
            return Err(ReasoningError::UnknownRule((*unknown).to_string()));
        }
        let rules: Vec<Arc<dyn RdfsRule>> = self
            .rules
            .iter()
            .filter(|rule| ids.contains(&rule.id()))
            .cloned()
            .collect();
        Ok(Self {
            rules: rules.into(),
        })
    }

    /// Get a rule by id
    pub fn get(&self, id: &str) -> Option<&Arc<dyn RdfsRule>> {
        self.rules.iter().find(|rule| rule.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn RdfsRule>> {
        self.rules.iter()
    }

    /// Rule ids in application order
    pub fn ids(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Rule sets by reasoning profile
///
/// The standard catalog registers only [`ReasoningProfile::Rdfs`]; OWL_RL
/// and CUSTOM rule sets are supplied by the embedder.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    sets: HashMap<ReasoningProfile, RuleSet>,
}

impl Default for RuleCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleCatalog {
    /// Catalog with no registered profiles
    pub fn empty() -> Self {
        Self {
            sets: HashMap::new(),
        }
    }

    /// Catalog with the RDFS rule set registered
    pub fn standard() -> Self {
        Self::empty().with_profile(ReasoningProfile::Rdfs, RuleSet::rdfs())
    }

    /// Register (or replace) the rule set for a profile
    pub fn with_profile(mut self, profile: ReasoningProfile, rules: RuleSet) -> Self {
        self.sets.insert(profile, rules);
        self
    }

    /// The rule set for a profile
    pub fn rules_for(&self, profile: ReasoningProfile) -> Result<&RuleSet> {
        self.sets
            .get(&profile)
            .ok_or(ReasoningError::UnknownProfile(profile))
    }
}
