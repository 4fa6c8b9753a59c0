//! Shape validation
//!
//! Focus nodes for a shape are the instances of its target class. Direct
//! `rdf:type` assertions are read from the graph; indirect membership through
//! `rdfs:subClassOf` is decided per node by running the rdfs9/rdfs11 rules
//! over only that node's type assertions and the subclass edges reachable
//! upward from them that still lead to the target class. The full inference
//! closure of the graph is never materialized.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use strata_core::{Term, Triple, TripleKey};
use strata_reasoner::execute::FactSet;
use strata_reasoner::{ReasoningConfig, ScopedInference};
use strata_vocab::{rdf, rdfs};

use crate::constraints::ConstraintViolation;
use crate::error::{Result, ShaclError};
use crate::shape::{PropertyConstraint, ShapeDefinition};

/// Rules used to decide class membership
const MEMBERSHIP_RULES: [&str; 2] = ["rdfs9", "rdfs11"];

/// Max violation details carried by `ShaclError::ValidationFailed`
const MAX_ERROR_DETAILS: usize = 10;

/// Validates graphs against shape definitions
pub struct ShapeValidator {
    inference: Arc<dyn ScopedInference>,
    config: ReasoningConfig,
}

impl ShapeValidator {
    /// Create a validator using `inference` for class membership checks
    pub fn new(inference: Arc<dyn ScopedInference>) -> Self {
        Self {
            inference,
            config: ReasoningConfig::default(),
        }
    }

    /// Profile and baseline limits for the membership inference runs
    ///
    /// Each run's limits are raised to what its scope needs to close, so a
    /// well-formed hierarchy never fails on a limit.
    pub fn with_config(mut self, config: ReasoningConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate `graph` against every shape
    ///
    /// All violations are collected; the report conforms when there are none.
    /// Malformed shapes and inference failures are errors, not violations.
    pub fn validate(&self, shapes: &[ShapeDefinition], graph: &[Triple]) -> Result<ValidationReport> {
        let span = tracing::debug_span!("shacl_validate", shapes = shapes.len(), triples = graph.len());
        let _guard = span.enter();

        for shape in shapes {
            shape.check()?;
        }

        let facts = FactSet::from_triples(graph);
        let mut violations = Vec::new();

        for shape in shapes {
            let focus_nodes = self.focus_nodes(shape, &facts)?;
            tracing::debug!(
                target_class = %shape.target_class,
                focus_nodes = focus_nodes.len(),
                "resolved focus nodes"
            );

            for focus in &focus_nodes {
                for property in &shape.properties {
                    validate_property(focus, property, &facts, &mut violations);
                }
            }
        }

        Ok(ValidationReport::from_violations(violations))
    }

    /// Instances of the shape's target class, direct ones first
    ///
    /// Deduplicated, in first-seen order.
    pub fn focus_nodes(&self, shape: &ShapeDefinition, facts: &FactSet) -> Result<Vec<Term>> {
        let rdf_type = Term::iri(rdf::TYPE);
        let sub_class_of = Term::iri(rdfs::SUB_CLASS_OF);
        let target = &shape.target_class;

        let reaching = classes_reaching(target, facts, &sub_class_of);
        let mut seen: HashSet<Term> = HashSet::new();
        let mut focus_nodes = Vec::new();

        // Direct rdf:type assertions
        for triple in facts.get_by_po(&rdf_type, target) {
            if seen.insert(triple.subject.clone()) {
                focus_nodes.push(triple.subject.clone());
            }
        }

        // Other typed nodes: membership through the class hierarchy
        for typed in facts.get_by_p(&rdf_type) {
            let node = &typed.subject;
            if seen.contains(node) {
                continue;
            }
            seen.insert(node.clone());

            let scope = membership_scope(node, &reaching, facts, &rdf_type, &sub_class_of);
            if scope.edges == 0 {
                tracing::trace!(node = %node, "no path to target class; not a member");
                continue;
            }

            let config = scope.limits(&self.config);
            let result = self
                .inference
                .infer_scoped(&scope.triples, &MEMBERSHIP_RULES, &config)?;
            let member = result.contains(node, &rdf_type, target);
            tracing::trace!(
                node = %node,
                target_class = %target,
                scope = scope.triples.len(),
                member,
                "membership decided"
            );
            if member {
                focus_nodes.push(node.clone());
            }
        }

        Ok(focus_nodes)
    }
}

/// Triples needed to decide one node's class memberships
struct MembershipScope {
    triples: Vec<Triple>,
    /// Number of subClassOf edges in `triples`
    edges: usize,
    /// Distinct classes in `triples`
    classes: usize,
}

impl MembershipScope {
    /// `base` with limits raised to cover the closure of this scope
    ///
    /// Over `k` classes rdfs11 derives at most `k * k` edges and rdfs9 at most
    /// `k` types. Path lengths double each pass, so `ceil(log2 k)` passes close
    /// the scope, plus the confirming pass.
    fn limits(&self, base: &ReasoningConfig) -> ReasoningConfig {
        let k = self.classes;
        let max_inferences = k.saturating_mul(k).saturating_add(k);
        let max_depth = k.next_power_of_two().trailing_zeros() as usize + 2;
        base.clone()
            .with_max_inferences(base.max_inferences.max(max_inferences))
            .with_max_depth(base.max_depth.max(max_depth))
    }
}

/// Every class with a subClassOf path to `target`, `target` included
fn classes_reaching(target: &Term, facts: &FactSet, sub_class_of: &Term) -> HashSet<Term> {
    let mut reaching: HashSet<Term> = HashSet::new();
    let mut queue: VecDeque<Term> = VecDeque::new();
    reaching.insert(target.clone());
    queue.push_back(target.clone());

    while let Some(class) = queue.pop_front() {
        for edge in facts.get_by_po(sub_class_of, &class) {
            if reaching.insert(edge.subject.clone()) {
                queue.push_back(edge.subject.clone());
            }
        }
    }
    reaching
}

/// The node's type assertions plus the subClassOf edges reachable upward
/// from them, restricted to classes in `reaching`
fn membership_scope(
    node: &Term,
    reaching: &HashSet<Term>,
    facts: &FactSet,
    rdf_type: &Term,
    sub_class_of: &Term,
) -> MembershipScope {
    let mut triples: Vec<Triple> = Vec::new();
    let mut visited: HashSet<Term> = HashSet::new();
    let mut added: HashSet<TripleKey> = HashSet::new();
    let mut queue: VecDeque<Term> = VecDeque::new();

    for typed in facts.get_by_ps(rdf_type, node) {
        if !reaching.contains(&typed.object) {
            continue;
        }
        triples.push(typed.clone());
        if visited.insert(typed.object.clone()) {
            queue.push_back(typed.object.clone());
        }
    }

    let mut edges = 0;
    while let Some(class) = queue.pop_front() {
        for edge in facts.get_by_ps(sub_class_of, &class) {
            if !reaching.contains(&edge.object) {
                continue;
            }
            if added.insert(edge.key()) {
                triples.push(edge.clone());
                edges += 1;
            }
            if visited.insert(edge.object.clone()) {
                queue.push_back(edge.object.clone());
            }
        }
    }

    MembershipScope {
        triples,
        edges,
        classes: visited.len(),
    }
}

/// Check one property constraint on one focus node
fn validate_property(
    focus: &Term,
    property: &PropertyConstraint,
    facts: &FactSet,
    violations: &mut Vec<Violation>,
) {
    let values: Vec<&Term> = facts
        .get_by_ps(&property.path, focus)
        .map(|t| &t.object)
        .collect();

    for constraint in property.constraints() {
        for cv in constraint.validate(&values) {
            violations.push(Violation::from_constraint(focus, &property.path, cv));
        }
    }
}

/// One failed constraint on one focus node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub focus_node: Term,
    /// Constraint component: `minCount`, `maxCount` or `datatype`
    pub source_constraint: String,
    pub message: String,
    /// The constrained property
    pub path: Term,
    /// The offending value, for datatype violations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Term>,
}

impl Violation {
    fn from_constraint(focus: &Term, path: &Term, cv: ConstraintViolation) -> Self {
        Self {
            focus_node: focus.clone(),
            source_constraint: cv.constraint.component().to_string(),
            message: cv.message,
            path: path.clone(),
            value: cv.value,
        }
    }
}

/// SHACL validation report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// True exactly when there are no violations
    pub conforms: bool,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Create an empty conforming report
    pub fn conforming() -> Self {
        Self::from_violations(Vec::new())
    }

    pub fn from_violations(violations: Vec<Violation>) -> Self {
        Self {
            conforms: violations.is_empty(),
            violations,
        }
    }

    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    /// Turn a non-conforming report into `ShaclError::ValidationFailed`
    pub fn into_result(self) -> Result<Self> {
        if self.conforms {
            return Ok(self);
        }
        // Limit details to avoid huge errors
        let details: Vec<String> = self
            .violations
            .iter()
            .take(MAX_ERROR_DETAILS)
            .map(|v| format!("Node {}: property {}: {}", v.focus_node, v.path, v.message))
            .collect();
        Err(ShaclError::ValidationFailed {
            violation_count: self.violation_count(),
            details,
        })
    }
}
