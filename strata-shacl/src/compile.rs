//! Shape compilation from SHACL triples
//!
//! This module reads node shapes written in the SHACL vocabulary
//! (`sh:targetClass`, `sh:property`, `sh:path`, `sh:datatype`,
//! `sh:minCount`, `sh:maxCount`) into [`ShapeDefinition`]s.
//! Other SHACL predicates are ignored.

use hashbrown::HashMap;
use strata_core::{Term, Triple};
use strata_vocab::shacl;

use crate::error::{Result, ShaclError};
use crate::shape::{PropertyConstraint, ShapeDefinition};

/// Builds shape definitions from triples
#[derive(Debug, Default)]
pub struct ShapeCompiler {
    /// Node shape ids in first-seen order
    shape_order: Vec<Term>,
    shapes: HashMap<Term, ShapeData>,
    property_shapes: HashMap<Term, PropertyShapeData>,
}

#[derive(Debug, Default)]
struct ShapeData {
    targets: Vec<Term>,
    property_shape_ids: Vec<Term>,
}

#[derive(Debug, Default)]
struct PropertyShapeData {
    path: Option<Term>,
    datatype: Option<String>,
    min_count: Option<usize>,
    max_count: Option<usize>,
}

impl ShapeCompiler {
    /// Create a new shape compiler
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile every node shape found in `triples`
    ///
    /// A node shape with several `sh:targetClass` values yields one
    /// definition per target class. Shapes without a target are skipped.
    pub fn compile(triples: &[Triple]) -> Result<Vec<ShapeDefinition>> {
        let mut compiler = Self::new();
        for triple in triples {
            compiler.process_triple(triple)?;
        }
        compiler.finalize()
    }

    fn process_triple(&mut self, triple: &Triple) -> Result<()> {
        let Some(pred) = triple.predicate.as_iri() else {
            return Ok(());
        };

        match pred {
            shacl::TARGET_CLASS => {
                if !triple.object.is_resource() {
                    return Err(ShaclError::compilation(
                        &triple.subject,
                        format!("sh:targetClass must be a class, found {}", triple.object),
                    ));
                }
                self.get_or_create_shape(&triple.subject)
                    .targets
                    .push(triple.object.clone());
            }

            // Property reference from node shape to property shape
            shacl::PROPERTY => {
                self.get_or_create_shape(&triple.subject)
                    .property_shape_ids
                    .push(triple.object.clone());
                self.get_or_create_property_shape(&triple.object);
            }

            shacl::PATH => {
                if !triple.object.is_iri() {
                    return Err(ShaclError::compilation(
                        &triple.subject,
                        format!("sh:path must be an IRI, found {}", triple.object),
                    ));
                }
                let ps = self.get_or_create_property_shape(&triple.subject);
                if ps.path.replace(triple.object.clone()).is_some() {
                    return Err(ShaclError::compilation(
                        &triple.subject,
                        "property shape has more than one sh:path",
                    ));
                }
            }

            shacl::DATATYPE => {
                let Some(dt) = triple.object.as_iri() else {
                    return Err(ShaclError::compilation(
                        &triple.subject,
                        format!("sh:datatype must be an IRI, found {}", triple.object),
                    ));
                };
                let ps = self.get_or_create_property_shape(&triple.subject);
                if ps.datatype.replace(dt.to_string()).is_some() {
                    return Err(ShaclError::compilation(
                        &triple.subject,
                        "property shape has more than one sh:datatype",
                    ));
                }
            }

            // Cardinality constraints
            shacl::MIN_COUNT => {
                let n = parse_count(triple, "sh:minCount")?;
                let ps = self.get_or_create_property_shape(&triple.subject);
                if ps.min_count.replace(n).is_some() {
                    return Err(ShaclError::compilation(
                        &triple.subject,
                        "property shape has more than one sh:minCount",
                    ));
                }
            }
            shacl::MAX_COUNT => {
                let n = parse_count(triple, "sh:maxCount")?;
                let ps = self.get_or_create_property_shape(&triple.subject);
                if ps.max_count.replace(n).is_some() {
                    return Err(ShaclError::compilation(
                        &triple.subject,
                        "property shape has more than one sh:maxCount",
                    ));
                }
            }

            _ => {}
        }
        Ok(())
    }

    fn get_or_create_shape(&mut self, id: &Term) -> &mut ShapeData {
        if !self.shapes.contains_key(id) {
            self.shape_order.push(id.clone());
        }
        self.shapes.entry(id.clone()).or_default()
    }

    fn get_or_create_property_shape(&mut self, id: &Term) -> &mut PropertyShapeData {
        self.property_shapes.entry(id.clone()).or_default()
    }

    /// Finalize compilation and produce ShapeDefinition instances
    fn finalize(self) -> Result<Vec<ShapeDefinition>> {
        let Self {
            shape_order,
            shapes,
            property_shapes: ps_map,
        } = self;

        let mut compiled = Vec::new();

        for id in &shape_order {
            let Some(data) = shapes.get(id) else {
                continue;
            };
            if data.targets.is_empty() {
                tracing::debug!(shape = %id, "shape has no sh:targetClass; skipped");
                continue;
            }

            // Resolve property shapes
            let mut properties = Vec::with_capacity(data.property_shape_ids.len());
            for ps_id in &data.property_shape_ids {
                let Some(ps_data) = ps_map.get(ps_id) else {
                    continue;
                };
                let Some(path) = &ps_data.path else {
                    return Err(ShaclError::compilation(
                        ps_id,
                        format!("property shape of {} has no sh:path", id),
                    ));
                };
                properties.push(PropertyConstraint {
                    path: path.clone(),
                    datatype: ps_data.datatype.clone(),
                    min_count: ps_data.min_count,
                    max_count: ps_data.max_count,
                });
            }

            for target in &data.targets {
                let shape = ShapeDefinition {
                    id: Some(id.clone()),
                    target_class: target.clone(),
                    properties: properties.clone(),
                };
                shape.check()?;
                compiled.push(shape);
            }
        }

        Ok(compiled)
    }
}

/// Read a non-negative integer count from a literal object
fn parse_count(triple: &Triple, name: &str) -> Result<usize> {
    triple
        .object
        .as_literal()
        .and_then(|lit| lit.lexical.parse::<usize>().ok())
        .ok_or_else(|| {
            ShaclError::compilation(
                &triple.subject,
                format!("{} must be a non-negative integer, found {}", name, triple.object),
            )
        })
}
