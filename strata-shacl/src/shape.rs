//! Shape definitions
//!
//! A [`ShapeDefinition`] targets every instance of one class and lists the
//! property constraints those instances must satisfy.

use serde::{Deserialize, Serialize};
use strata_core::Term;

use crate::constraints::Constraint;
use crate::error::{Result, ShaclError};

/// Constraints on the values of one property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyConstraint {
    /// The constrained property
    pub path: Term,
    /// Required datatype IRI of every value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_count: Option<usize>,
}

impl PropertyConstraint {
    pub fn new(path: Term) -> Self {
        Self {
            path,
            datatype: None,
            min_count: None,
            max_count: None,
        }
    }

    pub fn with_datatype(mut self, datatype: impl Into<String>) -> Self {
        self.datatype = Some(datatype.into());
        self
    }

    pub fn with_min_count(mut self, min: usize) -> Self {
        self.min_count = Some(min);
        self
    }

    pub fn with_max_count(mut self, max: usize) -> Self {
        self.max_count = Some(max);
        self
    }

    /// Constraints in evaluation order: cardinality first, then datatype
    pub fn constraints(&self) -> Vec<Constraint> {
        let mut out = Vec::with_capacity(3);
        if let Some(min) = self.min_count {
            out.push(Constraint::MinCount(min));
        }
        if let Some(max) = self.max_count {
            out.push(Constraint::MaxCount(max));
        }
        if let Some(dt) = &self.datatype {
            out.push(Constraint::Datatype(dt.clone()));
        }
        out
    }
}

/// A node shape targeting all instances of `target_class`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeDefinition {
    /// Shape node, when the shape was read from a graph
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Term>,
    pub target_class: Term,
    #[serde(default)]
    pub properties: Vec<PropertyConstraint>,
}

impl ShapeDefinition {
    pub fn new(target_class: Term) -> Self {
        Self {
            id: None,
            target_class,
            properties: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: Term) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_property(mut self, property: PropertyConstraint) -> Self {
        self.properties.push(property);
        self
    }

    /// Name used in error messages: the shape id, or the target class
    pub fn label(&self) -> String {
        match &self.id {
            Some(id) => id.to_string(),
            None => format!("shape for {}", self.target_class),
        }
    }

    /// Reject shapes no data could ever satisfy
    pub fn check(&self) -> Result<()> {
        for property in &self.properties {
            if let (Some(min), Some(max)) = (property.min_count, property.max_count) {
                if min > max {
                    return Err(ShaclError::invalid_constraint(
                        self.label(),
                        format!(
                            "minCount {} exceeds maxCount {} on path {}",
                            min, max, property.path
                        ),
                    ));
                }
            }
        }
        Ok(())
    }
}
