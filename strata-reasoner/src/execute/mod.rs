//! Rule execution over an indexed fact set
//!
//! ## Module Organization
//!
//! - `fact_set` - FactSet, the deduplicated and indexed working set
//! - `util` - Shared helper functions for rule implementations
//! - `property_rules` - Property RDFS rules (rdfs2, rdfs3, rdfs5, rdfs7)
//! - `class_rules` - Class hierarchy rules (rdfs9, rdfs11)

mod class_rules;
mod fact_set;
mod property_rules;
pub mod util;

// Re-export main types
pub use fact_set::FactSet;

// Re-export property rules
pub use property_rules::{
    apply_domain_rule, apply_range_rule, apply_sub_property_rule,
    apply_sub_property_transitivity_rule,
};

// Re-export class rules
pub use class_rules::{apply_subclass_rule, apply_subclass_transitivity_rule};

#[cfg(test)]
mod tests;
