//! RDF Vocabulary Constants for Strata
//!
//! This crate provides a centralized location for the vocabulary IRIs used by the
//! reasoner and the shape validator.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs` - RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `shacl` - SHACL vocabulary (http://www.w3.org/ns/shacl#)

/// RDF vocabulary constants
pub mod rdf {
    /// RDF namespace IRI
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

    /// rdf:Property IRI
    pub const PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// RDFS namespace IRI
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// rdfs:subClassOf IRI
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

    /// rdfs:subPropertyOf IRI
    pub const SUB_PROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";

    /// rdfs:domain IRI
    pub const DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";

    /// rdfs:range IRI
    pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";

    /// rdfs:Class IRI
    pub const CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
}

/// XSD vocabulary constants
pub mod xsd {
    /// XSD namespace IRI
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:long IRI
    pub const LONG: &str = "http://www.w3.org/2001/XMLSchema#long";

    /// xsd:int IRI
    pub const INT: &str = "http://www.w3.org/2001/XMLSchema#int";

    /// xsd:short IRI
    pub const SHORT: &str = "http://www.w3.org/2001/XMLSchema#short";

    /// xsd:byte IRI
    pub const BYTE: &str = "http://www.w3.org/2001/XMLSchema#byte";

    /// xsd:unsignedLong IRI
    pub const UNSIGNED_LONG: &str = "http://www.w3.org/2001/XMLSchema#unsignedLong";

    /// xsd:unsignedInt IRI
    pub const UNSIGNED_INT: &str = "http://www.w3.org/2001/XMLSchema#unsignedInt";

    /// xsd:unsignedShort IRI
    pub const UNSIGNED_SHORT: &str = "http://www.w3.org/2001/XMLSchema#unsignedShort";

    /// xsd:unsignedByte IRI
    pub const UNSIGNED_BYTE: &str = "http://www.w3.org/2001/XMLSchema#unsignedByte";

    /// xsd:nonNegativeInteger IRI
    pub const NON_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";

    /// xsd:positiveInteger IRI
    pub const POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#positiveInteger";

    /// xsd:nonPositiveInteger IRI
    pub const NON_POSITIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonPositiveInteger";

    /// xsd:negativeInteger IRI
    pub const NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#negativeInteger";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:float IRI
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:dateTime IRI
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    /// xsd:date IRI
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    /// Check if a datatype IRI is an integer-family type
    #[inline]
    pub fn is_integer_family(datatype_iri: &str) -> bool {
        matches!(
            datatype_iri,
            INTEGER
                | LONG
                | INT
                | SHORT
                | BYTE
                | UNSIGNED_LONG
                | UNSIGNED_INT
                | UNSIGNED_SHORT
                | UNSIGNED_BYTE
                | NON_NEGATIVE_INTEGER
                | POSITIVE_INTEGER
                | NON_POSITIVE_INTEGER
                | NEGATIVE_INTEGER
        )
    }

    /// Check if a datatype IRI is a floating point type
    #[inline]
    pub fn is_float_family(datatype_iri: &str) -> bool {
        matches!(datatype_iri, FLOAT | DOUBLE)
    }

    /// Get the valid range bounds for an integer subtype as (min, max) inclusive.
    ///
    /// Returns `None` for unbounded types (xsd:integer) or non-integer types.
    /// Sign-constrained types are bounded to the i128 range.
    #[inline]
    pub fn integer_bounds(datatype_iri: &str) -> Option<(i128, i128)> {
        match datatype_iri {
            BYTE => Some((i8::MIN as i128, i8::MAX as i128)),
            SHORT => Some((i16::MIN as i128, i16::MAX as i128)),
            INT => Some((i32::MIN as i128, i32::MAX as i128)),
            LONG => Some((i64::MIN as i128, i64::MAX as i128)),
            UNSIGNED_BYTE => Some((0, u8::MAX as i128)),
            UNSIGNED_SHORT => Some((0, u16::MAX as i128)),
            UNSIGNED_INT => Some((0, u32::MAX as i128)),
            UNSIGNED_LONG => Some((0, u64::MAX as i128)),
            POSITIVE_INTEGER => Some((1, i128::MAX)),
            NON_NEGATIVE_INTEGER => Some((0, i128::MAX)),
            NEGATIVE_INTEGER => Some((i128::MIN, -1)),
            NON_POSITIVE_INTEGER => Some((i128::MIN, 0)),
            _ => None,
        }
    }

    /// Get the local name portion of a datatype IRI (e.g., "integer" from xsd:integer)
    #[inline]
    pub fn datatype_local_name(datatype_iri: &str) -> Option<&str> {
        datatype_iri.rsplit('#').next()
    }
}

/// SHACL vocabulary constants
///
/// Only the shape constructs the validator understands are listed here.
pub mod shacl {
    /// SHACL namespace IRI
    pub const NS: &str = "http://www.w3.org/ns/shacl#";

    /// sh:NodeShape IRI
    pub const NODE_SHAPE: &str = "http://www.w3.org/ns/shacl#NodeShape";

    /// sh:targetClass IRI
    pub const TARGET_CLASS: &str = "http://www.w3.org/ns/shacl#targetClass";

    /// sh:property IRI
    pub const PROPERTY: &str = "http://www.w3.org/ns/shacl#property";

    /// sh:path IRI
    pub const PATH: &str = "http://www.w3.org/ns/shacl#path";

    /// sh:minCount IRI
    pub const MIN_COUNT: &str = "http://www.w3.org/ns/shacl#minCount";

    /// sh:maxCount IRI
    pub const MAX_COUNT: &str = "http://www.w3.org/ns/shacl#maxCount";

    /// sh:datatype IRI
    pub const DATATYPE: &str = "http://www.w3.org/ns/shacl#datatype";
}

/// Local names of the SHACL constraint components, as reported in
/// validation results.
///
/// # Example
/// ```
/// use strata_vocab::shacl_names;
///
/// assert_eq!(shacl_names::MIN_COUNT, "minCount");
/// assert_eq!(shacl_names::DATATYPE, "datatype");
/// ```
pub mod shacl_names {
    /// minCount local name
    pub const MIN_COUNT: &str = "minCount";

    /// maxCount local name
    pub const MAX_COUNT: &str = "maxCount";

    /// datatype local name
    pub const DATATYPE: &str = "datatype";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_family() {
        assert!(xsd::is_integer_family(xsd::INTEGER));
        assert!(xsd::is_integer_family(xsd::UNSIGNED_BYTE));
        assert!(!xsd::is_integer_family(xsd::DECIMAL));
        assert!(!xsd::is_integer_family(xsd::STRING));
    }

    #[test]
    fn test_integer_bounds() {
        assert_eq!(xsd::integer_bounds(xsd::BYTE), Some((-128, 127)));
        assert_eq!(xsd::integer_bounds(xsd::INTEGER), None);
        assert_eq!(xsd::integer_bounds(xsd::NEGATIVE_INTEGER).map(|b| b.1), Some(-1));
    }

    #[test]
    fn test_datatype_local_name() {
        assert_eq!(xsd::datatype_local_name(xsd::INTEGER), Some("integer"));
        assert_eq!(xsd::datatype_local_name(xsd::DATE_TIME), Some("dateTime"));
    }
}
