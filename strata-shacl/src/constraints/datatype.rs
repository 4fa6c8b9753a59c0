//! Datatype constraint validator (sh:datatype)
//!
//! A value conforms when it is a literal whose datatype IRI equals the
//! expected one and whose lexical form is valid for that datatype. Lexical
//! forms are checked for the integer family (including range bounds),
//! xsd:decimal, xsd:float/xsd:double and xsd:boolean; other datatypes accept
//! any lexical form.

use super::{Constraint, ConstraintViolation};
use strata_core::Term;
use strata_vocab::xsd;

/// Validate sh:datatype constraint for one value
pub fn validate_datatype(value: &Term, expected_dt: &str) -> Option<ConstraintViolation> {
    let expected_name = xsd::datatype_local_name(expected_dt).unwrap_or(expected_dt);

    let message = match value.as_literal() {
        None => format!(
            "Expected a literal of datatype {} but found {}",
            expected_name, value
        ),
        Some(lit) if lit.datatype.as_ref() != expected_dt => format!(
            "Expected datatype {} but found {}",
            expected_name,
            xsd::datatype_local_name(&lit.datatype).unwrap_or(&lit.datatype)
        ),
        Some(lit) if !is_valid_lexical(&lit.lexical, expected_dt) => format!(
            "Value \"{}\" is not a valid {}",
            lit.lexical, expected_name
        ),
        Some(_) => return None,
    };

    Some(ConstraintViolation {
        constraint: Constraint::Datatype(expected_dt.to_string()),
        value: Some(value.clone()),
        message,
    })
}

/// Check a lexical form against the datatypes whose syntax is enforced
pub fn is_valid_lexical(lexical: &str, datatype: &str) -> bool {
    if xsd::is_integer_family(datatype) {
        is_valid_integer(lexical, datatype)
    } else if xsd::is_float_family(datatype) {
        is_valid_float(lexical)
    } else {
        match datatype {
            xsd::DECIMAL => is_valid_decimal(lexical),
            xsd::BOOLEAN => matches!(lexical, "true" | "false" | "1" | "0"),
            _ => true,
        }
    }
}

fn strip_sign(lexical: &str) -> (bool, &str) {
    match lexical.as_bytes().first() {
        Some(b'-') => (true, &lexical[1..]),
        Some(b'+') => (false, &lexical[1..]),
        _ => (false, lexical),
    }
}

fn is_valid_integer(lexical: &str, datatype: &str) -> bool {
    let (negative, digits) = strip_sign(lexical);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let Some((min, max)) = xsd::integer_bounds(datatype) else {
        return true;
    };
    match lexical.parse::<i128>() {
        Ok(v) => v >= min && v <= max,
        // Beyond i128: only the sign-constrained types are unbounded in magnitude
        Err(_) => {
            if negative {
                min == i128::MIN
            } else {
                max == i128::MAX
            }
        }
    }
}

fn is_valid_decimal(lexical: &str) -> bool {
    let (_, body) = strip_sign(lexical);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((i, f)) => (i, f),
        None => (body, ""),
    };
    (!int_part.is_empty() || !frac_part.is_empty())
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.bytes().all(|b| b.is_ascii_digit())
}

fn is_valid_float(lexical: &str) -> bool {
    if matches!(lexical, "INF" | "+INF" | "-INF" | "NaN") {
        return true;
    }
    // Rust also accepts "inf" and "nan" spellings, which XSD does not
    if lexical
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E')
    {
        return false;
    }
    lexical.parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datatype_match() {
        assert!(validate_datatype(&Term::integer(30), xsd::INTEGER).is_none());
        assert!(validate_datatype(&Term::string("hello"), xsd::STRING).is_none());
    }

    #[test]
    fn test_datatype_mismatch() {
        let violation = validate_datatype(&Term::string("thirty"), xsd::INTEGER).unwrap();
        assert_eq!(violation.constraint, Constraint::Datatype(xsd::INTEGER.to_string()));
        assert_eq!(violation.value, Some(Term::string("thirty")));
        assert!(violation.message.contains("integer"));
        assert!(violation.message.contains("string"));
    }

    #[test]
    fn test_iri_and_blank_never_conform() {
        assert!(validate_datatype(&Term::iri("http://example.org/x"), xsd::STRING).is_some());
        assert!(validate_datatype(&Term::blank("b0"), xsd::STRING).is_some());
    }

    #[test]
    fn test_ill_formed_lexical() {
        let bad = Term::typed("thirty", xsd::INTEGER);
        let violation = validate_datatype(&bad, xsd::INTEGER).unwrap();
        assert!(violation.message.contains("not a valid integer"));
    }

    #[test]
    fn test_integer_bounds() {
        assert!(is_valid_lexical("127", xsd::BYTE));
        assert!(!is_valid_lexical("128", xsd::BYTE));
        assert!(is_valid_lexical("+42", xsd::INTEGER));
        assert!(!is_valid_lexical("-1", xsd::NON_NEGATIVE_INTEGER));
        assert!(!is_valid_lexical("0", xsd::POSITIVE_INTEGER));
        assert!(is_valid_lexical(
            "123456789012345678901234567890123456789012",
            xsd::INTEGER
        ));
        assert!(is_valid_lexical(
            "123456789012345678901234567890123456789012",
            xsd::POSITIVE_INTEGER
        ));
        assert!(!is_valid_lexical(
            "-123456789012345678901234567890123456789012",
            xsd::POSITIVE_INTEGER
        ));
        assert!(!is_valid_lexical("1.0", xsd::INTEGER));
        assert!(!is_valid_lexical("", xsd::INTEGER));
    }

    #[test]
    fn test_decimal_float_boolean() {
        assert!(is_valid_lexical("-1.50", xsd::DECIMAL));
        assert!(is_valid_lexical(".5", xsd::DECIMAL));
        assert!(!is_valid_lexical("1e3", xsd::DECIMAL));
        assert!(!is_valid_lexical(".", xsd::DECIMAL));

        assert!(is_valid_lexical("1e3", xsd::DOUBLE));
        assert!(is_valid_lexical("-INF", xsd::FLOAT));
        assert!(is_valid_lexical("NaN", xsd::DOUBLE));
        assert!(!is_valid_lexical("inf", xsd::DOUBLE));
        assert!(!is_valid_lexical("abc", xsd::DOUBLE));

        assert!(is_valid_lexical("true", xsd::BOOLEAN));
        assert!(is_valid_lexical("0", xsd::BOOLEAN));
        assert!(!is_valid_lexical("yes", xsd::BOOLEAN));
    }

    #[test]
    fn test_other_datatypes_accept_any_lexical() {
        assert!(is_valid_lexical("not a date", xsd::DATE));
        let value = Term::typed("whatever", "http://example.org/customType");
        assert!(validate_datatype(&value, "http://example.org/customType").is_none());
    }
}
