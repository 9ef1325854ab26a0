//! Reusable field validators
//!
//! Each validator turns a raw form value into a typed value, or rejects it by
//! returning `None`. The schema attaches the user-facing message.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Validator: value must be a string with visible content
pub fn string() -> impl Fn(Option<&Value>) -> Option<String> + Send + Sync + Clone {
    |value: Option<&Value>| match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Validator: value is coerced to a decimal number
///
/// See [`coerce_number`] for the coercion table.
pub fn number() -> impl Fn(Option<&Value>) -> Option<Decimal> + Send + Sync + Clone {
    coerce_number
}

/// Refinement: number must be strictly greater than zero
pub fn positive() -> impl Fn(&Decimal) -> bool + Send + Sync + Clone {
    |num: &Decimal| num.is_sign_positive() && !num.is_zero()
}

/// Validator: value must be a string naming one of `T`'s tokens exactly
pub fn one_of<T: FromStr>() -> impl Fn(Option<&Value>) -> Option<T> + Send + Sync + Clone {
    |value: Option<&Value>| value.and_then(Value::as_str).and_then(|s| s.parse().ok())
}

/// Coerce a raw form value to a number.
///
/// - missing, `null` and blank strings become `0`
/// - booleans become `1` / `0`
/// - numbers and numeric strings (plain or scientific notation) parse exactly
/// - numerals outside `Decimal` range saturate to `Decimal::MAX` / `Decimal::MIN`,
///   or to `0` when they are too small to represent
/// - anything else is not a number
pub fn coerce_number(value: Option<&Value>) -> Option<Decimal> {
    match value {
        None | Some(Value::Null) => Some(Decimal::ZERO),
        Some(Value::Bool(b)) => Some(if *b { Decimal::ONE } else { Decimal::ZERO }),
        Some(Value::Number(n)) => parse_decimal(&n.to_string()),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(Decimal::ZERO)
            } else {
                parse_decimal(trimmed)
            }
        }
        Some(Value::Array(_)) | Some(Value::Object(_)) => None,
    }
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
        .or_else(|| saturate(s))
}

/// Clamp a well-formed numeral that `Decimal` cannot hold
fn saturate(s: &str) -> Option<Decimal> {
    let numeral = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !numeral {
        return None;
    }

    let approx: f64 = s.parse().ok()?;
    if approx.abs() < 1.0 {
        Some(Decimal::ZERO)
    } else if approx.is_sign_negative() {
        Some(Decimal::MIN)
    } else {
        Some(Decimal::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::invoice::InvoiceStatus;
    use serde_json::json;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    // === string() ===

    #[test]
    fn test_string_accepts_text() {
        let v = string();
        assert_eq!(v(Some(&json!("c1"))), Some("c1".to_string()));
    }

    #[test]
    fn test_string_rejects_missing_and_null() {
        let v = string();
        assert_eq!(v(None), None);
        assert_eq!(v(Some(&json!(null))), None);
    }

    #[test]
    fn test_string_rejects_blank() {
        let v = string();
        assert_eq!(v(Some(&json!(""))), None);
        assert_eq!(v(Some(&json!("   "))), None);
    }

    #[test]
    fn test_string_rejects_other_types() {
        let v = string();
        assert_eq!(v(Some(&json!(42))), None);
        assert_eq!(v(Some(&json!(["c1"]))), None);
    }

    // === coerce_number() ===

    #[test]
    fn test_coerce_numeric_strings() {
        assert_eq!(coerce_number(Some(&json!("45.00"))), Some(dec("45.00")));
        assert_eq!(coerce_number(Some(&json!(" 10.5 "))), Some(dec("10.5")));
        assert_eq!(coerce_number(Some(&json!("-3"))), Some(dec("-3")));
    }

    #[test]
    fn test_coerce_scientific_notation() {
        assert_eq!(coerce_number(Some(&json!("1e3"))), Some(dec("1000")));
        assert_eq!(coerce_number(Some(&json!("2.5e-1"))), Some(dec("0.25")));
    }

    #[test]
    fn test_coerce_json_numbers() {
        assert_eq!(coerce_number(Some(&json!(12))), Some(dec("12")));
        assert_eq!(coerce_number(Some(&json!(12.75))), Some(dec("12.75")));
    }

    #[test]
    fn test_coerce_empty_values_to_zero() {
        assert_eq!(coerce_number(None), Some(Decimal::ZERO));
        assert_eq!(coerce_number(Some(&json!(null))), Some(Decimal::ZERO));
        assert_eq!(coerce_number(Some(&json!(""))), Some(Decimal::ZERO));
    }

    #[test]
    fn test_coerce_booleans() {
        assert_eq!(coerce_number(Some(&json!(true))), Some(Decimal::ONE));
        assert_eq!(coerce_number(Some(&json!(false))), Some(Decimal::ZERO));
    }

    #[test]
    fn test_coerce_saturates_out_of_range_numerals() {
        let huge = "123456789012345678901234567890";
        assert_eq!(coerce_number(Some(&json!(huge))), Some(Decimal::MAX));
        assert_eq!(
            coerce_number(Some(&json!(format!("-{}", huge)))),
            Some(Decimal::MIN)
        );
        assert_eq!(coerce_number(Some(&json!("1e40"))), Some(Decimal::MAX));
        assert_eq!(coerce_number(Some(&json!(1e30))), Some(Decimal::MAX));
        assert_eq!(coerce_number(Some(&json!("1e-40"))), Some(Decimal::ZERO));
    }

    #[test]
    fn test_coerce_does_not_saturate_non_numerals() {
        assert_eq!(coerce_number(Some(&json!("inf"))), None);
        assert_eq!(coerce_number(Some(&json!("NaN"))), None);
        assert_eq!(coerce_number(Some(&json!("1e"))), None);
    }

    #[test]
    fn test_coerce_rejects_garbage() {
        assert_eq!(coerce_number(Some(&json!("abc"))), None);
        assert_eq!(coerce_number(Some(&json!("1,000"))), None);
        assert_eq!(coerce_number(Some(&json!({"n": 1}))), None);
    }

    // === positive() ===

    #[test]
    fn test_positive() {
        let check = positive();
        assert!(check(&dec("0.01")));
        assert!(check(&dec("45")));
        assert!(!check(&Decimal::ZERO));
        assert!(!check(&dec("-0.00")));
        assert!(!check(&dec("-5")));
    }

    // === one_of() ===

    #[test]
    fn test_one_of_parses_tokens() {
        let v = one_of::<InvoiceStatus>();
        assert_eq!(v(Some(&json!("paid"))), Some(InvoiceStatus::Paid));
        assert_eq!(v(Some(&json!("pending"))), Some(InvoiceStatus::Pending));
    }

    #[test]
    fn test_one_of_is_exact() {
        let v = one_of::<InvoiceStatus>();
        assert_eq!(v(Some(&json!("PAID"))), None);
        assert_eq!(v(Some(&json!(" paid"))), None);
        assert_eq!(v(Some(&json!("overdue"))), None);
    }

    #[test]
    fn test_one_of_rejects_non_strings() {
        let v = one_of::<InvoiceStatus>();
        assert_eq!(v(None), None);
        assert_eq!(v(Some(&json!(1))), None);
        assert_eq!(v(Some(&json!(true))), None);
    }
}
