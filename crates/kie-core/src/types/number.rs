//! Numeric leaves of the value model
//!
//! Text-based interchange (JSON) cannot tell integers, floats and decimals
//! apart, so numbers decoded from it arrive untyped (`Int`, `UInt`, `Float`).
//! `Number::to_decimal` turns any variant into the canonical `Decimal` form.

use crate::error::{CoreError, Result};
use bigdecimal::num_bigint::BigInt;
use bigdecimal::num_traits::ToPrimitive;
use bigdecimal::BigDecimal;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Significant digits kept when a value has to be rounded (IEEE 754 decimal128).
pub const DECIMAL128_PRECISION: u64 = 34;

/// Numeric value
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// Signed integer (8 to 64 bits)
    Int(i64),
    /// Unsigned integer that does not fit an `i64`
    UInt(u64),
    /// Arbitrary-precision integer
    BigInt(BigInt),
    /// Binary floating point
    Float(f64),
    /// Numeric literal carried as text
    Text(String),
    /// Canonical decimal
    Decimal(BigDecimal),
}

impl Number {
    /// Whether this number is already in canonical decimal form
    pub fn is_decimal(&self) -> bool {
        matches!(self, Number::Decimal(_))
    }

    /// Convert to the canonical decimal representation.
    ///
    /// Integers convert exactly. Text is parsed after stripping leading zeros.
    /// Floats go through their exact binary expansion rounded to
    /// [`DECIMAL128_PRECISION`] digits, so `0.1` does not come back as `0.1`.
    pub fn to_decimal(&self) -> Result<BigDecimal> {
        match self {
            Number::Int(v) => Ok(BigDecimal::from(*v)),
            Number::UInt(v) => Ok(BigDecimal::from(*v)),
            Number::BigInt(v) => BigDecimal::from_str(&v.to_string())
                .map_err(|e| CoreError::InvalidNumber(format!("{}: {}", v, e))),
            Number::Float(v) => BigDecimal::try_from(*v)
                .map(round_to_decimal128)
                .map_err(|e| CoreError::InvalidNumber(format!("float {}: {}", v, e))),
            Number::Text(text) => parse_decimal_text(text),
            Number::Decimal(v) => Ok(v.clone()),
        }
    }

    /// Lossy conversion to `f64`
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Number::Int(v) => Some(*v as f64),
            Number::UInt(v) => Some(*v as f64),
            Number::BigInt(v) => v.to_f64(),
            Number::Float(v) => Some(*v),
            Number::Text(text) => text.parse().ok(),
            Number::Decimal(v) => v.to_f64(),
        }
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::Int(v.into())
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v)
    }
}

impl From<u64> for Number {
    fn from(v: u64) -> Self {
        match i64::try_from(v) {
            Ok(v) => Number::Int(v),
            Err(_) => Number::UInt(v),
        }
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl From<BigInt> for Number {
    fn from(v: BigInt) -> Self {
        Number::BigInt(v)
    }
}

impl From<BigDecimal> for Number {
    fn from(v: BigDecimal) -> Self {
        Number::Decimal(v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::UInt(v) => write!(f, "{}", v),
            Number::BigInt(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{}", v),
            Number::Text(v) => write!(f, "{}", v),
            Number::Decimal(v) => write!(f, "{}", v),
        }
    }
}

fn round_to_decimal128(value: BigDecimal) -> BigDecimal {
    if value.digits() > DECIMAL128_PRECISION {
        value.with_prec(DECIMAL128_PRECISION)
    } else {
        value
    }
}

/// Parse a numeric literal, dropping leading zeros so "007" reads as 7.
fn parse_decimal_text(text: &str) -> Result<BigDecimal> {
    let stripped = strip_leading_zeros(text);
    BigDecimal::from_str(&stripped)
        .map(round_to_decimal128)
        .map_err(|e| CoreError::InvalidNumber(format!("'{}': {}", text, e)))
}

fn strip_leading_zeros(text: &str) -> String {
    let stripped = text.trim_start_matches('0');
    if stripped.len() == text.len() {
        return text.to_string();
    }
    match stripped.chars().next() {
        Some(c) if c.is_ascii_digit() => stripped.to_string(),
        // keep a single zero in front of "", ".5" or "e3"
        _ => format!("0{}", stripped),
    }
}

/// Typed wire form used by non human-readable formats
#[derive(Serialize, Deserialize)]
#[serde(remote = "Number")]
enum TaggedNumber {
    Int(i64),
    UInt(u64),
    #[serde(with = "bigint_text")]
    BigInt(BigInt),
    Float(f64),
    Text(String),
    Decimal(BigDecimal),
}

mod bigint_text {
    use bigdecimal::num_bigint::BigInt;
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<BigInt, D::Error> {
        let text = String::deserialize(deserializer)?;
        BigInt::from_str(&text).map_err(de::Error::custom)
    }
}

/// Key under which serde_json hands over numbers it keeps as raw text.
pub(crate) const JSON_NUMBER_TOKEN: &str = "$serde_json::private::Number";

/// Write a numeric literal as an unquoted JSON number, digit for digit.
fn serialize_literal<S: Serializer>(text: &str, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    let literal = serde_json::Number::from_str(text).map_err(ser::Error::custom)?;
    literal.serialize(serializer)
}

/// Read an untyped JSON literal: integers stay integers at any size,
/// anything with a fraction or exponent becomes a float.
pub(crate) fn untyped_literal(text: &str) -> Option<Number> {
    if text.contains(|c| matches!(c, '.' | 'e' | 'E')) {
        return text.parse::<f64>().ok().map(Number::Float);
    }
    if let Ok(v) = text.parse::<i64>() {
        Some(Number::Int(v))
    } else if let Ok(v) = text.parse::<u64>() {
        Some(Number::UInt(v))
    } else {
        BigInt::from_str(text).ok().map(Number::BigInt)
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if !serializer.is_human_readable() {
            return TaggedNumber::serialize(self, serializer);
        }

        // Plain numbers only: the receiving side sees them untyped
        match self {
            Number::Int(v) => serializer.serialize_i64(*v),
            Number::UInt(v) => serializer.serialize_u64(*v),
            Number::Float(v) => serializer.serialize_f64(*v),
            Number::BigInt(v) => serialize_literal(&v.to_string(), serializer),
            Number::Text(text) => match serde_json::Number::from_str(&strip_leading_zeros(text)) {
                Ok(literal) => literal.serialize(serializer),
                Err(_) => serializer.serialize_str(text),
            },
            Number::Decimal(v) => {
                if v.is_integer() {
                    let (digits, _) = v.with_scale(0).into_bigint_and_exponent();
                    serialize_literal(&digits.to_string(), serializer)
                } else {
                    serialize_literal(&v.to_string(), serializer)
                }
            }
        }
    }
}

pub(crate) struct NumberVisitor;

impl<'de> Visitor<'de> for NumberVisitor {
    type Value = Number;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a numeric literal")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Number, E> {
        Ok(Number::Int(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Number, E> {
        Ok(Number::from(v))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Number, E> {
        Ok(Number::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Number, E> {
        Ok(Number::Text(v.to_string()))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Number, A::Error> {
        match access.next_key::<String>()? {
            Some(key) if key == JSON_NUMBER_TOKEN => {
                let text: String = access.next_value()?;
                untyped_literal(&text)
                    .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Str(&text), &self))
            }
            _ => Err(de::Error::invalid_type(de::Unexpected::Map, &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(NumberVisitor)
        } else {
            TaggedNumber::deserialize(deserializer)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> BigDecimal {
        BigDecimal::from_str(text).unwrap()
    }

    #[test]
    fn test_integers_convert_exactly() {
        assert_eq!(Number::Int(10).to_decimal().unwrap(), dec("10"));
        assert_eq!(Number::Int(-42).to_decimal().unwrap(), dec("-42"));
        assert_eq!(
            Number::UInt(u64::MAX).to_decimal().unwrap(),
            dec("18446744073709551615")
        );
    }

    #[test]
    fn test_big_integer_keeps_every_digit() {
        let big = BigInt::from_str("123456789012345678901234567890123456789012").unwrap();
        let decimal = Number::BigInt(big).to_decimal().unwrap();
        assert_eq!(decimal, dec("123456789012345678901234567890123456789012"));
        assert_eq!(decimal.digits(), 42);
    }

    #[test]
    fn test_text_strips_leading_zeros() {
        assert_eq!(Number::Text("007".into()).to_decimal().unwrap(), dec("7"));
        assert_eq!(Number::Text("0".into()).to_decimal().unwrap(), dec("0"));
        assert_eq!(Number::Text("000".into()).to_decimal().unwrap(), dec("0"));
        assert_eq!(Number::Text("00.25".into()).to_decimal().unwrap(), dec("0.25"));
    }

    #[test]
    fn test_text_rounds_to_decimal128() {
        let decimal = Number::Text("1.23456789012345678901234567890123456789".into())
            .to_decimal()
            .unwrap();
        assert_eq!(decimal.digits(), DECIMAL128_PRECISION);
        assert_eq!(decimal, dec("1.234567890123456789012345678901235"));
    }

    #[test]
    fn test_invalid_text_is_rejected() {
        let err = Number::Text("twelve".into()).to_decimal().unwrap_err();
        assert!(err.to_string().contains("Invalid number"));
    }

    #[test]
    fn test_float_path_is_lossy() {
        // 0.1 has no exact binary form; the decimal carries the f64 expansion
        let decimal = Number::Float(0.1).to_decimal().unwrap();
        assert_ne!(decimal, dec("0.1"));
        assert_eq!(decimal, dec("0.1000000000000000055511151231257827"));
    }

    #[test]
    fn test_float_with_exact_binary_form() {
        assert_eq!(Number::Float(2.5).to_decimal().unwrap(), dec("2.5"));
        assert_eq!(Number::Float(-1024.0).to_decimal().unwrap(), dec("-1024"));
        assert_eq!(Number::Float(0.0).to_decimal().unwrap(), dec("0"));
    }

    #[test]
    fn test_non_finite_float_is_rejected() {
        assert!(Number::Float(f64::NAN).to_decimal().is_err());
        assert!(Number::Float(f64::INFINITY).to_decimal().is_err());
    }

    #[test]
    fn test_decimal_is_unchanged() {
        let value = dec("3.14159265358979323846264338327950288419716939937510");
        assert_eq!(Number::Decimal(value.clone()).to_decimal().unwrap(), value);
    }

    #[test]
    fn test_from_u64_prefers_int() {
        assert_eq!(Number::from(5u64), Number::Int(5));
        assert_eq!(Number::from(u64::MAX), Number::UInt(u64::MAX));
    }

    #[test]
    fn test_json_writes_plain_numbers() {
        assert_eq!(serde_json::to_string(&Number::Decimal(dec("15"))).unwrap(), "15");
        assert_eq!(serde_json::to_string(&Number::Decimal(dec("2.5"))).unwrap(), "2.5");
        assert_eq!(serde_json::to_string(&Number::Text("42".into())).unwrap(), "42");
    }

    #[test]
    fn test_json_reads_untyped_numbers() {
        assert_eq!(serde_json::from_str::<Number>("15").unwrap(), Number::Int(15));
        assert_eq!(serde_json::from_str::<Number>("-3").unwrap(), Number::Int(-3));
        assert_eq!(serde_json::from_str::<Number>("1.5").unwrap(), Number::Float(1.5));
    }

    #[test]
    fn test_json_keeps_digits_beyond_f64() {
        let digits = "123456789012345678901234567";
        assert_eq!(serde_json::to_string(&Number::Decimal(dec(digits))).unwrap(), digits);
        assert_eq!(
            serde_json::to_string(&Number::BigInt(BigInt::from_str(digits).unwrap())).unwrap(),
            digits
        );
        assert_eq!(
            serde_json::to_string(&Number::Decimal(dec("0.1000000000000000055511151231257827"))).unwrap(),
            "0.1000000000000000055511151231257827"
        );

        let read: Number = serde_json::from_str(digits).unwrap();
        assert_eq!(read, Number::BigInt(BigInt::from_str(digits).unwrap()));
        assert_eq!(read.to_decimal().unwrap(), dec(digits));
        assert_eq!(
            serde_json::from_str::<Number>("18446744073709551615").unwrap(),
            Number::UInt(u64::MAX)
        );
    }

    #[test]
    fn test_json_text_written_as_literal_when_numeric() {
        assert_eq!(serde_json::to_string(&Number::Text("007".into())).unwrap(), "7");
        assert_eq!(serde_json::to_string(&Number::Text("12abc".into())).unwrap(), r#""12abc""#);
    }

    #[test]
    fn test_msgpack_keeps_decimal_type() {
        let original = Number::Decimal(dec("0.1"));
        let bytes = rmp_serde::to_vec_named(&original).unwrap();
        let decoded: Number = rmp_serde::from_slice(&bytes).unwrap();
        assert_eq!(decoded, original);
    }
}
