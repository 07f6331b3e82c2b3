//! Numeric coercion of decoded results
//!
//! Under a number-ambiguous format every numeric leaf comes back as whatever
//! the decoder picked (integer, float, big integer). The pass walks a value
//! depth-first and replaces each numeric leaf with its canonical decimal.
//! Decimals are left alone, so running the pass twice changes nothing.

use crate::error::{ClientError, Result};
use kie_core::{DmnContext, DmnResultKs, Number, Value};
use std::mem;

/// Coerce the context and every decision result value of an evaluation result
pub fn coerce_result(result: &mut DmnResultKs) -> Result<()> {
    coerce_context(&mut result.dmn_context)?;
    for decision in result.decision_results.iter_mut() {
        coerce_value(&mut decision.result)?;
    }
    Ok(())
}

pub fn coerce_context(context: &mut DmnContext) -> Result<()> {
    for value in context.get_all_mut().values_mut() {
        coerce_value(value)?;
    }
    Ok(())
}

/// Replace numeric leaves of `value` in place
pub fn coerce_value(value: &mut Value) -> Result<()> {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => Ok(()),
        Value::Number(number) => coerce_number(number),
        Value::Array(items) => items.iter_mut().try_for_each(coerce_value),
        Value::Set(items) => {
            let mut members = mem::take(items);
            for member in members.iter_mut() {
                coerce_value(member)?;
            }
            // 1 and 1.0 collapse once both are decimals
            *value = Value::set(members);
            Ok(())
        }
        Value::Object(map) => map.values_mut().try_for_each(coerce_value),
    }
}

fn coerce_number(number: &mut Number) -> Result<()> {
    if number.is_decimal() {
        return Ok(());
    }
    let decimal = number
        .to_decimal()
        .map_err(|e| ClientError::Coercion(e.to_string()))?;
    *number = Number::Decimal(decimal);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_integer_becomes_exact_decimal() {
        let mut value = Value::Number(Number::Int(10));
        coerce_value(&mut value).unwrap();
        assert_eq!(value, Value::Number(Number::Decimal(10.into())));
    }

    #[test]
    fn test_nested_structures() {
        let mut inner = HashMap::new();
        inner.insert("Sum".to_string(), Value::from(15));
        inner.insert("label".to_string(), Value::from("total"));
        let mut value = Value::Array(vec![Value::Object(inner), Value::Null, Value::from(true)]);

        coerce_value(&mut value).unwrap();

        match &value {
            Value::Array(items) => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0].get("Sum").and_then(Value::as_number).map(Number::is_decimal), Some(true));
                assert_eq!(items[0].get("label"), Some(&Value::from("total")));
                assert_eq!(items[1], Value::Null);
            }
            other => panic!("Expected array, got {:?}", other),
        }
    }

    #[test]
    fn test_set_members_collapse() {
        let mut value = Value::Set(vec![Value::from(1), Value::from(1.0), Value::from(2)]);
        coerce_value(&mut value).unwrap();
        assert_eq!(
            value,
            Value::Set(vec![
                Value::Number(Number::Decimal(1.into())),
                Value::Number(Number::Decimal(2.into())),
            ])
        );
    }

    #[test]
    fn test_idempotent() {
        let mut value = Value::Array(vec![Value::from(0.1), Value::from(42), Value::from("x")]);
        coerce_value(&mut value).unwrap();
        let once = value.clone();
        coerce_value(&mut value).unwrap();
        assert_eq!(value, once);
    }

    #[test]
    fn test_non_finite_float_is_an_error() {
        let mut value = Value::from(f64::NAN);
        assert!(matches!(coerce_value(&mut value), Err(ClientError::Coercion(_))));
    }
}
