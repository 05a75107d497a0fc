//! Calculator — operands, the four operations and their results.
//!
//! Integers stay integers through add, subtract and multiply as long as the
//! exact result fits in an `i64`; anything else is computed on `f64`.
//! Division always produces a real number.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{InvalidOperationError, MockServiceError};

/// A JSON number, keeping integers apart from reals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Integer(i64),
    Real(f64),
}

impl Number {
    /// The value as a real number.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(value) => value as f64,
            Self::Real(value) => value,
        }
    }

    /// Whether the value equals zero, integer or real.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(value) => value == 0,
            Self::Real(value) => value == 0.0,
        }
    }

    fn combine(
        self,
        other: Self,
        exact: fn(i64, i64) -> Option<i64>,
        real: fn(f64, f64) -> f64,
    ) -> Self {
        match (self, other) {
            (Self::Integer(lhs), Self::Integer(rhs)) => exact(lhs, rhs)
                .map_or_else(|| Self::Real(real(self.as_f64(), other.as_f64())), Self::Integer),
            _ => Self::Real(real(self.as_f64(), other.as_f64())),
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::Integer(0)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// One of the four calculator endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Every operation, in endpoint order.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Lowercase name, also the endpoint path segment.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Value used for a missing right-hand operand.
    #[must_use]
    pub fn default_rhs(self) -> Number {
        match self {
            Self::Divide => Number::Integer(1),
            Self::Add | Self::Subtract | Self::Multiply => Number::Integer(0),
        }
    }

    /// Apply the operation to the request operands, filling in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`MockServiceError::InvalidOperation`] when dividing by zero or
    /// when the result does not fit in a finite `f64`.
    pub fn apply(self, operands: Operands) -> Result<OperationResult, MockServiceError> {
        let a = operands.a.unwrap_or_default();
        let b = operands.b.unwrap_or_else(|| self.default_rhs());

        let result = match self {
            Self::Add => a.combine(b, i64::checked_add, |x, y| x + y),
            Self::Subtract => a.combine(b, i64::checked_sub, |x, y| x - y),
            Self::Multiply => a.combine(b, i64::checked_mul, |x, y| x * y),
            Self::Divide => {
                if b.is_zero() {
                    return Err(InvalidOperationError::DivisionByZero.into());
                }
                Number::Real(a.as_f64() / b.as_f64())
            }
        };
        if let Number::Real(value) = result
            && !value.is_finite()
        {
            return Err(InvalidOperationError::NonFiniteResult.into());
        }

        Ok(OperationResult {
            operation: self,
            result,
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Request body of every calculator endpoint. Both fields are optional;
/// `null` counts as missing.
///
/// Only a JSON object is accepted; other keys are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Operands {
    pub a: Option<Number>,
    pub b: Option<Number>,
}

impl<'de> Deserialize<'de> for Operands {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OperandsVisitor)
    }
}

struct OperandsVisitor;

impl<'de> Visitor<'de> for OperandsVisitor {
    type Value = Operands;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object with optional numeric `a` and `b`")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Operands, A::Error> {
        let mut operands = Operands::default();
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "a" => operands.a = map.next_value()?,
                "b" => operands.b = map.next_value()?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(operands)
    }
}

impl Operands {
    #[must_use]
    pub fn new(a: impl Into<Number>, b: impl Into<Number>) -> Self {
        Self {
            a: Some(a.into()),
            b: Some(b.into()),
        }
    }
}

/// Successful calculator response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperationResult {
    pub operation: Operation,
    pub result: Number,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(op: Operation, operands: Operands) -> Number {
        op.apply(operands).unwrap().result
    }

    #[test]
    fn should_add_integers_exactly() {
        assert_eq!(
            apply(Operation::Add, Operands::new(2, 3)),
            Number::Integer(5)
        );
    }

    #[test]
    fn should_subtract_into_negative() {
        assert_eq!(
            apply(Operation::Subtract, Operands::new(2, 7)),
            Number::Integer(-5)
        );
    }

    #[test]
    fn should_multiply_mixed_operands_as_real() {
        assert_eq!(
            apply(Operation::Multiply, Operands::new(3, 0.5)),
            Number::Real(1.5)
        );
    }

    #[test]
    fn should_fall_back_to_real_on_integer_overflow() {
        let result = apply(Operation::Add, Operands::new(i64::MAX, 1));
        assert!(matches!(result, Number::Real(_)));
    }

    #[test]
    fn should_default_missing_operands_to_zero() {
        assert_eq!(
            apply(Operation::Add, Operands::default()),
            Number::Integer(0)
        );
        assert_eq!(
            apply(
                Operation::Multiply,
                Operands {
                    a: Some(Number::Integer(4)),
                    b: None,
                }
            ),
            Number::Integer(0)
        );
    }

    #[test]
    fn should_default_missing_divisor_to_one() {
        let operands = Operands {
            a: Some(Number::Integer(7)),
            b: None,
        };
        assert_eq!(apply(Operation::Divide, operands), Number::Real(7.0));
    }

    #[test]
    fn should_divide_as_real_number() {
        assert_eq!(
            apply(Operation::Divide, Operands::new(10, 2)),
            Number::Real(5.0)
        );
        assert_eq!(
            apply(Operation::Divide, Operands::new(7, 2)),
            Number::Real(3.5)
        );
    }

    #[test]
    fn should_reject_division_by_integer_zero() {
        let result = Operation::Divide.apply(Operands::new(1, 0));
        assert!(matches!(
            result,
            Err(MockServiceError::InvalidOperation(
                InvalidOperationError::DivisionByZero
            ))
        ));
    }

    #[test]
    fn should_reject_division_by_real_zero() {
        let result = Operation::Divide.apply(Operands::new(1, 0.0));
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_result_overflowing_to_infinity() {
        let result = Operation::Multiply.apply(Operands::new(1e308, 10));
        assert!(matches!(
            result,
            Err(MockServiceError::InvalidOperation(
                InvalidOperationError::NonFiniteResult
            ))
        ));
    }

    #[test]
    fn should_reject_quotient_overflowing_to_infinity() {
        let result = Operation::Divide.apply(Operands::new(1e308, 1e-10));
        assert!(result.is_err());
    }

    #[test]
    fn should_deserialize_integers_and_reals() {
        let operands: Operands = serde_json::from_str(r#"{"a": 3, "b": 2.5}"#).unwrap();
        assert_eq!(operands.a, Some(Number::Integer(3)));
        assert_eq!(operands.b, Some(Number::Real(2.5)));
    }

    #[test]
    fn should_treat_null_as_missing() {
        let operands: Operands = serde_json::from_str(r#"{"a": null}"#).unwrap();
        assert_eq!(operands, Operands::default());
    }

    #[test]
    fn should_reject_non_numeric_operand() {
        let result: Result<Operands, _> = serde_json::from_str(r#"{"a": "3"}"#);
        assert!(result.is_err());
        let result: Result<Operands, _> = serde_json::from_str(r#"{"b": true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn should_reject_positional_operands() {
        let result: Result<Operands, _> = serde_json::from_str("[1, 2]");
        assert!(result.is_err());
    }

    #[test]
    fn should_ignore_unrelated_keys() {
        let operands: Operands = serde_json::from_str(r#"{"a": 1, "c": [true]}"#).unwrap();
        assert_eq!(operands.a, Some(Number::Integer(1)));
        assert_eq!(operands.b, None);
    }

    #[test]
    fn should_display_operation_as_endpoint_name() {
        let names: Vec<String> = Operation::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["add", "subtract", "multiply", "divide"]);
    }

    #[test]
    fn should_serialize_result_with_operation_name() {
        let result = Operation::Divide.apply(Operands::new(10, 2)).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"operation":"divide","result":5.0}"#);
    }
}
