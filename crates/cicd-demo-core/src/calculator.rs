//! # Calculator
//!
//! Four binary numeric operations behind one enumerated type.
//!
//! ## Dispatch
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Calculator Dispatch                                │
//! │                                                                         │
//! │  "divide" ──► Operation::from_str ──► Operation::Divide                │
//! │                    │                        │                           │
//! │                    ▼                        ▼                           │
//! │         UnknownOperation("pow")    apply(a, b) ── b == 0? ──► Error    │
//! │                                             │                           │
//! │                                             ▼                           │
//! │                                           a / b                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Results are plain `f64` arithmetic with no rounding policy; 10 / 3 is
//! returned as `3.3333333333333335`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::error::{CalcResult, CalculatorError};
use crate::types::{Calculation, CalculationInputs};

// =============================================================================
// Operation
// =============================================================================

/// A supported binary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Every supported operation, in display order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Wire name of the operation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Applies the operation to two operands.
    ///
    /// ## Errors
    /// - [`CalculatorError::DivisionByZero`] for `Divide` with `b == 0`
    ///   (negative zero included).
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        match self {
            Operation::Add => Ok(add(a, b)),
            Operation::Subtract => Ok(subtract(a, b)),
            Operation::Multiply => Ok(multiply(a, b)),
            Operation::Divide => divide(a, b),
        }
    }

    /// Applies the operation and packages the result with its inputs.
    pub fn evaluate(self, a: f64, b: f64) -> CalcResult<Calculation> {
        let result = self.apply(a, b)?;
        Ok(Calculation {
            result,
            operation: self,
            inputs: CalculationInputs { a, b },
        })
    }

    /// Evaluates untyped operands, as received in a JSON body.
    ///
    /// Both operands are type-checked before the operation runs, so a
    /// non-numeric divisor of `"0"` reports `InvalidArgumentType`, never
    /// `DivisionByZero`.
    pub fn evaluate_json(self, a: &Value, b: &Value) -> CalcResult<Calculation> {
        let (a, b) = (parse_operand(a)?, parse_operand(b)?);
        self.evaluate(a, b)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| CalculatorError::UnknownOperation(s.to_string()))
    }
}

// =============================================================================
// Operations
// =============================================================================

#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Divides `a` by `b`, refusing a zero divisor.
pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
    if b == 0.0 {
        return Err(CalculatorError::DivisionByZero);
    }
    Ok(a / b)
}

/// Extracts a numeric operand from a JSON value.
///
/// Only JSON numbers qualify; numeric strings such as `"2"` are rejected.
pub fn parse_operand(value: &Value) -> CalcResult<f64> {
    value.as_f64().ok_or(CalculatorError::InvalidArgumentType)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_add() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operation::Add.apply(5.0, -3.0), Ok(2.0));
        assert_eq!(Operation::Add.apply(-2.0, -3.0), Ok(-5.0));
    }

    #[test]
    fn test_subtract() {
        assert_eq!(Operation::Subtract.apply(5.0, 3.0), Ok(2.0));
        assert_eq!(Operation::Subtract.apply(3.0, 5.0), Ok(-2.0));
    }

    #[test]
    fn test_multiply() {
        assert_eq!(Operation::Multiply.apply(4.0, 3.0), Ok(12.0));
        assert_eq!(Operation::Multiply.apply(5.0, 0.0), Ok(0.0));
        assert_eq!(Operation::Multiply.apply(-2.0, -3.0), Ok(6.0));
        assert_eq!(Operation::Multiply.apply(-2.0, 3.0), Ok(-6.0));
    }

    #[test]
    fn test_divide() {
        assert_eq!(Operation::Divide.apply(10.0, 2.0), Ok(5.0));

        let third = Operation::Divide.apply(10.0, 3.0).unwrap();
        assert!((third - 3.333).abs() < 0.001);
    }

    #[test]
    fn test_divide_by_zero_for_any_dividend() {
        for a in [10.0, 0.0, -7.5, f64::MAX] {
            assert_eq!(
                Operation::Divide.apply(a, 0.0),
                Err(CalculatorError::DivisionByZero)
            );
        }
        assert_eq!(divide(1.0, -0.0), Err(CalculatorError::DivisionByZero));
    }

    #[test]
    fn test_matches_native_arithmetic() {
        let samples = [(1.5, 2.25), (-4.0, 0.5), (1e10, 3.0), (0.1, 0.2)];
        for (a, b) in samples {
            assert_eq!(Operation::Add.apply(a, b), Ok(a + b));
            assert_eq!(Operation::Subtract.apply(a, b), Ok(a - b));
            assert_eq!(Operation::Multiply.apply(a, b), Ok(a * b));
            assert_eq!(Operation::Divide.apply(a, b), Ok(a / b));
        }
    }

    #[test]
    fn test_parse_operation() {
        assert_eq!("add".parse::<Operation>(), Ok(Operation::Add));
        assert_eq!("divide".parse::<Operation>(), Ok(Operation::Divide));
        assert_eq!(
            "power".parse::<Operation>(),
            Err(CalculatorError::UnknownOperation("power".to_string()))
        );
        // Case-sensitive, like the wire format.
        assert!("Add".parse::<Operation>().is_err());
    }

    #[test]
    fn test_operation_round_trips_through_display() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn test_evaluate_json_rejects_non_numbers() {
        for op in Operation::ALL {
            assert_eq!(
                op.evaluate_json(&json!("2"), &json!(3)),
                Err(CalculatorError::InvalidArgumentType)
            );
            assert_eq!(
                op.evaluate_json(&json!(2), &json!("3")),
                Err(CalculatorError::InvalidArgumentType)
            );
            assert_eq!(
                op.evaluate_json(&Value::Null, &json!(3)),
                Err(CalculatorError::InvalidArgumentType)
            );
        }
    }

    #[test]
    fn test_type_check_runs_before_zero_check() {
        assert_eq!(
            Operation::Divide.evaluate_json(&json!("10"), &json!(0)),
            Err(CalculatorError::InvalidArgumentType)
        );
        assert_eq!(
            Operation::Divide.evaluate_json(&json!(10), &json!(0)),
            Err(CalculatorError::DivisionByZero)
        );
    }

    #[test]
    fn test_evaluate_echoes_inputs() {
        let calc = Operation::Subtract.evaluate(10.0, 4.0).unwrap();
        assert_eq!(calc.result, 6.0);
        assert_eq!(calc.operation, Operation::Subtract);
        assert_eq!(calc.inputs, CalculationInputs { a: 10.0, b: 4.0 });
    }
}
