//! `POST /calculate`
//!
//! ## Request Checks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  { "operation": "divide", "a": 10, "b": 0 }                            │
//! │       │                                                                 │
//! │       ├── body not a JSON object?    → 400 "Invalid input"             │
//! │       ├── operation missing/empty?   → 400 "Invalid input"             │
//! │       ├── a or b not a number?       → 400 "Invalid input"             │
//! │       ├── unknown operation?         → 400 "Unsupported operation: x"  │
//! │       ├── divide by zero?            → 400 "Division by zero ..."      │
//! │       │                                                                 │
//! │       └── OK → 200 { result, operation, inputs: { a, b } }             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use cicd_demo_core::calculator::parse_operand;
use cicd_demo_core::{Calculation, Operation};

use crate::error::{ApiError, ApiResult};

/// Untyped request body; operands are checked by the core.
#[derive(Debug, Deserialize)]
pub struct CalculatePayload {
    #[serde(default)]
    pub operation: Option<String>,
    #[serde(default)]
    pub a: Value,
    #[serde(default)]
    pub b: Value,
}

pub async fn calculate(
    payload: Result<Json<CalculatePayload>, JsonRejection>,
) -> ApiResult<Json<Calculation>> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!(%rejection, "Rejected calculate body");
        ApiError::invalid_input()
    })?;

    let name = match payload.operation.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => return Err(ApiError::invalid_input()),
    };

    let operation = match name.parse::<Operation>() {
        Ok(operation) => operation,
        Err(err) => {
            // Bad operands outrank an unknown operation name.
            parse_operand(&payload.a)?;
            parse_operand(&payload.b)?;
            return Err(err.into());
        }
    };

    let calculation = operation.evaluate_json(&payload.a, &payload.b)?;
    info!(
        operation = %calculation.operation,
        a = calculation.inputs.a,
        b = calculation.inputs.b,
        result = calculation.result,
        "Calculation performed"
    );

    Ok(Json(calculation))
}
