//! JSON handlers for the calculator service.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};

use mockservices_domain::calculator::{Operands, Operation, OperationResult};

use crate::error::ApiError;
use crate::state::CalculatorState;

/// Possible responses from an operation endpoint.
pub enum CalculateResponse {
    Ok(Json<OperationResult>),
}

impl IntoResponse for CalculateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn calculate(
    state: &CalculatorState,
    operation: Operation,
    body: Result<Json<Operands>, JsonRejection>,
) -> Result<CalculateResponse, ApiError> {
    let Json(operands) = body?;
    let result = state.calculator_service.calculate(operation, operands)?;
    Ok(CalculateResponse::Ok(Json(result)))
}

/// `POST /add`
pub async fn add(
    State(state): State<CalculatorState>,
    body: Result<Json<Operands>, JsonRejection>,
) -> Result<CalculateResponse, ApiError> {
    calculate(&state, Operation::Add, body)
}

/// `POST /subtract`
pub async fn subtract(
    State(state): State<CalculatorState>,
    body: Result<Json<Operands>, JsonRejection>,
) -> Result<CalculateResponse, ApiError> {
    calculate(&state, Operation::Subtract, body)
}

/// `POST /multiply`
pub async fn multiply(
    State(state): State<CalculatorState>,
    body: Result<Json<Operands>, JsonRejection>,
) -> Result<CalculateResponse, ApiError> {
    calculate(&state, Operation::Multiply, body)
}

/// `POST /divide`
pub async fn divide(
    State(state): State<CalculatorState>,
    body: Result<Json<Operands>, JsonRejection>,
) -> Result<CalculateResponse, ApiError> {
    calculate(&state, Operation::Divide, body)
}
