//! Calculator service — the four arithmetic use-cases.

use mockservices_domain::calculator::{Operands, Operation, OperationResult};
use mockservices_domain::error::MockServiceError;

/// Application service for calculator operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorService;

impl CalculatorService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Run `operation` on the request operands.
    ///
    /// # Errors
    ///
    /// Returns [`MockServiceError::InvalidOperation`] when dividing by zero.
    #[tracing::instrument(skip(self))]
    pub fn calculate(
        &self,
        operation: Operation,
        operands: Operands,
    ) -> Result<OperationResult, MockServiceError> {
        let result = operation.apply(operands);
        if let Err(err) = &result {
            tracing::debug!(%err, "calculation rejected");
        }
        result
    }
}
