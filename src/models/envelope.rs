//! Response envelope shared by every warehouse API endpoint

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// `{ success, data?, message? }` as returned by the warehouse API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, turning a reported failure into an upstream error
    pub fn into_data(self, context: &str) -> AppResult<T> {
        if !self.success {
            let message = self
                .message
                .unwrap_or_else(|| format!("{} failed", context));
            return Err(AppError::Upstream(message));
        }

        self.data
            .ok_or_else(|| AppError::Upstream(format!("{}: response carried no data", context)))
    }
}
