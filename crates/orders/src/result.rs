use serde::{Deserialize, Serialize};

use orderdesk_core::ValueObject;

/// Outcome of an order attempt.
///
/// Business rejections (unknown product, insufficient stock) are reported
/// through this value with `success == false`, never as an error. Callers
/// branch on [`OrderResult::success`] and surface [`OrderResult::message`]
/// to end users or logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResult {
    success: bool,
    message: String,
}

impl OrderResult {
    /// Result for an order that was applied to inventory.
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Result for an order that was rejected by business validation.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl ValueObject for OrderResult {}
