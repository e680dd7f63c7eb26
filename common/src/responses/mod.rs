//! JSON bodies returned by the feedback endpoint.

use serde::{Deserialize, Serialize};

/// Body of a successful liveness probe.
pub const HEALTH_MESSAGE: &str = "Function is working!";

/// `message` of an accepted submission.
pub const SUCCESS_MESSAGE: &str = "Feedback saved!";

/// Shown when a rejection carries no usable reason.
pub const GENERIC_FAILURE: &str = "Unknown error";

/// Outcome of `POST /api/feedback`.
///
/// Exactly one of `message` (on success) or `error` (on failure) is set;
/// the other one is left out of the JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitResponse {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Body of `GET /api/feedback`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            message: HEALTH_MESSAGE.to_string(),
        }
    }
}
