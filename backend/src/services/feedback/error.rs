use crate::storage::StorageError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::responses::SubmitResponse;
use thiserror::Error;

/// Every way a submission can fail, mapped onto the response contract.
///
/// Client mistakes are 400s and carry a message the form can show as-is.
/// Storage failures are 500s with a generic message; the cause is only logged.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid field: {field} {reason}")]
    InvalidField {
        field: &'static str,
        reason: &'static str,
    },

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Could not save feedback")]
    Storage(#[from] StorageError),
}

impl ResponseError for SubmissionError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmissionError::MissingField(_)
            | SubmissionError::InvalidField { .. }
            | SubmissionError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            SubmissionError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(SubmitResponse::rejected(self.to_string()))
    }
}
