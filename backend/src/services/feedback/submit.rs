use super::error::SubmissionError;
use super::payload::{CanonicalSubmission, LegacySubmission, Submission};
use crate::storage::{FeedbackStore, StorageError};
use actix_web::{web, HttpResponse};
use common::model::feedback::FeedbackRecord;
use common::responses::{SubmitResponse, SUCCESS_MESSAGE};
use log::{error, info};
use std::sync::Arc;

/// `POST /api/feedback` with the `comments`/`source` contract.
pub(crate) async fn process(
    store: web::Data<dyn FeedbackStore>,
    payload: web::Json<CanonicalSubmission>,
) -> Result<HttpResponse, SubmissionError> {
    accept(store.into_inner(), payload.into_inner()).await
}

/// `POST /api/feedback/legacy` with the `feedback`/`appName` contract.
pub(crate) async fn process_legacy(
    store: web::Data<dyn FeedbackStore>,
    payload: web::Json<LegacySubmission>,
) -> Result<HttpResponse, SubmissionError> {
    accept(store.into_inner(), payload.into_inner()).await
}

async fn accept<S: Submission>(
    store: Arc<dyn FeedbackStore>,
    submission: S,
) -> Result<HttpResponse, SubmissionError> {
    let record = submission.into_record().map_err(|e| {
        info!("Rejected feedback: {}", e);
        e
    })?;

    let source = record.source.clone();
    persist(store, record).await.map_err(|e| {
        error!("Failed to store feedback from {}: {}", source, e);
        e
    })?;

    info!("Saved feedback from {}", source);
    Ok(HttpResponse::Ok().json(SubmitResponse::accepted(SUCCESS_MESSAGE)))
}

/// Creates the store if needed and appends `record`, off the async workers.
async fn persist(store: Arc<dyn FeedbackStore>, record: FeedbackRecord) -> Result<(), StorageError> {
    tokio::task::spawn_blocking(move || {
        store.ensure_initialized()?;
        store.append(&record)
    })
    .await
    .map_err(|join_err| StorageError::Unavailable(format!("join error: {}", join_err)))?
}
