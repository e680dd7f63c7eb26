//! The feedback endpoint.
//!
//! Routes, all under `/api/feedback`:
//! - `GET  /api/feedback`: liveness probe, never touches the store.
//! - `POST /api/feedback`: validates a `comments`/`source` payload and appends
//!   it to the store.
//! - `POST /api/feedback/legacy`: same pipeline for deployments that still
//!   post `feedback`/`appName`.
//!
//! Any other method on these paths gets `405 Method Not Allowed`.
//!
//! Every failure, including bodies that are not valid JSON for the contract,
//! is answered with `{"success": false, "error": ...}`.

use actix_web::web::{get, post, resource, route, scope, JsonConfig};
use actix_web::Scope;
use log::warn;

mod error;
mod health;
mod method_not_allowed;
mod payload;
mod submit;


use error::SubmissionError;

const API_PATH: &str = "/api/feedback";

/// Configures and returns the Actix scope for the feedback routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .service(
            resource("")
                .route(get().to(health::process))
                .route(post().to(submit::process))
                .default_service(route().to(method_not_allowed::process)),
        )
        .service(
            resource("/legacy")
                .route(get().to(health::process))
                .route(post().to(submit::process_legacy))
                .default_service(route().to(method_not_allowed::process)),
        )
}

/// JSON extractor settings for the feedback payloads.
///
/// Extraction failures (wrong content type, malformed JSON, unknown keys,
/// oversized body) are turned into the endpoint's 400 body instead of
/// actix's plain text default.
pub fn json_config(limit: usize) -> JsonConfig {
    JsonConfig::default().limit(limit).error_handler(|err, req| {
        warn!("Rejected feedback payload on {}: {}", req.path(), err);
        SubmissionError::MalformedPayload(err.to_string()).into()
    })
}
