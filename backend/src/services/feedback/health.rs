use actix_web::{HttpResponse, Responder};
use common::responses::HealthResponse;

/// Liveness probe. Answers without looking at the store.
pub(crate) async fn process() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::default())
}
