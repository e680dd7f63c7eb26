use actix_web::http::header;
use actix_web::HttpResponse;

pub(crate) async fn process() -> HttpResponse {
    HttpResponse::MethodNotAllowed()
        .insert_header((header::ALLOW, "GET, POST"))
        .content_type("text/plain; charset=utf-8")
        .body("Method Not Allowed")
}
