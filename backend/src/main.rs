mod config;
mod services;
mod storage;

use crate::config::Config;
use actix_web::{middleware, web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info, warn};
use mime_guess::from_path;
use std::io;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the bundled feedback form, falling back to `index.html` for
/// unknown paths so the form can be hosted under any `?source=` URL.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::load().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let url = format!("http://{}:{}", config.host, config.port);

    let store = storage::open(&config.store);
    match store.ensure_initialized() {
        Ok(()) => info!("Feedback store ready: {:?}", config.store),
        // Requests will keep answering 500 until the store becomes writable.
        Err(e) => error!("Feedback store {:?} is not writable: {}", config.store, e),
    }

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                warn!("Could not open a browser at {}: {}", url, e);
            }
        });
    }

    info!("Server running at {}", url);

    let json_limit = config.json_limit;
    let store = web::Data::from(store);
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(services::feedback::json_config(json_limit))
            .app_data(store.clone())
            .service(services::feedback::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
