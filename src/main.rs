use actix_web::{App, HttpServer, middleware, web};

use meetgen::backend::BackendClient;
use meetgen::handlers::meeting_handlers;
use meetgen::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let backend_url = match std::env::var("BACKEND_URL") {
        Ok(url) => url,
        Err(_) => {
            log::warn!("No BACKEND_URL set — using http://127.0.0.1:8000");
            "http://127.0.0.1:8000".to_string()
        }
    };
    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    let state = web::Data::new(AppState::new(BackendClient::new(backend_url)));

    // One fetch at startup; a failure only logs and leaves the list empty.
    state.refresh().await;

    log::info!("Starting server at http://{bind_addr}");

    let app_state = state.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(app_state.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            .route("/", web::get().to(meeting_handlers::index))
            .route("/meetings", web::post().to(meeting_handlers::create))
            .route("/refresh", web::post().to(meeting_handlers::refresh))
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
