//! Route configuration
//!
//! Centralized route setup; each handler module owns its own request and
//! response types.

use crate::handlers;
use actix_web::{web, HttpResponse};

/// Configure all routes for the application
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/health", web::get().to(handlers::health_check))
        .route("/books", web::get().to(handlers::list_books))
        .route(
            "/recommend/{book_title}",
            web::get().to(handlers::get_recommendations),
        );
}

async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(
            "<html><body><h1>Book Recommendation API</h1>\
             <p>Endpoints: <code>/books</code>, <code>/recommend/{title}</code>, \
             <code>/health</code></p></body></html>",
        )
}
