use crate::app_state::AppState;
use crate::models::{HealthResponse, ServiceCapabilities};
use actix_web::{web, HttpResponse, Responder};

/// Health check endpoint to verify service status.
///
/// Always answers 200; a service running without its model reports
/// `model_loaded: false` and both capabilities disabled.
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let model_loaded = state.model_loaded();

    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        model_loaded,
        service_capabilities: ServiceCapabilities {
            recommendations: model_loaded,
            book_list: model_loaded,
        },
    })
}
