use crate::app_state::AppState;
use crate::error::Result;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub num_recommendations: Option<usize>,
}

/// GET /recommend/{book_title}
///
/// Returns the searched book's metadata plus its nearest neighbors in the
/// rating matrix, each with a normalized confidence score. 404 for unknown
/// titles, 400 for an out-of-range count, 503 while the model is not
/// loaded.
pub async fn get_recommendations(
    state: web::Data<AppState>,
    path: web::Path<String>,
    params: web::Query<RecommendationQuery>,
) -> Result<HttpResponse> {
    let model = state.model()?;
    let book_title = path.into_inner();
    let count = params
        .num_recommendations
        .unwrap_or(state.config.recommendation.default_recommendations);

    let response = model.engine.recommend(&model.catalog, &book_title, count)?;

    info!(
        title = %book_title,
        returned = response.recommendations.len(),
        "recommendations served"
    );

    Ok(HttpResponse::Ok().json(response))
}
