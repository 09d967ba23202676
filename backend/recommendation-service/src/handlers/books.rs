use crate::app_state::AppState;
use crate::error::Result;
use crate::services::fuzzy;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct BookListQuery {
    pub query: Option<String>,
    /// Sort matches by descending score instead of catalog order.
    #[serde(default)]
    pub ranked: bool,
}

/// GET /books
///
/// Lists all known book titles. With a `query` parameter the list is
/// narrowed to fuzzy matches on the partial title.
pub async fn list_books(
    state: web::Data<AppState>,
    params: web::Query<BookListQuery>,
) -> Result<HttpResponse> {
    let model = state.model()?;
    let titles = model.engine.titles();

    let books = match params.query.as_deref().map(str::trim) {
        Some(query) if !query.is_empty() => {
            let matches = fuzzy::find_matches(
                query,
                titles,
                state.config.search.match_limit,
                state.config.search.score_cutoff,
                params.ranked,
            );
            debug!(query, matches = matches.len(), "book title search");
            matches
        }
        _ => titles.to_vec(),
    };

    Ok(HttpResponse::Ok().json(books))
}
