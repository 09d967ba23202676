use crate::error::AppError;
use crate::models::RecommendationResponse;
use crate::services::catalog::BookCatalog;
use crate::services::neighbor_index::NeighborIndex;
use std::collections::HashMap;
use tracing::debug;

/// Nearest-neighbor retrieval over the pivoted rating matrix.
///
/// Holds the known title list (matrix row order) and the neighbor index.
/// `recommend` is a pure function of this immutable state: the same title
/// and count always produce the same response.
#[derive(Debug)]
pub struct RecommendationEngine {
    titles: Vec<String>,
    title_rows: HashMap<String, usize>,
    index: NeighborIndex,
    max_recommendations: usize,
}

impl RecommendationEngine {
    pub fn new(titles: Vec<String>, index: NeighborIndex, max_recommendations: usize) -> Self {
        let title_rows = titles
            .iter()
            .enumerate()
            .map(|(row, title)| (title.clone(), row))
            .collect();
        Self {
            titles,
            title_rows,
            index,
            max_recommendations,
        }
    }

    /// All known titles, in matrix row order.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.title_rows.contains_key(title)
    }

    /// The `count` books most similar to `title`, each with a confidence
    /// score normalized over the returned set.
    ///
    /// Asks the index for `count + 1` rows since the query title is its own
    /// nearest neighbor at distance zero, then drops the query row by index
    /// identity wherever it lands in the result. With distance ties the
    /// query row is not guaranteed to come back first, or to come back at
    /// all once the index fills up with closer duplicates, so neither
    /// position is assumed.
    pub fn recommend(
        &self,
        catalog: &BookCatalog,
        title: &str,
        count: usize,
    ) -> Result<RecommendationResponse, AppError> {
        if count < 1 || count > self.max_recommendations {
            return Err(AppError::InvalidArgument(format!(
                "Number of recommendations must be between 1 and {}",
                self.max_recommendations
            )));
        }

        let query_row = *self
            .title_rows
            .get(title)
            .ok_or_else(|| AppError::NotFound(format!("Book '{title}' not found")))?;

        let mut scored: Vec<(usize, f64)> = self
            .index
            .k_nearest(query_row, count + 1)
            .into_iter()
            .filter(|neighbor| neighbor.row != query_row)
            .map(|neighbor| (neighbor.row, 1.0 - neighbor.distance))
            .collect();
        scored.truncate(count);

        // A matrix smaller than count + 1 rows yields fewer neighbors; the
        // response then carries every non-self row instead of failing.
        let total: f64 = scored.iter().map(|(_, similarity)| similarity).sum();
        if total <= 0.0 {
            return Err(AppError::Internal(format!(
                "no positive similarity mass among neighbors of '{title}'"
            )));
        }

        let recommendations = scored
            .into_iter()
            .map(|(row, similarity)| {
                let mut info = catalog.resolve(&self.titles[row]);
                info.confidence = Some(round4(similarity / total));
                info
            })
            .collect::<Vec<_>>();

        debug!(
            title,
            requested = count,
            returned = recommendations.len(),
            "recommendations computed"
        );

        Ok(RecommendationResponse {
            searched_book: catalog.resolve(title),
            recommendations,
        })
    }
}

/// Round to 4 decimal places for presentation.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
