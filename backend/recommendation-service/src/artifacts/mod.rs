//! One-time loading of the exported model artifacts.
//!
//! The offline training pipeline exports two JSON files: `ratings.json`
//! holds the pivoted item-user rating matrix, `catalog.json` the book
//! metadata table. Both are read once at startup; a failed or invalid
//! load leaves the service running in its disabled state instead of
//! crashing the process.

use crate::app_state::RecommendationContext;
use crate::services::{BookCatalog, BookRecord, NeighborIndex, RecommendationEngine};
use anyhow::{bail, Context, Result};
use ndarray::Array2;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

pub const RATINGS_FILE: &str = "ratings.json";
pub const CATALOG_FILE: &str = "catalog.json";

/// On-disk shape of `ratings.json`.
#[derive(Debug, Deserialize)]
pub struct RatingsArtifact {
    pub user_ids: Vec<String>,
    pub books: Vec<BookRatings>,
}

#[derive(Debug, Deserialize)]
pub struct BookRatings {
    pub title: String,
    pub ratings: Vec<f64>,
}

/// Read and validate the artifact files under `dir` and assemble the
/// immutable serving context.
pub fn load_model(dir: &Path, max_recommendations: usize) -> Result<RecommendationContext> {
    let ratings_path = dir.join(RATINGS_FILE);
    let raw_ratings = fs::read_to_string(&ratings_path)
        .with_context(|| format!("reading {}", ratings_path.display()))?;
    let ratings: RatingsArtifact = serde_json::from_str(&raw_ratings)
        .with_context(|| format!("parsing {}", ratings_path.display()))?;

    let catalog_path = dir.join(CATALOG_FILE);
    let raw_catalog = fs::read_to_string(&catalog_path)
        .with_context(|| format!("reading {}", catalog_path.display()))?;
    let records: Vec<BookRecord> = serde_json::from_str(&raw_catalog)
        .with_context(|| format!("parsing {}", catalog_path.display()))?;

    build_context(ratings, records, max_recommendations)
}

/// Assemble the serving context from already-parsed artifacts.
pub fn build_context(
    ratings: RatingsArtifact,
    records: Vec<BookRecord>,
    max_recommendations: usize,
) -> Result<RecommendationContext> {
    let (titles, matrix) = build_matrix(ratings)?;

    info!(
        titles = titles.len(),
        users = matrix.ncols(),
        catalog_rows = records.len(),
        "model artifacts loaded"
    );

    Ok(RecommendationContext {
        engine: RecommendationEngine::new(titles, NeighborIndex::new(matrix), max_recommendations),
        catalog: BookCatalog::new(records),
    })
}

/// Validate the ratings artifact and build the dense matrix.
///
/// Row order in the artifact is preserved; it defines the neighbor index
/// correspondence for the lifetime of the process.
fn build_matrix(artifact: RatingsArtifact) -> Result<(Vec<String>, Array2<f64>)> {
    if artifact.books.is_empty() {
        bail!("rating matrix has no book rows");
    }
    let ncols = artifact.user_ids.len();
    if ncols == 0 {
        bail!("rating matrix has no user columns");
    }

    let mut titles = Vec::with_capacity(artifact.books.len());
    let mut seen = HashSet::new();
    let mut data = Vec::with_capacity(artifact.books.len() * ncols);

    for book in artifact.books {
        if !seen.insert(book.title.clone()) {
            bail!("duplicate title '{}' in rating matrix", book.title);
        }
        if book.ratings.len() != ncols {
            bail!(
                "title '{}' has {} ratings, expected {}",
                book.title,
                book.ratings.len(),
                ncols
            );
        }
        data.extend(book.ratings);
        titles.push(book.title);
    }

    let nrows = titles.len();
    let matrix =
        Array2::from_shape_vec((nrows, ncols), data).context("building rating matrix")?;

    Ok((titles, matrix))
}
