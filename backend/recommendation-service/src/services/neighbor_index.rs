use ndarray::{Array2, ArrayView1};
use std::cmp::Ordering;

/// Exhaustive nearest-rows search over the item-user rating matrix under
/// cosine distance.
///
/// The matrix is dense and small enough (one row per catalog title) that a
/// full scan per query is cheap and keeps the index trivially immutable.
/// Row order is fixed at construction and defines neighbor correspondence.
#[derive(Debug)]
pub struct NeighborIndex {
    matrix: Array2<f64>,
}

/// One nearest-row hit. `distance` is cosine distance in [0, 2].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub row: usize,
    pub distance: f64,
}

impl NeighborIndex {
    pub fn new(matrix: Array2<f64>) -> Self {
        Self { matrix }
    }

    pub fn nrows(&self) -> usize {
        self.matrix.nrows()
    }

    /// The `k` rows nearest to `row`, ascending by distance.
    ///
    /// The query row itself is included (at distance zero) like any other
    /// row. Equal distances order by ascending row index, so results are
    /// deterministic for a fixed matrix.
    pub fn k_nearest(&self, row: usize, k: usize) -> Vec<Neighbor> {
        let query = self.matrix.row(row);

        let mut neighbors: Vec<Neighbor> = (0..self.matrix.nrows())
            .map(|candidate| Neighbor {
                row: candidate,
                distance: cosine_distance(query, self.matrix.row(candidate)),
            })
            .collect();

        neighbors.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.row.cmp(&b.row))
        });
        neighbors.truncate(k);

        neighbors
    }
}

/// Calculate cosine similarity between two vectors
pub fn cosine_similarity(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product = a.dot(&b);
    let norm_a = a.dot(&a).sqrt();
    let norm_b = b.dot(&b).sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

pub fn cosine_distance(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    1.0 - cosine_similarity(a, b)
}
