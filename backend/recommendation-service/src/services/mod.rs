pub mod catalog;
pub mod engine;
pub mod fuzzy;
pub mod neighbor_index;

pub use catalog::{BookCatalog, BookRecord, PLACEHOLDER_IMAGE_URL};
pub use engine::RecommendationEngine;
pub use neighbor_index::{Neighbor, NeighborIndex};
