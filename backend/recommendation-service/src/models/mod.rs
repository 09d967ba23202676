use serde::{Deserialize, Serialize};

/// Book metadata as returned to clients.
///
/// Every field except the title is optional: metadata is joined from a
/// separate catalog and a missing or partial row degrades to `None`s and
/// a placeholder image rather than failing the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookInfo {
    pub title: String,
    pub image_url: String,
    pub year: Option<String>,
    pub publisher: Option<String>,
    pub author: Option<String>,
    pub rating: Option<f64>,
    /// Normalized similarity share in [0, 1]; set on recommended entries
    /// only, and sums to 1 across one response.
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub searched_book: BookInfo,
    pub recommendations: Vec<BookInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceCapabilities {
    pub recommendations: bool,
    pub book_list: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_loaded: bool,
    pub service_capabilities: ServiceCapabilities,
}
