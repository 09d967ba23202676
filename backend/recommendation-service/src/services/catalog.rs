use crate::models::BookInfo;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;

/// Shown when a title has no usable catalog row.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://via.placeholder.com/150x225?text=No+Image+Available";

/// One row of the exported book metadata table.
///
/// Fields other than the title are lenient: the upstream catalog has
/// missing publishers, authors and ratings, and a partial row must still
/// resolve instead of failing the whole artifact load.
#[derive(Debug, Clone, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub image_url: Option<String>,
    pub year: Option<YearValue>,
    pub publisher: Option<String>,
    pub author: Option<String>,
    pub avg_rating: Option<f64>,
}

/// Catalog years arrive as numbers or strings depending on the exporter.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum YearValue {
    Number(i64),
    Text(String),
}

impl YearValue {
    fn as_string(&self) -> String {
        match self {
            YearValue::Number(year) => year.to_string(),
            YearValue::Text(year) => year.clone(),
        }
    }
}

/// Read-only book metadata lookup.
///
/// A title may appear in several catalog rows (one per edition); lookup
/// resolves to the first row in artifact order.
#[derive(Debug)]
pub struct BookCatalog {
    records: Vec<BookRecord>,
    first_match: HashMap<String, usize>,
}

impl BookCatalog {
    pub fn new(records: Vec<BookRecord>) -> Self {
        let mut first_match = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            first_match.entry(record.title.clone()).or_insert(idx);
        }
        Self {
            records,
            first_match,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve a title to its metadata.
    ///
    /// Never fails: a title with no catalog row degrades to a placeholder
    /// image and empty metadata so one bad row cannot sink an entire
    /// recommendation response. The miss is logged for diagnosability.
    pub fn resolve(&self, title: &str) -> BookInfo {
        match self.first_match.get(title).map(|&idx| &self.records[idx]) {
            Some(record) => BookInfo {
                title: record.title.clone(),
                image_url: record
                    .image_url
                    .clone()
                    .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string()),
                year: record.year.as_ref().map(YearValue::as_string),
                publisher: record.publisher.clone(),
                author: record.author.clone(),
                rating: record.avg_rating,
                confidence: None,
            },
            None => {
                warn!(title, "no catalog row for title, using placeholder metadata");
                BookInfo {
                    title: title.to_string(),
                    image_url: PLACEHOLDER_IMAGE_URL.to_string(),
                    year: None,
                    publisher: None,
                    author: None,
                    rating: None,
                    confidence: None,
                }
            }
        }
    }
}
