use serde::{Serialize, Deserialize};

/// One travel offering. Immutable after ingestion; the record's position in
/// the catalog is its identity, not the `id` string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub id: String,
    pub place_name: String,
    pub province: String,
    pub category: String,
    pub duration_days: u32,
    pub avg_price: f64,
    pub rating: f64,
    pub review_count: u32,
    pub popularity_score: f64,
}

/// (record index, score) pair produced by evaluating one record against one
/// query. Lives only for the duration of one query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub index: usize,
    pub score: f64,
}

impl ScoredCandidate {
    pub fn new(index: usize, score: f64) -> Self {
        ScoredCandidate { index, score }
    }
}
