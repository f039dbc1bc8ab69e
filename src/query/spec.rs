use serde::{Serialize, Deserialize};

/// Budget ceilings at or above this sentinel mean "no budget constraint";
/// the budget closeness bonus is disabled as well.
pub const BUDGET_UNBOUNDED: f64 = 1_000_000.0;

pub const DEFAULT_TOP_K: usize = 5;

/// Evaluation parameters of a single query. Created fresh per query and
/// never mutated after parsing. Empty strings and non-positive
/// `duration_days` mean "unconstrained".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySpec {
    pub province: String,
    pub category: String,
    pub budget_min: f64,
    pub budget_max: f64,
    pub duration_days: i32,
    pub min_rating: f64,
    pub top_k: usize,
}

impl Default for QuerySpec {
    fn default() -> Self {
        QuerySpec {
            province: String::new(),
            category: String::new(),
            budget_min: 0.0,
            budget_max: BUDGET_UNBOUNDED,
            duration_days: -1,
            min_rating: 0.0,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl QuerySpec {
    pub fn has_budget_cap(&self) -> bool {
        self.budget_max < BUDGET_UNBOUNDED
    }

    pub fn has_duration(&self) -> bool {
        self.duration_days > 0
    }
}
