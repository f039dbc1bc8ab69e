use crate::core::types::PackageRecord;
use crate::query::spec::QuerySpec;

const RATING_WEIGHT: f64 = 50.0;
const POPULARITY_WEIGHT: f64 = 10.0;
const REVIEW_WEIGHT: f64 = 5.0;
const BUDGET_CLOSENESS_PEAK: f64 = 100.0;
const BUDGET_CLOSENESS_SCALE: f64 = 1000.0;
const DURATION_CLOSENESS_PEAK: f64 = 50.0;

/// Additive relevance score for one record against one query.
///
/// `50·rating + 10·popularity + 5·ln(reviews + 1)`, plus a budget
/// closeness bonus when the query sets a budget ceiling and a duration
/// closeness bonus when it sets a day count. Pure: no side effects, no
/// dependence on other records.
pub fn score(record: &PackageRecord, spec: &QuerySpec) -> f64 {
    let mut score = RATING_WEIGHT * record.rating
        + POPULARITY_WEIGHT * record.popularity_score
        + REVIEW_WEIGHT * (f64::from(record.review_count) + 1.0).ln();

    if spec.has_budget_cap() {
        let diff = (record.avg_price - spec.budget_max).abs();
        score += BUDGET_CLOSENESS_PEAK / (1.0 + diff / BUDGET_CLOSENESS_SCALE);
    }

    if spec.has_duration() {
        let diff = (i64::from(record.duration_days) - i64::from(spec.duration_days)).abs();
        score += DURATION_CLOSENESS_PEAK / (1.0 + diff as f64);
    }

    score
}
