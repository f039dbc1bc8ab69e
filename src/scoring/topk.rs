use std::cmp::Ordering;
use crate::core::types::ScoredCandidate;

/// Sort candidates by descending score and truncate to `k`.
///
/// Ties are broken by ascending record index, which gives every backend and
/// worker count the same total order regardless of the order candidates
/// were produced in.
pub fn select(mut candidates: Vec<ScoredCandidate>, k: usize) -> Vec<ScoredCandidate> {
    candidates.sort_by(compare);
    candidates.truncate(k);
    candidates
}

fn compare(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.index.cmp(&b.index))
}
