use crate::scoring::topk;
use crate::search::results::RankedResults;

/// Combine per-worker ranked lists into the global answer.
///
/// Concatenating the local top-K lists and re-selecting is sufficient: a
/// record in the global top-K must be in the local top-K of whichever
/// partition contains it, since each partition already keeps `top_k`
/// candidates. Match counts are summed; each record is counted by exactly
/// one worker.
pub fn merge(locals: Vec<RankedResults>, top_k: usize) -> RankedResults {
    let mut total_matched = 0;
    let mut candidates = Vec::new();
    for local in locals {
        total_matched += local.total_matched;
        candidates.extend(local.hits);
    }
    RankedResults {
        hits: topk::select(candidates, top_k),
        total_matched,
    }
}
