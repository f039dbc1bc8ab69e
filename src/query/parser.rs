use crate::catalog::store::CATALOG_CAPACITY;
use crate::core::utils::{lenient_f64, lenient_i32};
use crate::query::spec::QuerySpec;

/// Parse a raw query string into a `QuerySpec`. Total: never fails,
/// unrecognized input degrades to defaults.
///
/// Two grammars, tried in order:
/// - numeric shortcut: an all-digit input is taken as `TOPK=<n>`;
/// - `;`-separated `KEY=VALUE` tokens with keys `PROVINCE`, `CATEGORY`,
///   `BUDGET_MIN`, `BUDGET_MAX`, `DAYS`, `MIN_RATING`, `TOPK`. Unknown
///   tokens are ignored, the last occurrence of a key wins, and values are
///   taken verbatim (no trimming, no quoting).
pub fn parse(raw: &str) -> QuerySpec {
    let mut spec = QuerySpec::default();

    let trimmed = raw.trim();
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        // Overflow of an all-digit value still means "a lot": clamp high.
        spec.top_k = clamp_top_k(trimmed.parse::<usize>().unwrap_or(CATALOG_CAPACITY));
        return spec;
    }

    for token in raw.split(';') {
        if let Some(v) = token.strip_prefix("PROVINCE=") {
            spec.province = v.to_string();
        } else if let Some(v) = token.strip_prefix("CATEGORY=") {
            spec.category = v.to_string();
        } else if let Some(v) = token.strip_prefix("BUDGET_MIN=") {
            spec.budget_min = lenient_f64(v);
        } else if let Some(v) = token.strip_prefix("BUDGET_MAX=") {
            spec.budget_max = lenient_f64(v);
        } else if let Some(v) = token.strip_prefix("DAYS=") {
            spec.duration_days = lenient_i32(v);
        } else if let Some(v) = token.strip_prefix("MIN_RATING=") {
            spec.min_rating = lenient_f64(v);
        } else if let Some(v) = token.strip_prefix("TOPK=") {
            spec.top_k = lenient_i32(v).max(0) as usize;
        }
    }

    spec.top_k = clamp_top_k(spec.top_k);
    spec
}

fn clamp_top_k(k: usize) -> usize {
    k.clamp(1, CATALOG_CAPACITY)
}
