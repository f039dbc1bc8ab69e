use crate::core::types::PackageRecord;
use crate::query::spec::QuerySpec;

/// Pure conjunction of the query's constraints. String comparisons are
/// exact and case-sensitive; the cheap exact-match checks run before the
/// range checks.
pub fn matches(record: &PackageRecord, spec: &QuerySpec) -> bool {
    if !spec.province.is_empty() && record.province != spec.province {
        return false;
    }
    if !spec.category.is_empty() && record.category != spec.category {
        return false;
    }
    if record.avg_price < spec.budget_min || record.avg_price > spec.budget_max {
        return false;
    }
    if spec.has_duration() && record.duration_days != spec.duration_days as u32 {
        return false;
    }
    if record.rating < spec.min_rating {
        return false;
    }
    true
}
