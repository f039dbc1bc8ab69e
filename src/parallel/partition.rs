use std::ops::Range;

/// Split `[0, size)` into `workers` contiguous ranges with floor-divided
/// boundaries. The ranges cover every index exactly once; when
/// `workers > size` some ranges are empty. Static: no rebalancing.
pub fn partition(size: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.max(1);
    (0..workers)
        .map(|i| (i * size / workers)..((i + 1) * size / workers))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_exact_cover(size: usize, workers: usize) {
        let ranges = partition(size, workers);
        assert_eq!(ranges.len(), workers.max(1));
        let mut next = 0;
        for range in &ranges {
            assert_eq!(range.start, next);
            assert!(range.end >= range.start);
            next = range.end;
        }
        assert_eq!(next, size);
    }

    #[test]
    fn covers_exactly_once() {
        assert_exact_cover(10, 3);
        assert_exact_cover(10, 1);
        assert_exact_cover(1000, 7);
        assert_exact_cover(0, 4);
    }

    #[test]
    fn uneven_split_uses_floor_boundaries() {
        let ranges = partition(10, 3);
        assert_eq!(ranges, vec![0..3, 3..6, 6..10]);
    }

    #[test]
    fn more_workers_than_records_yields_empty_ranges() {
        let ranges = partition(2, 5);
        assert_eq!(ranges.iter().filter(|r| r.is_empty()).count(), 3);
        assert_eq!(ranges.iter().map(|r| r.len()).sum::<usize>(), 2);
    }

    #[test]
    fn zero_workers_is_treated_as_one() {
        assert_eq!(partition(4, 0), vec![0..4]);
    }
}
