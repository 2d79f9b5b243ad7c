use super::ScoreRange;

/// Flattens inclusive ranges into `[s0, e0, s1, e1, ...]`.
pub fn flatten_ranges(ranges: &[ScoreRange]) -> Vec<u64> {
    ranges.iter().flat_map(|r| [r.start, r.end]).collect()
}

/// Maps each point to the index of the range that contains it.
///
/// `boundaries` must hold sorted, gapless, inclusive `(start, end)` pairs
/// as produced by [`flatten_ranges`]. The lower bound of a point is either
/// the start or the end of its range, so halving it gives the range index.
/// Points past the last end map to `boundaries.len() / 2`.
pub fn point_to_segment(boundaries: &[u64], points: &[u64]) -> Vec<usize> {
    points
        .iter()
        .map(|&point| boundaries.partition_point(|&bound| bound < point) / 2)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn ranges(bounds: &[(u64, u64)]) -> Vec<ScoreRange> {
        bounds
            .iter()
            .map(|&(start, end)| ScoreRange {
                start,
                end,
                score: 0.0,
            })
            .collect()
    }

    #[test]
    fn flatten_interleaves_starts_and_ends() {
        let flat = flatten_ranges(&ranges(&[(0, 4), (5, 9), (10, 10)]));
        assert_eq!(flat, vec![0, 4, 5, 9, 10, 10]);
    }

    #[test]
    fn points_map_to_enclosing_range() {
        let flat = flatten_ranges(&ranges(&[(0, 4), (5, 9), (10, 10), (11, 20)]));
        let points = (0..=20u64).collect_vec();
        let expected: Vec<usize> = [
            vec![0; 5],
            vec![1; 5],
            vec![2; 1],
            vec![3; 10],
        ]
        .concat();
        assert_eq!(point_to_segment(&flat, &points), expected);
    }

    #[test]
    fn indices_are_monotonic_across_ranges() {
        let flat = flatten_ranges(&ranges(&[(0, 49), (50, 57), (58, 65), (66, 99)]));
        let points = (0..100u64).collect_vec();
        let indices = point_to_segment(&flat, &points);
        for ((p1, i1), (p2, i2)) in points.iter().zip(&indices).tuple_windows() {
            assert!(p1 < p2);
            assert!(i1 <= i2);
        }
        assert_eq!(indices.iter().dedup().count(), 4);
    }

    #[test]
    fn point_past_last_range_maps_past_the_end() {
        let flat = flatten_ranges(&ranges(&[(0, 9)]));
        assert_eq!(point_to_segment(&flat, &[10, 11]), vec![1, 1]);
    }
}
