//! Multi-ROI set aggregation.

use locroi_core::{AggregatedResult, FilterPartition, Point, PointKey};
use std::collections::HashSet;

/// Combines per-ROI partitions into one exclusion set.
///
/// The excluded union is built by full-tuple identity ([`PointKey`]), so
/// identical duplicate rows collapse into one excluded point while points
/// that only share an `id` stay distinct. The reported excluded view is
/// ordered by `id` (stable, first appearance across ROIs breaks ties);
/// `final_kept` keeps the original input order.
#[must_use]
pub fn aggregate(partitions: &[FilterPartition], points: &[Point]) -> AggregatedResult {
    let mut seen: HashSet<PointKey> = HashSet::new();
    let mut excluded: Vec<Point> = Vec::new();

    for partition in partitions {
        for point in &partition.near {
            if seen.insert(point.key()) {
                excluded.push(*point);
            }
        }
    }
    excluded.sort_by_key(|point| point.id);

    let final_kept: Vec<Point> = points
        .iter()
        .filter(|point| !seen.contains(&point.key()))
        .copied()
        .collect();

    AggregatedResult {
        excluded,
        final_kept,
        total_points: points.len(),
    }
}

/// Returns ids that occur more than once, ascending.
#[must_use]
pub fn duplicate_ids(points: &[Point]) -> Vec<i64> {
    let mut ids: Vec<i64> = points.iter().map(|point| point.id).collect();
    ids.sort_unstable();
    let mut duplicates: Vec<i64> = ids
        .windows(2)
        .filter(|pair| pair[0] == pair[1])
        .map(|pair| pair[0])
        .collect();
    duplicates.dedup();
    duplicates
}
