//! Per-ROI partitions and their aggregation.

use crate::Point;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of filtering the full point set against one ROI.
///
/// `kept` and `near` are disjoint and together hold every input point,
/// each in input order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterPartition {
    /// Points outside the ROI and at least the threshold away from it.
    pub kept: Vec<Point>,
    /// Points inside the ROI or within the threshold band around it.
    pub near: Vec<Point>,
}

impl FilterPartition {
    /// Total number of points classified.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kept.len() + self.near.len()
    }

    /// Returns true if no points were classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kept.is_empty() && self.near.is_empty()
    }
}

/// Union of every ROI's `near` set and the points that survive it.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AggregatedResult {
    /// Distinct excluded points, ordered by `id` ascending.
    pub excluded: Vec<Point>,
    /// Points not in the excluded union, in original input order.
    pub final_kept: Vec<Point>,
    /// Number of points in the original input.
    pub total_points: usize,
}

impl AggregatedResult {
    /// Number of kept points.
    #[must_use]
    pub fn kept_count(&self) -> usize {
        self.final_kept.len()
    }

    /// Number of input points that were not kept.
    ///
    /// This counts input rows, so it can exceed `excluded.len()` when
    /// identical points collapsed in the union.
    #[must_use]
    pub fn excluded_count(&self) -> usize {
        self.total_points - self.final_kept.len()
    }
}
