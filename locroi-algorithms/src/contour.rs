//! Distance-from-contour filter.
//!
//! Classifies every point against one ROI. Geometry runs on an integer grid:
//! ROI vertices are rounded half-to-even and point coordinates truncated
//! toward zero after scaling by `grid_scale`.

use crate::containment::{ContainmentTest, EdgeProjection};
use locroi_core::{FilterConfig, FilterPartition, Point, Roi, Vertex};

/// Partitions points into those far outside a ROI and those near or inside it.
#[derive(Debug, Clone)]
pub struct ContourDistanceFilter<C = EdgeProjection> {
    threshold_distance: f64,
    grid_scale: f64,
    containment: C,
}

impl ContourDistanceFilter<EdgeProjection> {
    /// Creates a filter with the default containment test.
    #[must_use]
    pub fn new(config: &FilterConfig) -> Self {
        Self::with_containment(config, EdgeProjection)
    }
}

impl<C: ContainmentTest> ContourDistanceFilter<C> {
    /// Creates a filter with a custom containment test.
    pub fn with_containment(config: &FilterConfig, containment: C) -> Self {
        Self {
            threshold_distance: config.threshold_distance,
            grid_scale: config.grid_scale,
            containment,
        }
    }

    /// Returns the containment test in use.
    pub fn containment(&self) -> &C {
        &self.containment
    }

    /// Projects ROI vertices onto the integer grid.
    #[must_use]
    pub fn grid_polygon(&self, roi: &Roi) -> Vec<Vertex> {
        roi.iter()
            .map(|v| {
                Vertex::new(
                    (v.x * self.grid_scale).round_ties_even(),
                    (v.y * self.grid_scale).round_ties_even(),
                )
            })
            .collect()
    }

    /// Projects a point onto the integer grid.
    #[inline]
    #[must_use]
    pub fn grid_point(&self, point: &Point) -> Vertex {
        Vertex::new(
            (point.x * self.grid_scale).trunc(),
            (point.y * self.grid_scale).trunc(),
        )
    }

    /// Signed grid distance of `point` to the projected polygon.
    pub fn signed_distance(&self, polygon: &[Vertex], point: &Point) -> f64 {
        self.containment
            .signed_distance(polygon, self.grid_point(point))
    }

    /// Returns true if a point at `signed_distance` is kept.
    ///
    /// Kept means strictly outside and at least the threshold away, so a
    /// point on the boundary always lands in `near`.
    #[inline]
    #[must_use]
    pub fn is_kept(&self, signed_distance: f64) -> bool {
        signed_distance < 0.0 && -signed_distance >= self.threshold_distance * self.grid_scale
    }

    /// Classifies every point against one ROI, preserving input order.
    pub fn partition(&self, roi: &Roi, points: &[Point]) -> FilterPartition {
        let polygon = self.grid_polygon(roi);
        let mut partition = FilterPartition::default();
        for point in points {
            if self.is_kept(self.signed_distance(&polygon, point)) {
                partition.kept.push(*point);
            } else {
                partition.near.push(*point);
            }
        }
        partition
    }
}
