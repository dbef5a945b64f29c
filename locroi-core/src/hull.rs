//! Convex hull result records.

use crate::Vertex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Convex hull of one ROI's excluded points.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HullResult {
    /// Hull boundary vertices in counter-clockwise traversal order.
    pub vertices: Vec<Vertex>,
    /// Enclosed area (always >= 0).
    pub area: f64,
}

/// Hull outcome for one ROI, keyed by its position in the ROI sequence.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoiHullRecord {
    /// Zero-based ROI index.
    pub roi_index: usize,
    /// Hull, or `None` when the excluded subset was degenerate.
    pub hull: Option<HullResult>,
}

impl RoiHullRecord {
    /// Returns true if a hull was computed for this ROI.
    #[must_use]
    pub fn survived(&self) -> bool {
        self.hull.is_some()
    }
}

/// Why no hull could be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiagnosticReason {
    /// Fewer than three excluded points.
    TooFewPoints,
    /// Three or more points, all on one line.
    Collinear,
}

/// Non-fatal geometry warning for a skipped ROI.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HullDiagnostic {
    /// Zero-based ROI index.
    pub roi_index: usize,
    /// Number of excluded points available for the hull.
    pub point_count: usize,
    /// Reason the ROI was skipped.
    pub reason: DiagnosticReason,
}

impl std::fmt::Display for HullDiagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            DiagnosticReason::TooFewPoints => write!(
                f,
                "not enough points to estimate convex hull for ROI {}: {}",
                self.roi_index, self.point_count
            ),
            DiagnosticReason::Collinear => write!(
                f,
                "excluded points of ROI {} are collinear ({} points), no hull area",
                self.roi_index, self.point_count
            ),
        }
    }
}
