//! Per-ROI convex hull measurement.

use crate::convex::{polygon_area, HullAlgorithm, MonotoneChain};
use locroi_core::{DiagnosticReason, HullDiagnostic, HullResult, RoiHullRecord, Vertex};
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Hull records for every ROI plus the diagnostics of skipped ones.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HullAnalysis {
    /// One record per ROI, in ROI index order.
    pub records: Vec<RoiHullRecord>,
    /// Warnings for ROIs without a hull, in ROI index order.
    pub diagnostics: Vec<HullDiagnostic>,
}

impl HullAnalysis {
    /// Iterates `(roi_index, hull)` over ROIs that produced a hull.
    pub fn surviving(&self) -> impl Iterator<Item = (usize, &HullResult)> {
        self.records
            .iter()
            .filter_map(|record| record.hull.as_ref().map(|hull| (record.roi_index, hull)))
    }

    /// Indices of ROIs that produced a hull.
    #[must_use]
    pub fn surviving_indices(&self) -> Vec<usize> {
        self.surviving().map(|(index, _)| index).collect()
    }

    /// Number of ROIs that produced a hull.
    #[must_use]
    pub fn surviving_count(&self) -> usize {
        self.surviving().count()
    }

    /// Sum of all hull areas.
    #[must_use]
    pub fn total_area(&self) -> f64 {
        self.surviving().map(|(_, hull)| hull.area).sum()
    }
}

/// Computes a convex hull for each ROI's excluded points.
#[derive(Debug, Clone, Default)]
pub struct ConvexHullAnalyzer<H = MonotoneChain> {
    algorithm: H,
}

impl ConvexHullAnalyzer<MonotoneChain> {
    /// Creates an analyzer using the monotone chain hull.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: HullAlgorithm> ConvexHullAnalyzer<H> {
    /// Creates an analyzer using a custom hull algorithm.
    pub fn with_algorithm(algorithm: H) -> Self {
        Self { algorithm }
    }

    /// Builds the hull of one point set.
    ///
    /// # Errors
    /// Returns the reason when the set has no enclosed area.
    pub fn hull(&self, points: &[Vertex]) -> Result<HullResult, DiagnosticReason> {
        if points.len() < 3 {
            return Err(DiagnosticReason::TooFewPoints);
        }
        let vertices: Vec<Vertex> = self
            .algorithm
            .hull_indices(points)
            .into_iter()
            .map(|i| points[i])
            .collect();
        if vertices.len() < 3 {
            return Err(DiagnosticReason::Collinear);
        }
        let area = polygon_area(&vertices);
        Ok(HullResult { vertices, area })
    }

    /// Analyzes the excluded subsets of all ROIs, indexed by position.
    pub fn analyze<S>(&self, subsets: &[S]) -> HullAnalysis
    where
        S: AsRef<[Vertex]> + Sync,
    {
        let outcomes: Vec<Result<HullResult, DiagnosticReason>> = subsets
            .par_iter()
            .map(|subset| self.hull(subset.as_ref()))
            .collect();

        let mut analysis = HullAnalysis {
            records: Vec::with_capacity(outcomes.len()),
            diagnostics: Vec::new(),
        };
        for (roi_index, outcome) in outcomes.into_iter().enumerate() {
            let hull = match outcome {
                Ok(hull) => Some(hull),
                Err(reason) => {
                    let diagnostic = HullDiagnostic {
                        roi_index,
                        point_count: subsets[roi_index].as_ref().len(),
                        reason,
                    };
                    log::warn!("{diagnostic}");
                    analysis.diagnostics.push(diagnostic);
                    None
                }
            };
            analysis.records.push(RoiHullRecord { roi_index, hull });
        }
        analysis
    }
}
