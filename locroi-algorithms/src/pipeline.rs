//! Filter-and-measure pipeline that ties the stages together.

use crate::aggregate::{aggregate, duplicate_ids};
use crate::containment::{ContainmentTest, EdgeProjection};
use crate::contour::ContourDistanceFilter;
use crate::convex::{HullAlgorithm, MonotoneChain};
use crate::hull_analysis::{ConvexHullAnalyzer, HullAnalysis};
use locroi_core::error::Result;
use locroi_core::{AggregatedResult, FilterConfig, FilterPartition, Point, Roi, Vertex};
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything computed by one pipeline run.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PipelineResult {
    /// Per-ROI partitions, in ROI index order.
    pub partitions: Vec<FilterPartition>,
    /// Union of excluded points and the surviving kept set.
    pub aggregate: AggregatedResult,
    /// Hull records for every ROI.
    pub hulls: HullAnalysis,
    /// Point ids occurring more than once in the input.
    pub duplicate_ids: Vec<i64>,
}

/// Runs contour filtering, aggregation and hull analysis over one dataset.
#[derive(Debug, Clone)]
pub struct ExclusionPipeline<C = EdgeProjection, H = MonotoneChain> {
    config: FilterConfig,
    filter: ContourDistanceFilter<C>,
    analyzer: ConvexHullAnalyzer<H>,
}

impl ExclusionPipeline<EdgeProjection, MonotoneChain> {
    /// Creates a pipeline with the default geometry.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn new(config: FilterConfig) -> Result<Self> {
        Self::with_geometry(config, EdgeProjection, MonotoneChain)
    }
}

impl<C: ContainmentTest, H: HullAlgorithm> ExclusionPipeline<C, H> {
    /// Creates a pipeline with custom containment and hull implementations.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn with_geometry(config: FilterConfig, containment: C, hull: H) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            filter: ContourDistanceFilter::with_containment(&config, containment),
            analyzer: ConvexHullAnalyzer::with_algorithm(hull),
            config,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Classifies all points against every ROI, in ROI index order.
    pub fn filter_all(&self, points: &[Point], rois: &[Roi]) -> Vec<FilterPartition> {
        let total = rois.len();
        rois.par_iter()
            .enumerate()
            .map(|(index, roi)| {
                log::info!("Processing ROI {} of {}", index + 1, total);
                if roi.is_degenerate() {
                    log::warn!(
                        "ROI {} (label {}) has {} vertices and encloses no area",
                        index,
                        roi.label,
                        roi.len()
                    );
                }
                self.filter.partition(roi, points)
            })
            .collect()
    }

    /// Runs every stage and returns the combined result.
    pub fn run(&self, points: &[Point], rois: &[Roi]) -> PipelineResult {
        let duplicate_ids = duplicate_ids(points);
        if !duplicate_ids.is_empty() {
            log::warn!(
                "{} point id(s) occur more than once; set operations compare full rows: {:?}",
                duplicate_ids.len(),
                duplicate_ids
            );
        }

        let partitions = self.filter_all(points, rois);
        let aggregate = aggregate(&partitions, points);
        log::debug!(
            "aggregated {} ROI(s): {} kept, {} excluded",
            partitions.len(),
            aggregate.kept_count(),
            aggregate.excluded_count()
        );

        let subsets: Vec<Vec<Vertex>> = partitions
            .iter()
            .map(|partition| partition.near.iter().map(Point::position).collect())
            .collect();
        let hulls = self.analyzer.analyze(&subsets);
        log::debug!(
            "{} of {} ROI(s) produced a hull, total area {}",
            hulls.surviving_count(),
            hulls.records.len(),
            hulls.total_area()
        );

        PipelineResult {
            partitions,
            aggregate,
            hulls,
            duplicate_ids,
        }
    }
}
