//! locroi-algorithms: Geometry and set algebra for ROI exclusion filtering.
//!
//! This crate provides the computational stages of the pipeline:
//! - **Contour filter** - signed point-to-polygon distance on an integer grid
//! - **Aggregation** - union of per-ROI exclusions and the kept difference
//! - **Hull analysis** - convex hull vertices and area per ROI
//!
//! The distance test and the hull algorithm sit behind the
//! [`ContainmentTest`] and [`HullAlgorithm`] traits.
//!
#![warn(missing_docs)]

mod aggregate;
pub mod containment;
mod contour;
pub mod convex;
mod hull_analysis;
mod pipeline;

pub use aggregate::{aggregate, duplicate_ids};
pub use containment::{ContainmentTest, EdgeProjection};
pub use contour::ContourDistanceFilter;
pub use convex::{polygon_area, HullAlgorithm, MonotoneChain};
pub use hull_analysis::{ConvexHullAnalyzer, HullAnalysis};
pub use pipeline::{ExclusionPipeline, PipelineResult};

// Re-export core configuration
pub use locroi_core::FilterConfig;
