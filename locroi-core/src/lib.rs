//! locroi-core: Core types and configuration for localization ROI filtering.
//!
//! This crate provides the data model shared by the parsers, the geometric
//! filter and the convex hull analysis: localization points, ROI polygons,
//! per-ROI partitions, aggregated exclusion sets and hull records.
//!

pub mod config;
pub mod error;
pub mod hull;
pub mod partition;
pub mod point;
pub mod roi;

pub use config::FilterConfig;
pub use error::{Error, Result};
pub use hull::{DiagnosticReason, HullDiagnostic, HullResult, RoiHullRecord};
pub use partition::{AggregatedResult, FilterPartition};
pub use point::{FrameHeader, Point, PointKey, Vertex};
pub use roi::Roi;
