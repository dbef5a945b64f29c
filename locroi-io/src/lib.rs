//! locroi-io: File parsing and result writing for locroi.
//!
//! This crate reads localization tables and ROI polygon files, and writes
//! the kept points, excluded points, hull areas and hull vertices.
//!

mod error;
mod localization;
pub mod numeric;
mod paths;
mod roi_reader;
mod writer;

pub use error::{Error, Result};
pub use localization::{LocalizationFile, LocalizationParser};
pub use numeric::parse_scientific;
pub use paths::{format_threshold, OutputPaths};
pub use roi_reader::RoiParser;
pub use writer::ResultAssembler;
