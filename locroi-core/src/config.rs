//! Filter configuration.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for ROI exclusion filtering.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FilterConfig {
    /// Minimum distance outside every ROI for a point to be kept.
    pub threshold_distance: f64,
    /// Field separator of the ROI file.
    pub roi_separator: char,
    /// Scale applied before projecting coordinates onto the integer grid.
    pub grid_scale: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            threshold_distance: 0.0,
            roi_separator: ' ',
            grid_scale: 1.0,
        }
    }
}

impl FilterConfig {
    /// Creates a new filter configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the threshold distance.
    #[must_use]
    pub fn with_threshold_distance(mut self, distance: f64) -> Self {
        self.threshold_distance = distance;
        self
    }

    /// Sets the ROI field separator.
    #[must_use]
    pub fn with_roi_separator(mut self, separator: char) -> Self {
        self.roi_separator = separator;
        self
    }

    /// Sets the grid scale factor.
    #[must_use]
    pub fn with_grid_scale(mut self, scale: f64) -> Self {
        self.grid_scale = scale;
        self
    }

    /// Threshold expressed in grid units.
    #[inline]
    #[must_use]
    pub fn scaled_threshold(&self) -> f64 {
        self.threshold_distance * self.grid_scale
    }

    /// Checks that the numeric parameters are usable.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] for a negative or non-finite threshold,
    /// or a grid scale that is not a positive finite number.
    pub fn validate(&self) -> Result<()> {
        if !self.threshold_distance.is_finite() || self.threshold_distance < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "threshold distance must be a finite value >= 0, got {}",
                self.threshold_distance
            )));
        }
        if !self.grid_scale.is_finite() || self.grid_scale <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "grid scale must be a finite value > 0, got {}",
                self.grid_scale
            )));
        }
        Ok(())
    }
}
