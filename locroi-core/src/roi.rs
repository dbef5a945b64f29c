//! ROI polygon type.

use crate::Vertex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Region of interest: a closed polygon in drawing order.
///
/// The polygon is not required to be convex. Position in the parsed
/// sequence, not `label`, is the canonical ROI index.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Roi {
    /// Identifier read from the ROI file header line.
    pub label: i64,
    /// Polygon vertices in file order.
    pub vertices: Vec<Vertex>,
}

impl Roi {
    /// Creates a ROI from its label and vertices.
    #[must_use]
    pub fn new(label: i64, vertices: Vec<Vertex>) -> Self {
        Self { label, vertices }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the ROI has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns true if the ROI cannot enclose an area (fewer than 3 vertices).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Returns an iterator over the vertices.
    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }
}

impl FromIterator<Vertex> for Roi {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        Self {
            label: 0,
            vertices: iter.into_iter().collect(),
        }
    }
}
