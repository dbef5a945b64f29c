//! Localization point types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Vertex {
    /// Creates a new vertex.
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Computes the Euclidean distance to another vertex.
    #[inline]
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Vertex {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A single molecule localization.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Integrated brightness of the localization.
    pub luminosity: f64,
    /// Localization identifier. Expected unique within a file but not enforced.
    pub id: i64,
}

impl Point {
    /// Creates a new point.
    #[inline]
    #[must_use]
    pub fn new(x: f64, y: f64, luminosity: f64, id: i64) -> Self {
        Self {
            x,
            y,
            luminosity,
            id,
        }
    }

    /// Returns the `(x, y)` projection of this point.
    #[inline]
    #[must_use]
    pub fn position(&self) -> Vertex {
        Vertex::new(self.x, self.y)
    }

    /// Returns the identity key used by set operations.
    #[inline]
    #[must_use]
    pub fn key(&self) -> PointKey {
        PointKey::from(self)
    }
}

/// Hashable identity of a [`Point`]: all four fields compared exactly.
///
/// Two points sharing an `id` but differing in any coordinate are distinct
/// keys; points equal in all fields collapse to one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointKey {
    x: u64,
    y: u64,
    luminosity: u64,
    id: i64,
}

impl From<&Point> for PointKey {
    fn from(point: &Point) -> Self {
        Self {
            x: canonical_bits(point.x),
            y: canonical_bits(point.y),
            luminosity: canonical_bits(point.luminosity),
            id: point.id,
        }
    }
}

/// Bit pattern with `-0.0` folded onto `0.0` and a single NaN.
#[inline]
fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        (value + 0.0).to_bits()
    }
}

/// Frame identifier taken from the first line of a localization file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FrameHeader(pub String);

impl FrameHeader {
    /// Creates a new frame header from its raw token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the token as an integer, when it is one.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        self.0.trim().parse().ok()
    }
}

impl std::fmt::Display for FrameHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vertex_distance() {
        let a = Vertex::new(0.0, 0.0);
        let b = Vertex::new(3.0, 4.0);
        assert_relative_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_point_key_identity() {
        let p = Point::new(1.0, 2.0, 100.0, 7);
        let same = Point::new(1.0, 2.0, 100.0, 7);
        let moved = Point::new(1.5, 2.0, 100.0, 7);

        assert_eq!(p.key(), same.key());
        assert_ne!(p.key(), moved.key());
    }

    #[test]
    fn test_point_key_signed_zero() {
        let p = Point::new(0.0, -0.0, 1.0, 1);
        let q = Point::new(-0.0, 0.0, 1.0, 1);
        assert_eq!(p.key(), q.key());
    }

    #[test]
    fn test_frame_header() {
        let frame = FrameHeader::new("7");
        assert_eq!(frame.as_integer(), Some(7));
        assert_eq!(frame.to_string(), "7");
        assert_eq!(FrameHeader::new("frame_a").as_integer(), None);
    }
}
