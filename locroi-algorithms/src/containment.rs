//! Signed point-to-polygon distance.
//!
//! The sign convention follows the usual point-polygon test: positive inside,
//! negative outside, zero on an edge. The magnitude is the Euclidean distance
//! to the nearest edge.

use locroi_core::Vertex;

/// Point-in-polygon distance test used by the contour filter.
pub trait ContainmentTest: Send + Sync {
    /// Returns the signed distance from `point` to the boundary of `polygon`.
    ///
    /// An empty polygon has no boundary and reports `f64::NEG_INFINITY`.
    fn signed_distance(&self, polygon: &[Vertex], point: Vertex) -> f64;

    /// Returns the name of the test.
    fn name(&self) -> &'static str;
}

/// Per-edge projection with an even-odd crossing test for the sign.
///
/// Polygons with fewer than three vertices have no interior, so every point
/// is either on the point/segment (zero) or outside it.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeProjection;

impl ContainmentTest for EdgeProjection {
    fn signed_distance(&self, polygon: &[Vertex], point: Vertex) -> f64 {
        let n = polygon.len();
        if n == 0 {
            return f64::NEG_INFINITY;
        }

        let mut min_dist = f64::INFINITY;
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = polygon[j];
            let b = polygon[i];
            if on_segment(point, a, b) {
                return 0.0;
            }
            min_dist = min_dist.min(distance_to_segment(point, a, b));

            if n >= 3 && ((b.y > point.y) != (a.y > point.y)) {
                let x_cross = b.x + (point.y - b.y) * (a.x - b.x) / (a.y - b.y);
                if point.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }

        if inside {
            min_dist
        } else {
            -min_dist
        }
    }

    fn name(&self) -> &'static str {
        "EdgeProjection"
    }
}

/// Exact collinearity and bounding-box check. Exact on grid coordinates.
#[allow(clippy::float_cmp)]
fn on_segment(p: Vertex, a: Vertex, b: Vertex) -> bool {
    let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
    cross == 0.0
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

fn distance_to_segment(p: Vertex, a: Vertex, b: Vertex) -> f64 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let ab_len_sq = abx * abx + aby * aby;
    if ab_len_sq <= f64::EPSILON {
        return p.distance(&a);
    }
    let t = ((p.x - a.x) * abx + (p.y - a.y) * aby) / ab_len_sq;
    let t = t.clamp(0.0, 1.0);
    p.distance(&Vertex::new(a.x + abx * t, a.y + aby * t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Vertex> {
        vec![
            Vertex::new(2.0, 2.0),
            Vertex::new(8.0, 2.0),
            Vertex::new(8.0, 8.0),
            Vertex::new(2.0, 8.0),
        ]
    }

    #[test]
    fn test_inside_is_positive() {
        let d = EdgeProjection.signed_distance(&square(), Vertex::new(5.0, 4.0));
        assert_relative_eq!(d, 2.0);
    }

    #[test]
    fn test_outside_is_negative() {
        let d = EdgeProjection.signed_distance(&square(), Vertex::new(0.0, 5.0));
        assert_relative_eq!(d, -2.0);

        let corner = EdgeProjection.signed_distance(&square(), Vertex::new(0.0, 0.0));
        assert_relative_eq!(corner, -(8.0_f64).sqrt());
    }

    #[test]
    fn test_boundary_is_zero() {
        let poly = square();
        assert!(EdgeProjection.signed_distance(&poly, Vertex::new(2.0, 5.0)) == 0.0);
        assert!(EdgeProjection.signed_distance(&poly, Vertex::new(8.0, 8.0)) == 0.0);
    }

    #[test]
    fn test_diagonal_edge_boundary() {
        let triangle = vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(10.0, 0.0),
            Vertex::new(0.0, 10.0),
        ];
        assert!(EdgeProjection.signed_distance(&triangle, Vertex::new(3.0, 7.0)) == 0.0);
        assert!(EdgeProjection.signed_distance(&triangle, Vertex::new(2.0, 2.0)) > 0.0);
        assert!(EdgeProjection.signed_distance(&triangle, Vertex::new(6.0, 6.0)) < 0.0);
    }

    #[test]
    fn test_concave_polygon() {
        // U shape opening upwards; (5, 8) sits in the notch.
        let u_shape = vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(10.0, 0.0),
            Vertex::new(10.0, 10.0),
            Vertex::new(7.0, 10.0),
            Vertex::new(7.0, 3.0),
            Vertex::new(3.0, 3.0),
            Vertex::new(3.0, 10.0),
            Vertex::new(0.0, 10.0),
        ];
        let notch = EdgeProjection.signed_distance(&u_shape, Vertex::new(5.0, 8.0));
        assert_relative_eq!(notch, -2.0);
        let arm = EdgeProjection.signed_distance(&u_shape, Vertex::new(1.0, 8.0));
        assert_relative_eq!(arm, 1.0);
    }

    #[test]
    fn test_degenerate_polygons() {
        let segment = vec![Vertex::new(0.0, 0.0), Vertex::new(10.0, 0.0)];
        assert_relative_eq!(
            EdgeProjection.signed_distance(&segment, Vertex::new(5.0, 3.0)),
            -3.0
        );
        assert!(EdgeProjection.signed_distance(&segment, Vertex::new(4.0, 0.0)) == 0.0);

        let single = vec![Vertex::new(1.0, 1.0)];
        assert_relative_eq!(
            EdgeProjection.signed_distance(&single, Vertex::new(4.0, 5.0)),
            -5.0
        );

        assert!(EdgeProjection
            .signed_distance(&[], Vertex::new(0.0, 0.0))
            .is_infinite());
    }
}
