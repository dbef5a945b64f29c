//! Convex hull construction.

use locroi_core::Vertex;

/// Convex hull algorithm used by the hull analyzer.
pub trait HullAlgorithm: Send + Sync {
    /// Returns indices into `points` of the hull vertices, counter-clockwise.
    ///
    /// Points lying on a hull edge are not reported. Fewer than three indices
    /// means the input has no enclosed area.
    fn hull_indices(&self, points: &[Vertex]) -> Vec<usize>;

    /// Returns the name of the algorithm.
    fn name(&self) -> &'static str;
}

/// Andrew's monotone chain, O(n log n).
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotoneChain;

impl HullAlgorithm for MonotoneChain {
    fn hull_indices(&self, points: &[Vertex]) -> Vec<usize> {
        if points.len() < 3 {
            return (0..points.len()).collect();
        }

        let mut order: Vec<usize> = (0..points.len()).collect();
        order.sort_by(|&a, &b| {
            points[a]
                .x
                .total_cmp(&points[b].x)
                .then_with(|| points[a].y.total_cmp(&points[b].y))
        });

        let mut lower: Vec<usize> = Vec::with_capacity(order.len());
        for &i in &order {
            while lower.len() >= 2
                && cross(
                    points[lower[lower.len() - 2]],
                    points[lower[lower.len() - 1]],
                    points[i],
                ) <= 0.0
            {
                lower.pop();
            }
            lower.push(i);
        }

        let mut upper: Vec<usize> = Vec::with_capacity(order.len());
        for &i in order.iter().rev() {
            while upper.len() >= 2
                && cross(
                    points[upper[upper.len() - 2]],
                    points[upper[upper.len() - 1]],
                    points[i],
                ) <= 0.0
            {
                upper.pop();
            }
            upper.push(i);
        }

        // Each chain ends where the other starts.
        lower.pop();
        upper.pop();
        lower.extend(upper);

        // All points coincident: both chains collapse onto one index.
        if lower.len() == 2 && points[lower[0]] == points[lower[1]] {
            lower.pop();
        }
        lower
    }

    fn name(&self) -> &'static str {
        "MonotoneChain"
    }
}

/// Area of a simple polygon (shoelace formula), always non-negative.
#[must_use]
pub fn polygon_area(vertices: &[Vertex]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut area2 = 0.0;
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        area2 += a.x * b.y - b.x * a.y;
    }
    area2.abs() / 2.0
}

#[inline]
fn cross(o: Vertex, a: Vertex, b: Vertex) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn vertices(coords: &[(f64, f64)]) -> Vec<Vertex> {
        coords.iter().copied().map(Vertex::from).collect()
    }

    #[test]
    fn test_square_with_interior_point() {
        let points = vertices(&[(0.0, 0.0), (10.0, 0.0), (5.0, 5.0), (10.0, 10.0), (0.0, 10.0)]);
        let hull = MonotoneChain.hull_indices(&points);
        assert_eq!(hull, vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_counter_clockwise_order() {
        let points = vertices(&[(0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]);
        let hull: Vec<Vertex> = MonotoneChain
            .hull_indices(&points)
            .into_iter()
            .map(|i| points[i])
            .collect();

        let mut signed = 0.0;
        for i in 0..hull.len() {
            let a = hull[i];
            let b = hull[(i + 1) % hull.len()];
            signed += a.x * b.y - b.x * a.y;
        }
        assert!(signed > 0.0);
        assert_relative_eq!(polygon_area(&hull), 100.0);
    }

    #[test]
    fn test_edge_points_are_dropped() {
        let points = vertices(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let hull = MonotoneChain.hull_indices(&points);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&1));
    }

    #[test]
    fn test_collinear_and_coincident() {
        let line = vertices(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
        assert_eq!(MonotoneChain.hull_indices(&line).len(), 2);

        let same = vertices(&[(4.0, 4.0), (4.0, 4.0), (4.0, 4.0)]);
        assert_eq!(MonotoneChain.hull_indices(&same).len(), 1);
    }

    #[test]
    fn test_polygon_area_orientation_independent() {
        let ccw = vertices(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)]);
        let cw = vertices(&[(4.0, 3.0), (4.0, 0.0), (0.0, 0.0)]);
        assert_relative_eq!(polygon_area(&ccw), 6.0);
        assert_relative_eq!(polygon_area(&cw), 6.0);
        assert_relative_eq!(polygon_area(&ccw[..2]), 0.0);
    }
}
