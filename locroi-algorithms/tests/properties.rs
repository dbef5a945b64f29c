use approx::assert_relative_eq;
use locroi_algorithms::{
    ContourDistanceFilter, ConvexHullAnalyzer, ExclusionPipeline, FilterConfig,
};
use locroi_core::{Point, PointKey, Roi, Vertex};
use std::collections::HashSet;

/// Small deterministic generator so the tests need no extra dependency.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self, max: f64) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        #[allow(clippy::cast_precision_loss)]
        let unit = (self.0 >> 11) as f64 / (1u64 << 53) as f64;
        unit * max
    }
}

fn scattered_points(count: i64, seed: u64) -> Vec<Point> {
    let mut rng = Lcg(seed);
    (0..count)
        .map(|id| Point::new(rng.next_f64(100.0), rng.next_f64(100.0), rng.next_f64(500.0), id))
        .collect()
}

fn rois() -> Vec<Roi> {
    vec![
        Roi::new(
            1,
            vec![
                Vertex::new(10.0, 10.0),
                Vertex::new(40.0, 10.0),
                Vertex::new(40.0, 30.0),
                Vertex::new(10.0, 30.0),
            ],
        ),
        Roi::new(
            2,
            vec![
                Vertex::new(60.0, 60.0),
                Vertex::new(90.0, 70.0),
                Vertex::new(70.0, 95.0),
            ],
        ),
        Roi::new(
            3,
            vec![
                Vertex::new(30.0, 20.0),
                Vertex::new(55.0, 20.0),
                Vertex::new(55.0, 50.0),
                Vertex::new(45.0, 50.0),
                Vertex::new(45.0, 30.0),
                Vertex::new(30.0, 30.0),
            ],
        ),
    ]
}

#[test]
fn test_kept_and_excluded_partition_all_points() {
    let points = scattered_points(500, 7);
    let config = FilterConfig::new().with_threshold_distance(2.0);
    let result = ExclusionPipeline::new(config).unwrap().run(&points, &rois());

    let kept: HashSet<PointKey> = result.aggregate.final_kept.iter().map(Point::key).collect();
    let excluded: HashSet<PointKey> = result.aggregate.excluded.iter().map(Point::key).collect();
    let all: HashSet<PointKey> = points.iter().map(Point::key).collect();

    assert!(kept.is_disjoint(&excluded));
    let union: HashSet<PointKey> = kept.union(&excluded).copied().collect();
    assert_eq!(union, all);
    assert_eq!(
        result.aggregate.kept_count() + result.aggregate.excluded_count(),
        points.len()
    );
}

#[test]
fn test_each_partition_covers_all_points() {
    let points = scattered_points(300, 11);
    let config = FilterConfig::new().with_threshold_distance(4.5);
    let pipeline = ExclusionPipeline::new(config).unwrap();

    for partition in pipeline.filter_all(&points, &rois()) {
        assert_eq!(partition.kept.len() + partition.near.len(), points.len());
    }
}

#[test]
fn test_threshold_monotonicity() {
    let points = scattered_points(400, 23);
    for roi in rois() {
        let mut previous = usize::MAX;
        for threshold in [0.0, 0.5, 1.0, 2.0, 5.0, 10.0, 25.0] {
            let config = FilterConfig::new().with_threshold_distance(threshold);
            let kept = ContourDistanceFilter::new(&config)
                .partition(&roi, &points)
                .kept
                .len();
            assert!(kept <= previous, "threshold {threshold}: {kept} > {previous}");
            previous = kept;
        }
    }
}

#[test]
fn test_hull_area_invariant_to_point_order() {
    let points: Vec<Vertex> = scattered_points(200, 5)
        .iter()
        .map(Point::position)
        .collect();
    let mut reversed = points.clone();
    reversed.reverse();
    let mut rotated = points.clone();
    rotated.rotate_left(73);

    let analyzer = ConvexHullAnalyzer::new();
    let area = analyzer.hull(&points).unwrap().area;
    assert_relative_eq!(analyzer.hull(&reversed).unwrap().area, area);
    assert_relative_eq!(analyzer.hull(&rotated).unwrap().area, area);
}

#[test]
fn test_degenerate_rois_never_reach_area_totals() {
    let points = vec![
        Point::new(5.0, 5.0, 1.0, 1),
        Point::new(6.0, 5.0, 1.0, 2),
        Point::new(50.0, 50.0, 1.0, 3),
        Point::new(58.0, 50.0, 1.0, 4),
        Point::new(50.0, 58.0, 1.0, 5),
    ];
    let tight = |lo: f64, hi: f64| {
        Roi::new(
            0,
            vec![
                Vertex::new(lo, lo),
                Vertex::new(hi, lo),
                Vertex::new(hi, hi),
                Vertex::new(lo, hi),
            ],
        )
    };
    let rois = vec![tight(0.0, 10.0), tight(45.0, 65.0), tight(200.0, 210.0)];

    let result = ExclusionPipeline::new(FilterConfig::default())
        .unwrap()
        .run(&points, &rois);
    assert_eq!(result.hulls.surviving_indices(), vec![1]);
    assert_relative_eq!(result.hulls.total_area(), 32.0);
    let skipped: Vec<(usize, usize)> = result
        .hulls
        .diagnostics
        .iter()
        .map(|d| (d.roi_index, d.point_count))
        .collect();
    assert_eq!(skipped, vec![(0, 2), (2, 0)]);
}
