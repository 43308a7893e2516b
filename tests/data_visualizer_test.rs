//! End-to-end fit protocol tests through the public API.
//!
//! Run: cargo test --test data_visualizer_test

#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use trueno_viz_features::prelude::*;

fn grid(rows: usize, cols: usize) -> Matrix {
    let data = (0..rows * cols).map(|i| i as f32).collect();
    Matrix::new(data, rows, cols).unwrap()
}

fn scatter(config: VisualizerConfig) -> ScatterVisualizer {
    ScatterVisualizer::new(&config.size(120, 90)).unwrap()
}

// ============================================================================
// Target type resolution
// ============================================================================

#[test]
fn test_no_target_always_resolves_single() {
    for tag in ["auto", "single", "discrete", "continuous"] {
        let mut viz = scatter(VisualizerConfig::new().target_type(tag));
        viz.fit(&grid(5, 2), None).unwrap();
        assert_eq!(viz.target_type(), Some(TargetType::Single), "requested {tag}");
        assert_eq!(viz.target_colors().and_then(TargetColors::as_single), Some(Rgba::BLUE));
    }
}

#[test]
fn test_auto_splits_on_ten_distinct_values() {
    let x = grid(12, 2);

    let mut viz = scatter(VisualizerConfig::new());
    let nine = Target::from((0..12).map(|i| i % 9).collect::<Vec<i64>>());
    viz.fit(&x, Some(&nine)).unwrap();
    assert_eq!(viz.target_type(), Some(TargetType::Discrete));

    let ten = Target::from((0..12).map(|i| i % 10).collect::<Vec<i64>>());
    viz.fit(&x, Some(&ten)).unwrap();
    assert_eq!(viz.target_type(), Some(TargetType::Continuous));
}

#[test]
fn test_explicit_request_overrides_heuristic() {
    let x = grid(20, 2);
    let many = Target::from((0..20).collect::<Vec<i64>>());
    let few = Target::from(vec![0_i64, 1].repeat(10));

    let mut discrete = scatter(VisualizerConfig::new().target_type("discrete"));
    discrete.fit(&x, Some(&many)).unwrap();
    assert_eq!(discrete.target_type(), Some(TargetType::Discrete));
    assert_eq!(discrete.classes().map(<[String]>::len), Some(20));

    let mut continuous = scatter(VisualizerConfig::new().target_type("continuous"));
    continuous.fit(&x, Some(&few)).unwrap();
    assert_eq!(continuous.target_type(), Some(TargetType::Continuous));

    let mut single = scatter(VisualizerConfig::new().target_type("single"));
    single.fit(&x, Some(&few)).unwrap();
    assert_eq!(single.target_type(), Some(TargetType::Single));
}

#[test]
fn test_unknown_target_type_rejected_before_fit() {
    let err = ScatterVisualizer::new(&VisualizerConfig::new().target_type("bogus")).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("bogus"));
}

// ============================================================================
// Color assignment
// ============================================================================

#[test]
fn test_discrete_mapping_matches_class_list() {
    let config = VisualizerConfig::new()
        .classes(["a", "b", "c"])
        .color(["#ff0000", "#00ff00", "#0000ff"]);
    let mut viz = scatter(config);
    let y = Target::from(vec!["a", "b", "c", "a"]);
    viz.fit(&grid(4, 2), Some(&y)).unwrap();

    let map = viz.target_colors().and_then(TargetColors::as_discrete).unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map.classes().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    assert_eq!(
        map.iter().map(|(_, c)| c).collect::<Vec<_>>(),
        vec![Rgba::RED, Rgba::GREEN, Rgba::BLUE]
    );
}

#[test]
fn test_class_mismatch_warns_and_trusts_user_classes() {
    let mut viz = scatter(VisualizerConfig::new().classes(["x", "y"]));
    let y = Target::from(vec![0_i64, 1, 2, 0, 1, 2]);

    let addr: *const ScatterVisualizer = &viz;
    let returned = viz.fit(&grid(6, 2), Some(&y)).unwrap();
    assert!(std::ptr::eq(addr, returned));

    assert_eq!(viz.classes(), Some(&["x".to_string(), "y".to_string()][..]));
    assert_eq!(
        viz.target_state().warnings(),
        &[Warning::ClassCountMismatch { classes: 2, distinct: 3 }]
    );
}

#[test]
fn test_continuous_range_is_min_max() {
    let mut viz = scatter(VisualizerConfig::new().target_type("continuous"));
    let y = Target::from(vec![1_i64, 5, 3, 9, 2]);
    viz.fit(&grid(5, 2), Some(&y)).unwrap();

    let (min, max) = viz.range().unwrap();
    assert_relative_eq!(min, 1.0);
    assert_relative_eq!(max, 9.0);

    let scale = viz.target_colors().and_then(TargetColors::as_continuous).unwrap();
    assert_eq!(scale.scale(1.0), Colormap::Viridis.stops()[0]);
}

// ============================================================================
// Feature names
// ============================================================================

#[test]
fn test_features_from_column_names() {
    let df = DataFrame::new()
        .with_column("age", &[31.0, 45.0, 22.0])
        .unwrap()
        .with_column("income", &[40.0, 85.0, 30.0])
        .unwrap();
    let mut viz = scatter(VisualizerConfig::new());
    viz.fit(&df, None).unwrap();

    let names: Vec<String> = viz.features().unwrap().iter().map(ToString::to_string).collect();
    assert_eq!(names, vec!["age", "income"]);
}

#[test]
fn test_features_from_positions_and_idempotent() {
    let mut viz = scatter(VisualizerConfig::new());
    viz.fit(&grid(3, 4), None).unwrap();
    let expected: Vec<FeatureLabel> = (0..4).map(FeatureLabel::Position).collect();
    assert_eq!(viz.features(), Some(&expected[..]));

    viz.fit(&grid(3, 3), None).unwrap();
    assert_eq!(viz.features(), Some(&expected[..]));
}

// ============================================================================
// Pipeline contract
// ============================================================================

#[test]
fn test_transform_is_identity() {
    let viz = scatter(VisualizerConfig::new());
    let x = grid(7, 3);
    let out = viz.transform(x.clone());
    assert_eq!(out.shape(), x.shape());
    assert_eq!(out, x);
}

#[test]
fn test_fit_chains_into_show() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scatter.png");
    let config = VisualizerConfig::new().outpath(path.to_string_lossy());

    let mut viz = scatter(config);
    let y = Target::from(vec!["a", "b", "a", "b"]);
    viz.fit(&grid(4, 2), Some(&y)).unwrap().show().unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn test_fit_transform_show_returns_input() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");
    let mut viz = scatter(VisualizerConfig::new().outpath(path.to_string_lossy()));

    let x = grid(4, 2);
    let out = viz.fit_transform_show(x.clone(), None, &ScatterOptions::default()).unwrap();
    assert_eq!(out, x);
    assert!(path.exists());
}
