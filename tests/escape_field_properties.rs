use std::sync::atomic::{AtomicBool, Ordering};

use escape_field::{
    Cancelled, Complex, EngineError, GridShape, NeverCancel, NoProgress, ParameterError, Region,
    RegionError, compute_escape_field, compute_escape_field_observed,
    compute_escape_field_per_point, escape_time, generate_grid,
};

fn classic_region() -> Region {
    Region::new(-2.0, 1.0, -1.0, 1.0).unwrap()
}

#[test]
fn values_lie_within_budget() {
    for max_iter in [1, 7, 100] {
        let field = compute_escape_field(classic_region(), 90, max_iter).unwrap();

        assert_eq!(field.max_iter(), max_iter);
        assert!(field.values().iter().all(|&v| v <= max_iter));
    }
}

#[test]
fn points_outside_radius_two_escape_at_zero() {
    let region = classic_region();
    let grid = generate_grid(&region, 60).unwrap();
    let field = compute_escape_field(region, 60, 80).unwrap();

    for (c, &value) in grid.points().zip(field.values()) {
        if c.magnitude_squared() > 4.0 {
            assert_eq!(value, 0, "c = {:?}", c);
        } else {
            assert!(value > 0, "c = {:?}", c);
        }
    }
}

#[test]
fn origin_never_escapes() {
    // 5 columns over [-1, 1] put a sample exactly on 0 + 0i
    let region = Region::new(-1.0, 1.0, -1.0, 1.0).unwrap();

    for max_iter in [1, 2, 33, 500] {
        let field = compute_escape_field(region, 5, max_iter).unwrap();

        assert_eq!(field.get(2, 2), Some(max_iter));
    }
}

#[test]
fn raising_budget_only_refines_bounded_points() {
    let region = Region::new(-0.9, -0.6, 0.1, 0.3).unwrap();
    let low = compute_escape_field(region, 80, 30).unwrap();
    let high = compute_escape_field(region, 80, 120).unwrap();

    assert_eq!(low.shape(), high.shape());

    for (&before, &after) in low.values().iter().zip(high.values()) {
        if before < 30 {
            assert_eq!(after, before);
        } else {
            assert!(after >= 30);
        }
    }
}

#[test]
fn doubling_target_nx_doubles_columns() {
    let region = Region::new(-2.0, 1.0, -1.2, 1.2).unwrap();
    let small = compute_escape_field(region, 150, 10).unwrap().shape();
    let large = compute_escape_field(region, 300, 10).unwrap().shape();

    assert_eq!(large.nx(), 2 * small.nx());
    assert_eq!(small.ny(), 120);
    assert_eq!(large.ny(), 240);
}

#[test]
fn scenario_coarse_classic_view() {
    let field = compute_escape_field(classic_region(), 3, 100).unwrap();

    assert_eq!(field.shape(), GridShape::derive(&classic_region(), 3).unwrap());
    assert_eq!((field.shape().ny(), field.shape().nx()), (2, 3));
    assert_eq!(field.values().len(), 6);
    // Last row, last column is c = 1 + 1i
    assert!(field.get(1, 2).unwrap() < 5);
}

#[test]
fn scenario_region_around_origin_is_bounded() {
    let region = Region::new(-0.1, 0.1, -0.1, 0.1).unwrap();
    let field = compute_escape_field(region, 5, 50).unwrap();

    assert_eq!((field.shape().ny(), field.shape().nx()), (5, 5));
    assert!(field.values().iter().all(|&v| v == 50));
}

#[test]
fn scenario_zero_parameters_are_invalid() {
    assert_eq!(
        compute_escape_field(classic_region(), 0, 100),
        Err(EngineError::InvalidParameter(ParameterError::ZeroTargetNx))
    );
    assert_eq!(
        compute_escape_field(classic_region(), 3, 0),
        Err(EngineError::InvalidParameter(
            ParameterError::ZeroMaxIterations
        ))
    );
}

#[test]
fn scenario_inverted_region_is_invalid() {
    fn run(real_min: f64, real_max: f64) -> Result<(), EngineError> {
        let region = Region::new(real_min, real_max, -1.0, 1.0)?;
        compute_escape_field(region, 3, 100)?;
        Ok(())
    }

    assert!(matches!(
        run(1.0, -2.0),
        Err(EngineError::InvalidRegion(RegionError::InvalidSpan { .. }))
    ));
    assert!(matches!(
        run(1.0, 1.0),
        Err(EngineError::InvalidRegion(RegionError::InvalidSpan { .. }))
    ));
}

#[test]
fn scenario_cancel_after_first_round() {
    let first_round_done = AtomicBool::new(false);
    let progress = |iteration: u32, _max_iter: u32| {
        if iteration >= 1 {
            first_round_done.store(true, Ordering::SeqCst);
        }
    };
    let cancel = || first_round_done.load(Ordering::SeqCst);

    let result = compute_escape_field_observed(classic_region(), 1000, 1000, &progress, &cancel);

    assert_eq!(result, Err(EngineError::Cancelled(Cancelled)));
}

#[test]
fn observed_call_without_cancellation_matches_plain_call() {
    let region = Region::new(-1.5, -1.2, -0.1, 0.1).unwrap();

    let plain = compute_escape_field(region, 50, 60).unwrap();
    let observed =
        compute_escape_field_observed(region, 50, 60, &NoProgress, &NeverCancel).unwrap();

    assert_eq!(plain, observed);
}

#[test]
fn pruned_and_per_point_fields_agree() {
    let region = Region::new(-0.7454, -0.7426, 0.1123, 0.1142).unwrap();

    let pruned = compute_escape_field(region, 120, 400).unwrap();
    let per_point = compute_escape_field_per_point(region, 120, 400, &NeverCancel).unwrap();

    assert_eq!(pruned, per_point);
}

#[test]
fn field_values_match_single_point_escape_time() {
    let region = Region::new(-2.0, 0.5, -1.25, 1.25).unwrap();
    let grid = generate_grid(&region, 40).unwrap();
    let field = compute_escape_field(region, 40, 64).unwrap();

    let expected: Vec<u32> = grid.points().map(|c: Complex| escape_time(c, 64)).collect();

    assert_eq!(field.values(), expected.as_slice());
}

#[test]
fn region_wider_than_f64_max_computes_a_single_row() {
    let region = Region::new(-1e308, 1e308, -1.0, 1.0).unwrap();

    let pruned = compute_escape_field(region, 4, 50).unwrap();
    let per_point = compute_escape_field_per_point(region, 4, 50, &NeverCancel).unwrap();

    assert_eq!(pruned.shape().nx(), 4);
    assert_eq!(pruned.shape().ny(), 1);
    assert_eq!(pruned.values(), &[0, 0, 0, 0]);
    assert_eq!(pruned, per_point);
}
