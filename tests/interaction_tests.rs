use springcloth::{ClothConfig, ClothEngine, ClothError, GridIndex, Vec2};

#[test]
fn drag_overrides_spring_forces() {
    let config = ClothConfig::builder().with_gravity(50.0).with_stiffness(40.0).build();
    let mut cloth = ClothEngine::build(800.0f64, 300.0, config);
    let picked = cloth.pick(352.0, 98.0).unwrap();

    cloth.set_pointer(612.5, -33.25);
    cloth.step();
    assert_eq!(cloth.particle(picked).unwrap().pos, Vec2::new(612.5, -33.25));

    cloth.set_pointer(100.0, 290.0);
    cloth.step();
    assert_eq!(cloth.particle(picked).unwrap().pos, Vec2::new(100.0, 290.0));
}

#[test]
fn picks_within_distance_floor_tie_in_row_major_order() {
    let mut cloth = ClothEngine::build(800.0f64, 300.0, ClothConfig::default());
    // (350, 100) is particle (10, 10), but its upper neighbour at distance
    // exactly 10 also floors to 10 and comes first.
    assert_eq!(cloth.pick(350.0, 100.0).unwrap(), GridIndex::new(9, 10));
    // Off the grid, away from the floor, the nearest particle is unique.
    assert_eq!(cloth.pick(350.0, 155.0).unwrap(), GridIndex::new(14, 10));
}

#[test]
fn pick_without_pointer_holds_at_pick_point() {
    let mut cloth = ClothEngine::build(800.0f64, 300.0, ClothConfig::default());
    let at = cloth.pick(401.0, 99.0).unwrap();
    assert_eq!(cloth.pointer(), Vec2::new(401.0, 99.0));
    cloth.step();
    assert_eq!(cloth.particle(at).unwrap().pos, Vec2::new(401.0, 99.0));
}

#[test]
fn neighbors_follow_the_dragged_particle() {
    let mut cloth = ClothEngine::build(800.0f64, 300.0, ClothConfig::default());
    let at = cloth.pick(400.0, 155.0).unwrap();
    assert_eq!(at, GridIndex::new(14, 15));
    let before = cloth.position_at(14, 16).unwrap();
    cloth.set_pointer(500.0, 140.0);
    for _ in 0..30 {
        cloth.step();
    }
    let after = cloth.position_at(14, 16).unwrap();
    assert!(after.x > before.x, "right neighbour should be pulled right: {} -> {}", before.x, after.x);
}

#[test]
fn new_pick_replaces_previous_drag() {
    let mut cloth = ClothEngine::build(800.0f64, 300.0, ClothConfig::default());
    let first = cloth.pick(260.0, 50.0).unwrap();
    let second = cloth.pick(500.0, 120.0).unwrap();
    assert_ne!(first, second);
    assert_eq!(cloth.dragged(), Some(second));

    cloth.set_pointer(0.0, 0.0);
    cloth.step();
    assert_eq!(cloth.particle(second).unwrap().pos, Vec2::new(0.0, 0.0));
    assert_ne!(cloth.particle(first).unwrap().pos, Vec2::new(0.0, 0.0));
}

#[test]
fn release_stops_the_override() {
    let mut cloth = ClothEngine::build(800.0f64, 300.0, ClothConfig::default());
    let at = cloth.pick(400.0, 100.0).unwrap();
    cloth.set_pointer(400.0, 100.0);
    cloth.step();
    cloth.release();
    assert_eq!(cloth.dragged(), None);

    for _ in 0..5 {
        cloth.step();
    }
    // Nothing holds it any more, so gravity and its neighbours move it.
    assert_ne!(cloth.particle(at).unwrap().pos, Vec2::new(400.0, 100.0));
}

#[test]
fn release_without_pick_is_noop() {
    let mut cloth = ClothEngine::build(800.0f64, 300.0, ClothConfig::default());
    cloth.release();
    cloth.release();
    assert_eq!(cloth.dragged(), None);
    cloth.step();
    assert_eq!(cloth.step_count(), 1);
}

#[test]
fn pick_on_empty_grid_is_invalid_state() {
    let mut cloth = ClothEngine::build(100.0f64, 100.0, ClothConfig::default());
    assert_eq!(cloth.particle_count(), 0);
    assert_eq!(cloth.pick(10.0, 10.0), Err(ClothError::InvalidState));
    assert_eq!(cloth.dragged(), None);
    // Stepping an empty cloth is harmless.
    cloth.step();
}

#[test]
fn pick_radius_rejects_far_points() {
    let config = ClothConfig::builder().with_pick_radius(1000.0).build();
    let mut cloth = ClothEngine::build(800.0f64, 300.0, config);
    assert_eq!(cloth.pick(5000.0, 5000.0), Err(ClothError::NothingInRange));
    assert_eq!(cloth.dragged(), None);
    assert!(cloth.pick(700.0, 200.0).is_ok());
}

#[test]
fn pointer_far_from_grid_still_picks_nearest_without_radius() {
    let mut cloth = ClothEngine::build(800.0f64, 300.0, ClothConfig::default());
    let at = cloth.pick(-1.0e4, -1.0e4).unwrap();
    assert_eq!(at, GridIndex::new(0, 0));
}

#[test]
fn errors_display() {
    assert_eq!(ClothError::InvalidState.to_string(), "cloth grid has no particles");
    let err = ClothError::ParticleOutOfBounds { row: 3, col: 1, rows: 2, cols: 2 };
    assert_eq!(err.to_string(), "particle (3, 1) out of bounds (grid: 2x2)");
}
