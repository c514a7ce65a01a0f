use springcloth::{AttachedSides, ClothConfig, ClothEngine, Side, SidePatch};

#[test]
fn fluent_chain_sets_every_parameter() {
    let c: ClothConfig<f64> = ClothConfig::builder()
        .with_gravity(1.0)
        .with_friction(0.5)
        .with_mass(2.0)
        .with_stiffness(3.0)
        .with_step(0.1)
        .with_spawn_distance(4.0)
        .with_rest_length(5.0)
        .with_speed_limit(6.0)
        .build();
    assert_eq!(
        (c.gravity(), c.friction(), c.mass(), c.stiffness(), c.step()),
        (1.0, 0.5, 2.0, 3.0, 0.1),
    );
    assert_eq!((c.spawn_distance(), c.rest_length(), c.speed_limit()), (4.0, 5.0, 6.0));
}

#[test]
fn repeated_merges_accumulate() {
    let c: ClothConfig<f64> = ClothConfig::builder()
        .with_attached(SidePatch { right: Some(true), ..Default::default() })
        .with_attached(SidePatch { top: Some(false), ..Default::default() })
        .with_attached_named([("bottom", true), ("diagonal", true)])
        .build();
    assert_eq!(c.attached(), AttachedSides { top: false, right: true, bottom: true, left: false });
}

#[test]
fn side_names() {
    assert_eq!(Side::from_name("left"), Some(Side::Left));
    assert_eq!(Side::from_name("Left"), None);
    assert!(AttachedSides::default().get(Side::Top));
    assert!(!AttachedSides::NONE.any());
}

#[test]
fn out_of_range_values_are_accepted() {
    let config = ClothConfig::builder().with_friction(1.5).with_mass(-1.0).build();
    let mut cloth = ClothEngine::build(800.0f64, 300.0, config);
    for _ in 0..10 {
        cloth.step();
    }
    assert_eq!(cloth.step_count(), 10);
}

#[cfg(feature = "serde")]
#[test]
fn config_round_trips_through_json() {
    let config: ClothConfig<f64> = ClothConfig::builder()
        .with_gravity(9.5)
        .with_attached(SidePatch { left: Some(true), ..Default::default() })
        .with_pick_radius(1000.0)
        .build();
    let json = serde_json::to_string(&config).unwrap();
    let back: ClothConfig<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(config, back);
}
