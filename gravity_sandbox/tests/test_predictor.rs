//! Trajectory preview: purity, isolation from the registry, and accuracy

mod common;

use common::{planet, simulation_with, star, WHITE};
use gravity_sandbox::{
    Body, IntegratorKind, PhysicsConfig, Simulation, SimulationConfig, SpawnParams,
    TrajectoryPredictor, Vector,
};

fn candidate() -> Body {
    Body::new(Vector::new(0.0, -700.0), Vector::new(150.0, 0.0), 5.0, 25.0, WHITE)
}

#[test]
fn test_repeated_predictions_are_identical() {
    let mut sim = Simulation::default();
    sim.init_default_system(Vector::ZERO).unwrap();
    for _ in 0..30 {
        sim.advance(1.0 / 60.0);
    }

    let predictor = TrajectoryPredictor::new(2000, 1.0 / 120.0, IntegratorKind::VelocityVerlet);
    let first = predictor.predict(&candidate(), sim.bodies(), sim.physics());
    let second = predictor.predict(&candidate(), sim.bodies(), sim.physics());

    assert_eq!(first.len(), 2000);
    assert_eq!(first, second);
}

#[test]
fn test_prediction_does_not_touch_sources() {
    let mut sim = Simulation::default();
    sim.init_default_system(Vector::ZERO).unwrap();
    sim.advance(0.5);
    let snapshot = sim.bodies().to_vec();

    let predictor = TrajectoryPredictor::default();
    let body = candidate();
    let path = predictor.predict(&body, sim.bodies(), sim.physics());

    assert_eq!(path.len(), 10_000);
    assert_eq!(sim.bodies(), snapshot.as_slice());
    assert_eq!(body, candidate());
}

#[test]
fn test_gesture_preview_leaves_registry_unchanged() {
    let mut sim = Simulation::default();
    sim.init_default_system(Vector::ZERO).unwrap();
    let snapshot = sim.bodies().to_vec();

    let press = Vector::new(0.0, -700.0);
    sim.on_press_start(press, SpawnParams::new(5.0, 25.0, WHITE)).unwrap();
    sim.on_drag(press + Vector::new(120.0, 0.0));
    let first = sim.preview().unwrap().to_vec();

    sim.on_drag(press + Vector::new(60.0, 0.0));
    sim.on_drag(press + Vector::new(120.0, 0.0));
    let again = sim.preview().unwrap().to_vec();

    assert_eq!(first, again);
    assert_eq!(sim.bodies(), snapshot.as_slice());
}

#[test]
fn test_preview_follows_registry_after_steps() {
    let mut sim = simulation_with(SimulationConfig::default(), vec![star(), planet()]);
    let press = Vector::new(-400.0, 0.0);
    sim.on_press_start(press, SpawnParams::new(5.0, 25.0, WHITE)).unwrap();
    sim.on_drag(press + Vector::new(0.0, 200.0));
    let before = sim.preview().unwrap().to_vec();

    sim.advance(0.25);
    let after = sim.preview().unwrap().to_vec();

    // The planet moved, so the field the candidate sees changed
    assert_ne!(before, after);
    assert_eq!(after.len(), before.len());
}

#[test]
fn test_preview_matches_committed_path_around_lone_star() {
    // A light candidate barely moves the star, so the frozen-source preview
    // should agree with the full simulation over a short horizon
    let mut config = SimulationConfig::default();
    config.prediction.steps = 120;
    config.prediction.dt = config.physics.fixed_dt;
    let mut sim = simulation_with(config, vec![star()]);

    let press = Vector::new(500.0, 0.0);
    let release = press + Vector::new(0.0, 150.0);
    sim.on_press_start(press, SpawnParams::new(1e-3, 20.0, WHITE)).unwrap();
    sim.on_drag(release);
    let preview = sim.preview().unwrap().to_vec();

    let id = sim.on_release(release).unwrap().unwrap();
    let dt = sim.scheduler().fixed_dt();
    for _ in 0..120 {
        sim.advance(dt);
    }
    assert_eq!(sim.steps_taken(), 120);

    let actual = sim.registry().get(id).unwrap().position;
    let predicted = *preview.last().unwrap();
    assert!(
        (actual - predicted).length() < 1e-3,
        "actual {} vs predicted {}",
        actual,
        predicted
    );
}

#[test]
fn test_semi_implicit_predictor_is_also_pure() {
    let physics = PhysicsConfig {
        integrator: IntegratorKind::SemiImplicitEuler,
        ..PhysicsConfig::default()
    };
    let sources = vec![star(), planet()];
    let predictor = TrajectoryPredictor::new(500, 1.0 / 120.0, physics.integrator);

    let first = predictor.predict(&candidate(), &sources, &physics);
    let second = predictor.predict(&candidate(), &sources, &physics);

    assert_eq!(first, second);
    assert_eq!(sources, vec![star(), planet()]);
}
