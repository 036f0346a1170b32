//! Fail-fast validation of the step contract

use glam::Vec3;
use springnet_core::engine::{Spring, World};
use springnet_core::params::StepParams;
use springnet_core::stepper::{self, StepError};

fn create_test_world() -> World {
    let mut world = World::new();
    world.add_particle(Vec3::new(-0.3, 0.0, 0.0));
    world.add_particle(Vec3::new(0.3, 0.0, 0.0));
    world.add_spring(0, 1, 0.5);
    world
}

#[test]
fn test_rejects_non_positive_dt() {
    let mut world = create_test_world();
    let params = StepParams::new();

    assert!(matches!(
        world.step(0.0, &params),
        Err(StepError::InvalidTimeStep { .. })
    ));
    assert!(matches!(
        world.step(-0.1, &params),
        Err(StepError::InvalidTimeStep { .. })
    ));
    assert!(matches!(
        world.step(f32::NAN, &params),
        Err(StepError::InvalidTimeStep { .. })
    ));
}

#[test]
fn test_rejects_non_positive_mass() {
    let mut world = create_test_world();

    let zero_mass = StepParams::new().with_particle_mass(0.0);
    assert!(matches!(
        world.step(0.01, &zero_mass),
        Err(StepError::InvalidMass { .. })
    ));

    let negative_mass = StepParams::new().with_particle_mass(-1.0);
    assert!(matches!(
        world.step(0.01, &negative_mass),
        Err(StepError::InvalidMass { .. })
    ));
}

#[test]
fn test_rejects_negative_stiffness_and_damping() {
    let mut world = create_test_world();

    let params = StepParams::new().with_stiffness(-1.0);
    assert!(matches!(
        world.step(0.01, &params),
        Err(StepError::InvalidStiffness { .. })
    ));

    let params = StepParams::new().with_damping(-0.5);
    assert!(matches!(
        world.step(0.01, &params),
        Err(StepError::InvalidDamping { .. })
    ));
}

#[test]
fn test_rejects_restitution_outside_unit_interval() {
    let mut world = create_test_world();

    for restitution in [-0.1, 1.5, f32::NAN] {
        let params = StepParams::new().with_restitution(restitution);
        assert!(matches!(
            world.step(0.01, &params),
            Err(StepError::InvalidRestitution { .. })
        ));
    }
}

#[test]
fn test_rejects_negative_rest_length() {
    let mut world = create_test_world();
    world.add_spring(0, 1, -0.5);

    assert!(matches!(
        world.step(0.01, &StepParams::new()),
        Err(StepError::InvalidRestLength { spring: 1, .. })
    ));
}

#[test]
fn test_rejects_spring_index_out_of_range() {
    let mut world = create_test_world();
    world.add_spring(0, 7, 0.5);

    assert!(matches!(
        world.step(0.01, &StepParams::new()),
        Err(StepError::SpringOutOfRange {
            spring: 1,
            index: 7,
            count: 2
        })
    ));
}

#[test]
fn test_rejects_self_spring() {
    let mut world = create_test_world();
    world.add_spring(1, 1, 0.0);

    assert!(matches!(
        world.step(0.01, &StepParams::new()),
        Err(StepError::DegenerateSpring { spring: 1, index: 1 })
    ));
}

#[test]
fn test_rejects_mismatched_state_buffers() {
    let mut positions = vec![Vec3::ZERO, Vec3::ZERO];
    let mut velocities = vec![Vec3::ZERO];
    let springs: Vec<Spring> = Vec::new();

    let result = stepper::step(
        0.01,
        &mut positions,
        &mut velocities,
        &springs,
        &StepParams::new(),
    );
    assert!(matches!(
        result,
        Err(StepError::StateLengthMismatch {
            positions: 2,
            velocities: 1
        })
    ));
}

#[test]
fn test_state_untouched_on_error() {
    let mut world = create_test_world();
    world.velocities[0] = Vec3::new(0.5, 0.0, 0.0);
    world.add_spring(0, 9, 0.5); // invalid index

    let before_positions = world.positions.clone();
    let before_velocities = world.velocities.clone();

    assert!(world.step(0.01, &StepParams::new()).is_err());
    assert_eq!(world.positions, before_positions);
    assert_eq!(world.velocities, before_velocities);
}

#[test]
fn test_valid_world_steps_cleanly() {
    let mut world = create_test_world();
    assert!(world.step(0.01, &StepParams::new()).is_ok());
}

#[test]
fn test_error_messages_name_the_violation() {
    let err = StepError::SpringOutOfRange {
        spring: 3,
        index: 12,
        count: 4,
    };
    let msg = err.to_string();
    assert!(msg.contains("spring 3"));
    assert!(msg.contains("12"));
    assert!(msg.contains("4"));
}
