//! Test helper utilities shared by the integration tests

use crate::engine::World;
use crate::params::StepParams;
use crate::stepper::StepError;
use glam::Vec3;

/// Check if two floating point values are approximately equal within tolerance
pub fn approx_eq_f32(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

/// Check if two vectors are approximately equal component-wise within tolerance
pub fn approx_eq_vec3(a: Vec3, b: Vec3, tol: f32) -> bool {
    approx_eq_f32(a.x, b.x, tol) && approx_eq_f32(a.y, b.y, tol) && approx_eq_f32(a.z, b.z, tol)
}

/// Step a world repeatedly with the same dt and parameters
pub fn run_steps(
    world: &mut World,
    dt: f32,
    steps: usize,
    params: &StepParams,
) -> Result<(), StepError> {
    for _ in 0..steps {
        world.step(dt, params)?;
    }
    Ok(())
}

/// Flatten the position buffer into raw bit patterns for exact
/// trajectory comparison
pub fn position_bits(world: &World) -> Vec<u32> {
    world
        .positions
        .iter()
        .flat_map(|p| [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()])
        .collect()
}

/// Largest absolute position coordinate in the world
pub fn max_coordinate(world: &World) -> f32 {
    world
        .positions
        .iter()
        .flat_map(|p| [p.x.abs(), p.y.abs(), p.z.abs()])
        .fold(0.0, f32::max)
}

/// Sum of all particle velocities (momentum is this times the shared mass)
pub fn total_velocity(world: &World) -> Vec3 {
    world.velocities.iter().copied().sum()
}
