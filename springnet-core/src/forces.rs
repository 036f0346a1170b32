//! Force accumulation over the spring topology.

use crate::engine::Spring;
use crate::params::StepParams;
use glam::Vec3;

/// Compute the net force on every particle at the start of a step.
///
/// Every accumulator starts at the uniform body force `gravity * mass`.
/// Each spring then adds a Hooke term proportional to its extension and a
/// damping term proportional to the along-spring component of the relative
/// endpoint velocity. Contributions are applied equal-and-opposite, so
/// internal forces never change total momentum.
///
/// A spring whose endpoints coincide has no defined direction and
/// contributes nothing for this step.
///
/// The spring loop is intentionally sequential: it is the one place where
/// two tasks could race on the same accumulator, and a fixed summation
/// order keeps trajectories reproducible.
pub fn accumulate(
    positions: &[Vec3],
    velocities: &[Vec3],
    springs: &[Spring],
    params: &StepParams,
) -> Vec<Vec3> {
    let mut forces = vec![params.gravity * params.particle_mass; positions.len()];

    for spring in springs {
        let d = positions[spring.p1] - positions[spring.p0];
        let len = d.length();
        if len == 0.0 {
            continue;
        }
        let dir = d / len;

        // Positive when stretched: pulls the pair together.
        let hooke = params.stiffness * (len - spring.rest_length);
        // Damps only the along-spring component of relative motion.
        let relative_vel = velocities[spring.p1] - velocities[spring.p0];
        let damp = params.damping * relative_vel.dot(dir);

        let f = dir * (hooke + damp);
        forces[spring.p0] += f;
        forces[spring.p1] -= f;
    }

    forces
}
