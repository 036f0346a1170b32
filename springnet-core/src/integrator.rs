//! Semi-implicit Euler integration.

use glam::Vec3;
use rayon::prelude::*;

/// Advance velocities, then positions, by dt (semi-implicit Euler).
///
/// The position update uses the velocity that was just updated, not the
/// pre-step velocity. This ordering is what keeps stiff spring systems
/// stable at larger time steps and must not be swapped.
///
/// Particles are independent here, so the update runs in parallel; each
/// element is written by exactly one task, so the result does not depend
/// on scheduling.
pub fn integrate(
    positions: &mut [Vec3],
    velocities: &mut [Vec3],
    forces: &[Vec3],
    particle_mass: f32,
    dt: f32,
) {
    let inv_mass = 1.0 / particle_mass;

    positions
        .par_iter_mut()
        .zip(velocities.par_iter_mut())
        .zip(forces.par_iter())
        .for_each(|((pos, vel), force)| {
            *vel += *force * inv_mass * dt;
            *pos += *vel * dt;
        });
}
