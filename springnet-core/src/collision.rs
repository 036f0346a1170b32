//! Reflective bounding-box collision response.

use glam::Vec3;
use rayon::prelude::*;

/// Half-extent of the simulation box: every position coordinate is kept in
/// the closed interval [-BOX_HALF_EXTENT, BOX_HALF_EXTENT].
pub const BOX_HALF_EXTENT: f32 = 1.0;

/// Clamp every particle into the box and reflect outgoing velocity
/// components, scaled by the restitution coefficient.
///
/// Particles are independent, so this phase runs in parallel.
pub fn resolve(positions: &mut [Vec3], velocities: &mut [Vec3], restitution: f32) {
    positions
        .par_iter_mut()
        .zip(velocities.par_iter_mut())
        .for_each(|(pos, vel)| resolve_particle(pos, vel, restitution));
}

/// Axes are handled independently: a corner hit clamps and reflects each
/// violated axis on its own rather than reflecting about a corner normal.
/// A velocity component already pointing back into the box is left alone.
fn resolve_particle(pos: &mut Vec3, vel: &mut Vec3, restitution: f32) {
    for axis in 0..3 {
        if pos[axis] < -BOX_HALF_EXTENT {
            pos[axis] = -BOX_HALF_EXTENT;
            if vel[axis] < 0.0 {
                vel[axis] = -vel[axis] * restitution;
            }
        } else if pos[axis] > BOX_HALF_EXTENT {
            pos[axis] = BOX_HALF_EXTENT;
            if vel[axis] > 0.0 {
                vel[axis] = -vel[axis] * restitution;
            }
        }
    }
}
