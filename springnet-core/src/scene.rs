//! Topology builders for common spring networks.
//!
//! These are caller-side conveniences: the stepper itself only ever sees
//! the position/velocity buffers and the spring list they produce.

use crate::engine::World;
use glam::Vec3;

/// Build a rope: `segments + 1` particles evenly spaced between `start`
/// and `end`, with a spring per segment at its initial length.
pub fn chain(start: Vec3, end: Vec3, segments: usize) -> World {
    let segments = segments.max(1);
    let mut world = World::new();

    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        world.add_particle(start.lerp(end, t));
    }

    for i in 0..segments {
        world.add_spring_at_rest(i, i + 1);
    }

    world
}

/// Build a cloth sheet in the plane `y = origin.y`, extending in +x
/// (columns) and +z (rows). Particle (col, row) has index
/// `row * cols + col`.
///
/// Springs: structural between horizontal and vertical neighbors
/// (rest = spacing) and shear across each cell diagonal
/// (rest = spacing * sqrt(2)).
pub fn lattice(origin: Vec3, cols: usize, rows: usize, spacing: f32) -> World {
    let cols = cols.max(2);
    let rows = rows.max(2);
    let mut world = World::new();

    for row in 0..rows {
        for col in 0..cols {
            world.add_particle(Vec3::new(
                origin.x + col as f32 * spacing,
                origin.y,
                origin.z + row as f32 * spacing,
            ));
        }
    }

    let diag = spacing * std::f32::consts::SQRT_2;

    // Structural: horizontal neighbors
    for row in 0..rows {
        for col in 0..(cols - 1) {
            let a = row * cols + col;
            world.add_spring(a, a + 1, spacing);
        }
    }

    // Structural: vertical neighbors
    for row in 0..(rows - 1) {
        for col in 0..cols {
            let a = row * cols + col;
            world.add_spring(a, a + cols, spacing);
        }
    }

    // Shear: both diagonals of every cell
    for row in 0..(rows - 1) {
        for col in 0..(cols - 1) {
            let tl = row * cols + col;
            let tr = tl + 1;
            let bl = tl + cols;
            let br = bl + 1;
            world.add_spring(tl, br, diag);
            world.add_spring(tr, bl, diag);
        }
    }

    world
}
