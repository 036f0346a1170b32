use crate::params::StepParams;
use crate::stepper::{self, StepError};
use glam::Vec3;

/// A damped spring connecting two particles by index
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub p0: usize,
    pub p1: usize,
    pub rest_length: f32,
}

impl Spring {
    pub fn new(p0: usize, p1: usize, rest_length: f32) -> Self {
        Self { p0, p1, rest_length }
    }
}

/// The simulation state: parallel position/velocity buffers plus the spring topology
///
/// Particle identity is positional: index `i` in `positions` and
/// `velocities` refers to the same particle, and springs reference
/// particles by that index.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,
    pub springs: Vec<Spring>,
}

impl World {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            velocities: Vec::new(),
            springs: Vec::new(),
        }
    }

    /// Add a particle at rest and return its index
    pub fn add_particle(&mut self, pos: Vec3) -> usize {
        self.add_particle_with_velocity(pos, Vec3::ZERO)
    }

    /// Add a moving particle and return its index
    pub fn add_particle_with_velocity(&mut self, pos: Vec3, vel: Vec3) -> usize {
        let idx = self.positions.len();
        self.positions.push(pos);
        self.velocities.push(vel);
        idx
    }

    pub fn add_spring(&mut self, p0: usize, p1: usize, rest_length: f32) {
        self.springs.push(Spring::new(p0, p1, rest_length));
    }

    /// Add a spring whose rest length is the current distance between its endpoints
    pub fn add_spring_at_rest(&mut self, p0: usize, p1: usize) {
        let rest_length = self.positions[p0].distance(self.positions[p1]);
        self.springs.push(Spring::new(p0, p1, rest_length));
    }

    pub fn particle_count(&self) -> usize {
        self.positions.len()
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    /// Advance the world by one fixed time step
    pub fn step(&mut self, dt: f32, params: &StepParams) -> Result<(), StepError> {
        stepper::step(
            dt,
            &mut self.positions,
            &mut self.velocities,
            &self.springs,
            params,
        )
    }
}
