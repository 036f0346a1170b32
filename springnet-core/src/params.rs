//! Physical parameters for the simulation step.

use glam::Vec3;

/// Step-scoped physical parameters.
///
/// These are supplied alongside `dt` on every call and are not owned by any
/// particle or spring. Validity (non-negative stiffness and damping, positive
/// mass, restitution in [0, 1]) is checked at the start of each step.
///
/// # Builder Pattern
/// ```
/// use springnet_core::params::StepParams;
/// use glam::Vec3;
///
/// let params = StepParams::new()
///     .with_stiffness(40.0)
///     .with_damping(0.5)
///     .with_gravity(Vec3::new(0.0, -9.81, 0.0))
///     .with_restitution(0.8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParams {
    /// Hooke spring constant. Default: 10.0.
    pub stiffness: f32,
    /// Along-spring velocity damping coefficient. Default: 0.1.
    pub damping: f32,
    /// Mass shared by every particle. Default: 1.0.
    pub particle_mass: f32,
    /// Uniform body acceleration. Default: zero (no gravity).
    pub gravity: Vec3,
    /// Fraction of rebound speed kept on a wall bounce, in [0, 1].
    /// 1.0 = elastic. Default: 0.9.
    pub restitution: f32,
}

impl StepParams {
    /// Create parameters with default values.
    pub fn new() -> Self {
        StepParams {
            stiffness: 10.0,
            damping: 0.1,
            particle_mass: 1.0,
            gravity: Vec3::ZERO,
            restitution: 0.9,
        }
    }

    /// Set the spring constant.
    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Set the damping coefficient.
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    /// Set the shared particle mass.
    pub fn with_particle_mass(mut self, particle_mass: f32) -> Self {
        self.particle_mass = particle_mass;
        self
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the restitution coefficient.
    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution;
        self
    }
}

impl Default for StepParams {
    fn default() -> Self {
        Self::new()
    }
}
