//! The simulation stepper: contract validation followed by the three
//! phases in their fixed order.
//!
//! Forces are computed from the pre-step state, integration consumes those
//! forces, and collision resolution sees post-integration positions. This
//! module is the only public path that runs the phases, so the ordering is
//! enforced structurally rather than by convention.

use crate::collision;
use crate::engine::Spring;
use crate::forces;
use crate::integrator;
use crate::params::StepParams;
use glam::Vec3;
use thiserror::Error;

/// Caller contract violations, reported before any state is touched
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StepError {
    #[error("time step must be positive, got {dt}")]
    InvalidTimeStep { dt: f32 },
    #[error("particle mass must be positive, got {mass}")]
    InvalidMass { mass: f32 },
    #[error("stiffness must be non-negative, got {stiffness}")]
    InvalidStiffness { stiffness: f32 },
    #[error("damping must be non-negative, got {damping}")]
    InvalidDamping { damping: f32 },
    #[error("restitution must be in [0, 1], got {restitution}")]
    InvalidRestitution { restitution: f32 },
    #[error("spring {spring} has negative rest length {rest_length}")]
    InvalidRestLength { spring: usize, rest_length: f32 },
    #[error("spring {spring} references particle {index}, but only {count} particles exist")]
    SpringOutOfRange {
        spring: usize,
        index: usize,
        count: usize,
    },
    #[error("spring {spring} connects particle {index} to itself")]
    DegenerateSpring { spring: usize, index: usize },
    #[error("position and velocity buffers differ in length ({positions} vs {velocities})")]
    StateLengthMismatch { positions: usize, velocities: usize },
}

/// Advance the state by one fixed time step.
///
/// The position and velocity buffers are borrowed for the duration of the
/// call and mutated in place; nothing is retained across calls. On error
/// the state is untouched.
///
/// After a successful step every position coordinate of a finite input
/// state lies in [-1, 1]. NaN or infinite coordinates in the input are not
/// screened and propagate into the output.
pub fn step(
    dt: f32,
    positions: &mut [Vec3],
    velocities: &mut [Vec3],
    springs: &[Spring],
    params: &StepParams,
) -> Result<(), StepError> {
    validate(dt, positions.len(), velocities.len(), springs, params)?;

    let forces = forces::accumulate(positions, velocities, springs, params);
    integrator::integrate(positions, velocities, &forces, params.particle_mass, dt);
    collision::resolve(positions, velocities, params.restitution);

    Ok(())
}

fn validate(
    dt: f32,
    position_count: usize,
    velocity_count: usize,
    springs: &[Spring],
    params: &StepParams,
) -> Result<(), StepError> {
    if dt.is_nan() || dt <= 0.0 {
        return Err(StepError::InvalidTimeStep { dt });
    }
    if params.particle_mass.is_nan() || params.particle_mass <= 0.0 {
        return Err(StepError::InvalidMass {
            mass: params.particle_mass,
        });
    }
    if params.stiffness.is_nan() || params.stiffness < 0.0 {
        return Err(StepError::InvalidStiffness {
            stiffness: params.stiffness,
        });
    }
    if params.damping.is_nan() || params.damping < 0.0 {
        return Err(StepError::InvalidDamping {
            damping: params.damping,
        });
    }
    if !(0.0..=1.0).contains(&params.restitution) {
        return Err(StepError::InvalidRestitution {
            restitution: params.restitution,
        });
    }
    if position_count != velocity_count {
        return Err(StepError::StateLengthMismatch {
            positions: position_count,
            velocities: velocity_count,
        });
    }

    for (i, spring) in springs.iter().enumerate() {
        for index in [spring.p0, spring.p1] {
            if index >= position_count {
                return Err(StepError::SpringOutOfRange {
                    spring: i,
                    index,
                    count: position_count,
                });
            }
        }
        if spring.p0 == spring.p1 {
            return Err(StepError::DegenerateSpring {
                spring: i,
                index: spring.p0,
            });
        }
        if spring.rest_length.is_nan() || spring.rest_length < 0.0 {
            return Err(StepError::InvalidRestLength {
                spring: i,
                rest_length: spring.rest_length,
            });
        }
    }

    Ok(())
}
