pub mod collision;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod params;
pub mod scene;
pub mod stepper;

pub use collision::BOX_HALF_EXTENT;
pub use glam::Vec3;
pub use engine::{Spring, World};
pub use params::StepParams;
pub use scene::{chain, lattice};
pub use stepper::{step, StepError};

// Test helpers module (public for integration tests)
// Always compiled - integration tests are separate crates and need access
pub mod tests;
