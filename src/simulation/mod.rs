pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod collisions;
pub mod engine;
pub mod stepper;
pub mod scenario;
