pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{normalize_or_zero, Body, BodyError, Color, NVec3, System, DEFAULT_COLOR};
pub use simulation::params::{Parameters, G};
pub use simulation::forces::{Force, NewtonianGravity};
pub use simulation::integrator::euler_step;
pub use simulation::collisions::{
    check_collision, find_collisions, merge, resolve_collisions, resolve_collisions_with_info,
    CollisionEvent,
};
pub use simulation::engine::Engine;
pub use simulation::stepper::{Stepper, FIXED_STEP};
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_step, bench_substep};
