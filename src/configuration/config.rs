//! Configuration types for loading simulation scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – numerical parameters, all optional with defaults
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario file
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   g: 6.67e-11          # gravitational constant
//!   fixed_step: 0.1      # physics substep size
//!   time_scale: 1.0      # speed multiplier applied per frame
//!   frames: 100          # frames the headless driver runs
//!
//! bodies:
//!   - density: 3.5747e10
//!     radius: 20.0
//!     x: [ -50.0, 0.0, 0.0 ]
//!     v: [ 0.0, 12.4, 0.0 ]
//!     color: [ 255, 200, 120, 255 ]
//!   - density: 2.6810e10
//!     radius: 18.0
//!     x: [ 50.0, 0.0, 0.0 ]
//!     v: [ 0.0, -22.7, 0.0 ]
//! ```
//!
//! The scenario builder maps this into the runtime `System`/`Stepper`
//! representation and validates each body on the way in.

use serde::Deserialize;

/// Global numerical parameters. Missing fields take the engine defaults.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ParametersConfig {
    pub g: Option<f64>,          // gravitational constant
    pub fixed_step: Option<f64>, // substep size
    pub time_scale: Option<f64>, // speed multiplier
    pub frames: Option<u64>,     // driver frame count
}

/// Initial state for a single body.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub density: f64,           // kg/m^3, must be positive
    pub radius: f64,            // m, must be positive
    pub x: [f64; 3],            // position, m
    pub v: [f64; 3],            // velocity, m/s
    pub color: Option<[f64; 4]>, // RGBA 0-255; white when omitted
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}
