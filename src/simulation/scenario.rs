//! Build fully-initialized simulation scenarios from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - a `Stepper` wired with the configured gravitational constant and
//!   substep size

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::params::{Parameters, G};
use crate::simulation::states::{Body, BodyError, NVec3, System, DEFAULT_COLOR};
use crate::simulation::stepper::{Stepper, FIXED_STEP};

pub struct Scenario {
    pub parameters: Parameters,
    pub system: System,
    pub stepper: Stepper,
}

impl Scenario {
    /// Body parameters are validated here; a non-positive density or radius
    /// anywhere in the config fails the whole build.
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, BodyError> {
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| {
                Body::new(
                    bc.density,
                    bc.radius,
                    NVec3::new(bc.x[0], bc.x[1], bc.x[2]),
                    NVec3::new(bc.v[0], bc.v[1], bc.v[2]),
                    bc.color.unwrap_or(DEFAULT_COLOR),
                )
            })
            .collect::<Result<Vec<Body>, BodyError>>()?;

        // Initial system state: bodies at t = 0
        let system = System { bodies, t: 0.0 };

        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            g: p_cfg.g.unwrap_or(G),
            fixed_step: p_cfg.fixed_step.unwrap_or(FIXED_STEP),
            time_scale: p_cfg.time_scale.unwrap_or(1.0),
        };

        let mut stepper = Stepper::new(Engine::new(parameters.g));
        stepper.fixed_step = parameters.fixed_step;

        Ok(Self {
            parameters,
            system,
            stepper,
        })
    }
}
