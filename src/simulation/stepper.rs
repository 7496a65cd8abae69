//! Substep scheduling for user-controlled time scales.
//!
//! Multiplying the integration `dt` directly by a large time scale lets
//! bodies tunnel through each other or pick up unbounded energy. The stepper
//! subdivides the requested advance into fixed-size substeps instead, so the
//! total simulated time per call is `time_scale * fixed_step` regardless of
//! the substep count.

use super::collisions::CollisionEvent;
use super::engine::Engine;
use super::states::System;

/// Physics substep size, in simulation-time units.
pub const FIXED_STEP: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct Stepper {
    pub engine: Engine,
    pub fixed_step: f64,
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new(Engine::default())
    }
}

impl Stepper {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            fixed_step: FIXED_STEP,
        }
    }

    /// Advance the world by `time_scale * fixed_step` of simulated time,
    /// subdivided into `max(1, ceil(time_scale))` equal substeps.
    ///
    /// Each substep's collision events are prepended to the accumulated
    /// list, so ordering across substeps is not chronological and is not
    /// part of the contract.
    pub fn update_physics(&self, time_scale: f64, sys: &System) -> (System, Vec<CollisionEvent>) {
        let num_steps = time_scale.ceil().max(1.0) as usize;
        let substep_dt = time_scale * self.fixed_step / num_steps as f64;

        let mut world = sys.clone();
        let mut all_events: Vec<CollisionEvent> = Vec::new();
        for _ in 0..num_steps {
            let (next, mut events) = self.engine.step_with_collisions(substep_dt, &world);
            events.extend(all_events);
            all_events = events;
            world = next;
        }
        (world, all_events)
    }
}
