//! The physics engine: force law, integration rule, collision semantics.
//!
//! Stateless between calls; every operation is a pure function of its
//! explicit arguments. `step` integrates against the pre-step world and then
//! merges any colliding bodies; the `_with_collisions` variant threads the
//! collision pairs through to the caller.

use super::collisions::{self, CollisionEvent};
use super::forces::NewtonianGravity;
use super::integrator::euler_step;
use super::states::{NVec3, System};

#[derive(Debug, Clone, Default)]
pub struct Engine {
    pub gravity: NewtonianGravity,
}

impl Engine {
    pub fn new(g: f64) -> Self {
        Self {
            gravity: NewtonianGravity { g },
        }
    }

    /// Net gravitational force on body `i`.
    pub fn net_force(&self, i: usize, sys: &System) -> NVec3 {
        self.gravity.net_force(i, sys)
    }

    /// Colliding index pairs in `sys`, without stepping. Useful for showing
    /// a persistent "currently colliding" state between steps.
    pub fn find_collisions(&self, sys: &System) -> Vec<(usize, usize)> {
        collisions::find_collisions(sys)
    }

    /// Advance the world by `dt` and resolve any resulting collisions.
    pub fn step(&self, dt: f64, sys: &System) -> System {
        collisions::resolve_collisions(&euler_step(sys, &self.gravity, dt))
    }

    /// Identical integration to [`Engine::step`], with the collision pairs
    /// returned alongside the new world.
    pub fn step_with_collisions(&self, dt: f64, sys: &System) -> (System, Vec<CollisionEvent>) {
        collisions::resolve_collisions_with_info(&euler_step(sys, &self.gravity, dt))
    }
}
