//! Fixed-step time integration for the N-body system.
//!
//! One force evaluation per step against the unmodified pre-step world.
//! Velocities pick up `a * dt`; positions advance with the *pre-step*
//! velocity. That ordering affects orbit stability and is kept deliberately.

use super::forces::{Force, NewtonianGravity};
use super::states::{NVec3, System};

/// Advance the system by one step of size `dt`, returning the new world.
/// Collision handling is layered on top by the engine.
pub fn euler_step(sys: &System, gravity: &NewtonianGravity, dt: f64) -> System {
    let n = sys.bodies.len();

    // F_i at time t, all from the same pre-step state
    let mut forces = vec![NVec3::zeros(); n];
    gravity.accumulate(sys, &mut forces);

    let bodies = sys
        .bodies
        .iter()
        .zip(forces.iter())
        .map(|(b, f)| {
            let a = if b.mass() == 0.0 {
                NVec3::zeros()
            } else {
                f / b.mass()
            };
            // x_n+1 = x_n + v_n * dt, with the pre-step velocity
            let x = b.position() + b.velocity() * dt;
            // v_n+1 = v_n + a_n * dt
            let v = b.velocity() + a * dt;
            b.with_position(x).with_velocity(v)
        })
        .collect();

    System {
        bodies,
        t: sys.t + dt,
    }
}
