//! Force contributors for the N-body engine.
//!
//! `NewtonianGravity` is the single force law: direct N^2 pairwise gravity
//! with no softening. Coincident centers produce the zero vector instead of
//! a division by zero; that guard is part of the numeric contract.

use crate::simulation::params::G;
use crate::simulation::states::{Body, NVec3, System};

/// Trait for force sources operating on a [`System`].
/// Implementations write the net force on body `i` into `out[i]`.
pub trait Force {
    fn accumulate(&self, sys: &System, out: &mut [NVec3]);
}

/// Direct pairwise Newtonian gravity.
#[derive(Debug, Clone)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self { g: G }
    }
}

impl NewtonianGravity {
    /// Force on `on` exerted by `from`: magnitude `G * m1 * m2 / r^2`,
    /// directed from `on` toward `from`. Returns the zero vector when the
    /// centers coincide.
    pub fn force_between(&self, on: &Body, from: &Body) -> NVec3 {
        // r points from `on` to `from`; the pull acts along +r
        let r = from.position() - on.position();
        let r2 = r.norm_squared();
        if r2 == 0.0 {
            return NVec3::zeros();
        }
        let magnitude = self.g * on.mass() * from.mass() / r2;
        magnitude * (r / r2.sqrt())
    }

    /// Net force on body `i` from every other body, summed in index order.
    ///
    /// Self-interaction is excluded by index, not by value: a body that is
    /// structurally equal to `bodies[i]` but sits at another index still
    /// contributes.
    pub fn net_force(&self, i: usize, sys: &System) -> NVec3 {
        let bi = &sys.bodies[i];
        let mut f = NVec3::zeros();
        for (j, bj) in sys.bodies.iter().enumerate() {
            if j != i {
                f += self.force_between(bi, bj);
            }
        }
        f
    }
}

impl Force for NewtonianGravity {
    fn accumulate(&self, sys: &System, out: &mut [NVec3]) {
        for i in 0..sys.bodies.len() {
            out[i] = self.net_force(i, sys);
        }
    }
}
