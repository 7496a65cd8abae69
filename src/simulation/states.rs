//! Core state types for the simulation.
//!
//! Defines the `Body` record and the `System` world container:
//! - `Body` holds density, radius, position, velocity, the mass derived from
//!   density and radius, and an RGBA color tag used only by external rendering
//! - `System` holds the list of bodies and the current simulation time `t`
//!
//! Mass is never stored independently: every constructor and every
//! density/radius mutation recomputes it from
//! `mass = density * (4/3) * pi * radius^3`. The one exception is the merge
//! path, which sets the conserved sum directly (see `collisions`).

use std::f64::consts::PI;

use nalgebra::Vector3;
use thiserror::Error;

pub type NVec3 = Vector3<f64>;

/// RGBA channels in 0–255. Inert in the physics; blended on merge.
pub type Color = [f64; 4];

/// Color assigned to bodies that do not specify one.
pub const DEFAULT_COLOR: Color = [255.0, 255.0, 255.0, 255.0];

/// Unit vector of `v`, or the zero vector when `v` has zero length.
pub fn normalize_or_zero(v: &NVec3) -> NVec3 {
    let n = v.norm();
    if n == 0.0 {
        NVec3::zeros()
    } else {
        v / n
    }
}

/// Rejected `Body` parameters.
#[derive(Debug, Error)]
pub enum BodyError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

fn derived_mass(density: f64, radius: f64) -> f64 {
    density * (4.0 / 3.0) * PI * radius.powi(3)
}

#[derive(Debug, Clone)]
pub struct Body {
    density: f64, // kg/m^3
    radius: f64,  // m
    x: NVec3,     // position, m
    v: NVec3,     // velocity, m/s
    m: f64,       // kg, derived
    color: Color,
}

impl Body {
    /// Construct a body; mass is computed immediately.
    /// Non-positive density or radius is rejected.
    pub fn new(
        density: f64,
        radius: f64,
        x: NVec3,
        v: NVec3,
        color: Color,
    ) -> Result<Self, BodyError> {
        if density <= 0.0 {
            return Err(BodyError::InvalidParameter(format!(
                "density must be positive, got {density}"
            )));
        }
        if radius <= 0.0 {
            return Err(BodyError::InvalidParameter(format!(
                "radius must be positive, got {radius}"
            )));
        }
        Ok(Self {
            density,
            radius,
            x,
            v,
            m: derived_mass(density, radius),
            color,
        })
    }

    /// Merge-result constructor: the mass is taken as given so the merged
    /// body carries the parents' exact sum rather than a value re-derived
    /// through a cube root.
    pub(crate) fn from_merge(
        density: f64,
        radius: f64,
        x: NVec3,
        v: NVec3,
        m: f64,
        color: Color,
    ) -> Self {
        Self {
            density,
            radius,
            x,
            v,
            m,
            color,
        }
    }

    /// Copy of this body at a new position.
    pub fn with_position(&self, x: NVec3) -> Self {
        Self { x, ..self.clone() }
    }

    /// Copy of this body with a new velocity.
    pub fn with_velocity(&self, v: NVec3) -> Self {
        Self { v, ..self.clone() }
    }

    /// Replace the density; mass is recomputed from the current radius.
    pub fn set_density(&mut self, density: f64) {
        self.density = density;
        self.m = derived_mass(self.density, self.radius);
    }

    /// Replace the radius; mass is recomputed from the current density.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
        self.m = derived_mass(self.density, self.radius);
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn position(&self) -> NVec3 {
        self.x
    }

    pub fn velocity(&self) -> NVec3 {
        self.v
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Occupied volume `m / density`; zero when the density is zero.
    pub fn volume(&self) -> f64 {
        if self.density == 0.0 {
            0.0
        } else {
            self.m / self.density
        }
    }
}

/// The complete set of bodies at one instant.
///
/// Bodies are identified by their index in `bodies`; two structurally equal
/// bodies at different indices are distinct. The stepping path replaces the
/// whole system, so no index survives a step that merges.
#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>,
    pub t: f64, // accumulated simulation time
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
