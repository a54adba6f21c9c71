//! Conserved-quantity bookkeeping over a body set
//!
//! Used by the driver's periodic report and by the conservation tests.
//! Potential energy is measured from y = 0 with "+y is up".

use super::states::{NVec2, PhysicalObject};

/// Sum of m * v over all bodies
pub fn total_momentum<B: PhysicalObject>(bodies: &[B]) -> NVec2 {
    bodies.iter().fold(NVec2::zeros(), |p, b| p + b.momentum())
}

/// Sum of 1/2 m |v|^2
pub fn kinetic_energy<B: PhysicalObject>(bodies: &[B]) -> f64 {
    bodies.iter().map(|b| b.kinetic_energy()).sum()
}

/// Sum of -m g y; `gravity` is the signed acceleration the engine uses
pub fn potential_energy<B: PhysicalObject>(bodies: &[B], gravity: f64) -> f64 {
    bodies.iter().map(|b| -b.mass() * gravity * b.y()).sum()
}

pub fn mechanical_energy<B: PhysicalObject>(bodies: &[B], gravity: f64) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies, gravity)
}
