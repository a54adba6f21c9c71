//! Fixed-step time integration for the bouncing-ball system
//!
//! Semi-implicit (symplectic) Euler: the velocity kick from gravity is applied
//! before the position drift of the same step, which keeps the energy error
//! bounded instead of growing every step like explicit Euler does.

use super::states::{Movable, PhysicalObject};

/// Kick: v_y <- v_y + g * dt
pub fn apply_gravity<M: Movable + ?Sized>(obj: &mut M, gravity: f64, dt: f64) {
    obj.set_vy(obj.vy() + gravity * dt);
}

/// Drift: x <- x + v * dt, using the already-kicked velocity
pub fn advance<P: PhysicalObject + ?Sized>(obj: &mut P, dt: f64) {
    let x = obj.position() + dt * obj.velocity();
    obj.set_position(x);
}
