//! Core state types for the bouncing-ball simulation.
//!
//! Defines the capability traits the engine works against and the concrete
//! state it ships with:
//! - `Movable` / `PhysicalObject` - minimal accessor set the engine needs
//! - `Body`  - a rigid disk using `NVec2` positions/velocities
//! - `Arena` - the walled rectangle bodies live in
//! - `System` - the driver-owned body collection and the current time `t`

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

/// Anything with a velocity that can be read and written per component
pub trait Movable {
    fn vx(&self) -> f64;
    fn vy(&self) -> f64;
    fn set_vx(&mut self, vx: f64);
    fn set_vy(&mut self, vy: f64);

    fn velocity(&self) -> NVec2 {
        NVec2::new(self.vx(), self.vy())
    }

    fn set_velocity(&mut self, v: NVec2) {
        self.set_vx(v.x);
        self.set_vy(v.y);
    }
}

/// Capability set the physics engine requires from a simulated object.
///
/// The engine never sees a concrete body type, so a driver can wrap `Body`
/// with rendering data (colour, trail, sprite handle) and pass that in
/// directly as long as it forwards these accessors.
pub trait PhysicalObject: Movable {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn set_x(&mut self, x: f64);
    fn set_y(&mut self, y: f64);
    fn mass(&self) -> f64;
    fn radius(&self) -> f64;

    fn position(&self) -> NVec2 {
        NVec2::new(self.x(), self.y())
    }

    fn set_position(&mut self, p: NVec2) {
        self.set_x(p.x);
        self.set_y(p.y);
    }

    /// Linear momentum `m * v`
    fn momentum(&self) -> NVec2 {
        self.mass() * self.velocity()
    }

    /// Kinetic energy `1/2 m |v|^2`
    fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass() * self.velocity().norm_squared()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f64, // mass, > 0
    pub radius: f64, // radius, > 0
}

impl Body {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, radius: f64, m: f64) -> Self {
        debug_assert!(radius > 0.0, "body radius must be positive, got {radius}");
        debug_assert!(m > 0.0, "body mass must be positive, got {m}");
        Self {
            x: NVec2::new(x, y),
            v: NVec2::new(vx, vy),
            m,
            radius,
        }
    }
}

impl Movable for Body {
    fn vx(&self) -> f64 { self.v.x }
    fn vy(&self) -> f64 { self.v.y }
    fn set_vx(&mut self, vx: f64) { self.v.x = vx; }
    fn set_vy(&mut self, vy: f64) { self.v.y = vy; }

    fn velocity(&self) -> NVec2 {
        self.v
    }
}

impl PhysicalObject for Body {
    fn x(&self) -> f64 { self.x.x }
    fn y(&self) -> f64 { self.x.y }
    fn set_x(&mut self, x: f64) { self.x.x = x; }
    fn set_y(&mut self, y: f64) { self.x.y = y; }
    fn mass(&self) -> f64 { self.m }
    fn radius(&self) -> f64 { self.radius }

    fn position(&self) -> NVec2 {
        self.x
    }
}

/// Axis-aligned walled rectangle with walls at x = 0, x = width, y = 0, y = height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "arena must have positive size");
        Self { width, height }
    }

    /// True if the disk lies fully inside the walls
    pub fn contains<P: PhysicalObject + ?Sized>(&self, obj: &P) -> bool {
        let r = obj.radius();
        obj.x() >= r && obj.x() <= self.width - r && obj.y() >= r && obj.y() <= self.height - r
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // fixed population, owned by the driver
    pub t: f64, // simulated time
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_read_and_write_vectors() {
        let mut b = Body::new(1.0, 2.0, 3.0, 4.0, 0.5, 2.0);
        assert_eq!(b.position(), NVec2::new(1.0, 2.0));
        b.set_vy(-1.0);
        b.set_x(7.0);
        assert_eq!(b.v, NVec2::new(3.0, -1.0));
        assert_eq!(b.x, NVec2::new(7.0, 2.0));
        assert_eq!(b.momentum(), NVec2::new(6.0, -2.0));
        assert_eq!(b.kinetic_energy(), 0.5 * 2.0 * 10.0);
    }

    #[test]
    fn arena_contains_checks_radius() {
        let arena = Arena::new(10.0, 10.0);
        assert!(arena.contains(&Body::new(0.5, 9.5, 0.0, 0.0, 0.5, 1.0)));
        assert!(!arena.contains(&Body::new(0.4, 5.0, 0.0, 0.0, 0.5, 1.0)));
        assert!(!arena.contains(&Body::new(5.0, 9.6, 0.0, 0.0, 0.5, 1.0)));
    }
}
