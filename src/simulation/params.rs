//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the tunables the engine and its resolvers read:
//! - signed gravitational acceleration (`+y` is up, so it is negative),
//! - contact epsilon and slop for collision detection / correction,
//! - the positional correction percentage,
//! - guards against re-flipping wall contacts and re-resolving separating pairs

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub gravity: f64, // vertical acceleration, negative pulls towards y = 0
    pub contact_epsilon: f64, // overlap must exceed this to count as a collision
    pub slop: f64, // overlap at or below this is left uncorrected
    pub correction: f64, // fraction of the overlap removed per resolve, in (0, 1]
    pub guard_wall_flip: bool, // only reflect a wall contact when moving into the wall
    pub guard_separating: bool, // skip the impulse exchange for pairs already moving apart
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            gravity: -9.82,
            contact_epsilon: 1.0e-3,
            slop: 1.0e-3,
            correction: 1.0,
            guard_wall_flip: true,
            guard_separating: true,
        }
    }
}
