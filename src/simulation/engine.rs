//! Physics engine orchestrating one simulation step
//!
//! Holds the arena, the numerical parameters and the injected collision
//! strategy. Bodies are never stored here: the driver owns them and lends the
//! whole collection to [`PhysicsEngine::update`] once per (sub-)step.

use super::boundary::BoundaryResolver;
use super::collision::{CollisionStrategy, ElasticCollision};
use super::integrator::{advance, apply_gravity};
use super::params::Parameters;
use super::states::{Arena, PhysicalObject};

pub struct PhysicsEngine {
    arena: Arena,
    parameters: Parameters,
    boundary: BoundaryResolver,
    strategy: Box<dyn CollisionStrategy + Send + Sync>,
}

impl PhysicsEngine {
    /// Engine for a `width` x `height` arena with default parameters and
    /// elastic collisions
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_parameters(Arena::new(width, height), Parameters::default())
    }

    pub fn with_parameters(arena: Arena, parameters: Parameters) -> Self {
        Self {
            arena,
            parameters,
            boundary: BoundaryResolver::new(parameters.guard_wall_flip),
            strategy: Box::new(ElasticCollision::from_params(&parameters)),
        }
    }

    /// Swap the pairwise response model
    pub fn set_collision_strategy<S>(&mut self, strategy: S)
    where
        S: CollisionStrategy + Send + Sync + 'static,
    {
        self.strategy = Box::new(strategy);
    }

    /// Builder form of [`PhysicsEngine::set_collision_strategy`]
    pub fn with_strategy<S>(mut self, strategy: S) -> Self
    where
        S: CollisionStrategy + Send + Sync + 'static,
    {
        self.set_collision_strategy(strategy);
        self
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Advance every body by `dt`:
    /// gravity for all, then drift + wall contact per body, then one pass over
    /// every unordered pair (i < j) in index order.
    ///
    /// Pairs are resolved sequentially, so a body touching two others sees the
    /// first pair's correction before the second pair is tested.
    pub fn update<B: PhysicalObject>(&self, bodies: &mut [B], dt: f64) {
        let n = bodies.len();
        if n == 0 { // nothing to simulate
            return;
        }

        let g = self.parameters.gravity;
        for b in bodies.iter_mut() {
            apply_gravity(b, g, dt);
        }

        for b in bodies.iter_mut() {
            advance(b, dt);
            self.boundary.resolve(b, &self.arena);
        }

        for i in 0..n {
            for j in (i + 1)..n {
                // split so both halves of the pair can be borrowed mutably
                let (head, tail) = bodies.split_at_mut(j);
                self.strategy.resolve(&mut head[i], &mut tail[0]);
            }
        }
    }
}
