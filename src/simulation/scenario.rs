//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle a
//! driver steps frame by frame:
//! - the `PhysicsEngine` with its arena, parameters and collision strategy
//! - system state (`System` with bodies at t = 0)
//! - run settings (frame length, sub-steps, run length, report cadence)

use log::{debug, info, warn};

use crate::configuration::config::{BodyConfig, CollisionConfig, ConfigError, ScenarioConfig};
use crate::simulation::collision::{detect, ElasticCollision, InelasticCollision};
use crate::simulation::diagnostics::{kinetic_energy, mechanical_energy, total_momentum};
use crate::simulation::engine::PhysicsEngine;
use crate::simulation::states::{Arena, Body, NVec2, System};

/// How the driver advances the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSettings {
    pub dt: f64, // frame length
    pub substeps: usize, // engine updates per frame
    pub frames: usize, // frames in a full run
    pub report_every: usize, // 0 disables periodic reports
}

/// Conserved quantities at the start and end of a run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub frames: usize,
    pub t: f64,
    pub initial_energy: f64,
    pub final_energy: f64,
    pub initial_momentum: NVec2,
    pub final_momentum: NVec2,
}

/// Runtime bundle built from a [`ScenarioConfig`]: the engine, the bodies it
/// moves and the settings that say how often to call it
pub struct Scenario {
    pub engine: PhysicsEngine,
    pub system: System,
    pub run: RunSettings,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        // Bodies: map `BodyConfig` -> runtime `Body`
        let bodies: Vec<Body> = cfg.bodies.iter().map(|bc: &BodyConfig| {
            Body::new(bc.x[0], bc.x[1], bc.v[0], bc.v[1], bc.radius, bc.m)
        }).collect();

        let parameters = cfg.parameters.to_parameters();
        let arena = Arena::new(cfg.arena.width, cfg.arena.height);

        // Engine plus the configured response model
        let mut engine = PhysicsEngine::with_parameters(arena, parameters);
        match cfg.collision {
            CollisionConfig::Elastic => {
                engine.set_collision_strategy(ElasticCollision::from_params(&parameters));
            }
            CollisionConfig::Inelastic { restitution } => {
                engine.set_collision_strategy(InelasticCollision::from_params(restitution, &parameters));
            }
        }

        let run = RunSettings {
            dt: cfg.run.dt,
            substeps: cfg.run.substeps,
            frames: cfg.run.frames,
            report_every: cfg.run.report_every,
        };

        let scenario = Self {
            engine,
            system: System { bodies, t: 0.0 },
            run,
        };

        for (i, j) in scenario.overlapping_pairs() {
            warn!("bodies {i} and {j} overlap at t = 0 and will be pushed apart on the first step");
        }
        info!(
            "scenario: {} bodies in a {} x {} arena, {:?} collisions, dt = {}, {} substeps",
            scenario.system.bodies.len(), arena.width, arena.height, cfg.collision, run.dt, run.substeps
        );

        Ok(scenario)
    }

    /// Index pairs whose disks currently overlap by more than the contact epsilon
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        let eps = self.engine.parameters().contact_epsilon;
        let bodies = &self.system.bodies;
        let mut pairs = Vec::new();
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                if detect(&bodies[i], &bodies[j], eps).is_some() {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }

    /// One rendered frame: `substeps` engine updates of `dt / substeps` each
    pub fn advance_frame(&mut self) {
        let h = self.run.dt / self.run.substeps as f64;
        for _ in 0..self.run.substeps {
            self.engine.update(&mut self.system.bodies, h);
        }
        self.system.t += self.run.dt;
    }

    pub fn mechanical_energy(&self) -> f64 {
        mechanical_energy(&self.system.bodies, self.engine.parameters().gravity)
    }

    /// Run `run.frames` frames, reporting every `run.report_every` frames
    pub fn run(&mut self) -> RunSummary {
        let initial_energy = self.mechanical_energy();
        let initial_momentum = total_momentum(&self.system.bodies);

        for frame in 1..=self.run.frames {
            self.advance_frame();
            debug!("frame {frame}: t = {:.4}", self.system.t);

            if self.run.report_every > 0 && frame % self.run.report_every == 0 {
                let p = total_momentum(&self.system.bodies);
                info!(
                    "t = {:8.3} s  kinetic = {:.6}  mechanical = {:.6}  momentum = ({:.6}, {:.6})",
                    self.system.t,
                    kinetic_energy(&self.system.bodies),
                    self.mechanical_energy(),
                    p.x,
                    p.y
                );
            }
        }

        RunSummary {
            frames: self.run.frames,
            t: self.system.t,
            initial_energy,
            final_energy: self.mechanical_energy(),
            initial_momentum,
            final_momentum: total_momentum(&self.system.bodies),
        }
    }
}
