//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`ArenaConfig`]      – size of the walled rectangle
//! - [`ParametersConfig`] – physical constant and contact tolerances
//! - [`CollisionConfig`]  – which pairwise response model to inject (`elastic` or `inelastic`)
//! - [`RunConfig`]        – frame length, sub-steps and run length for the driver
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Everything except `arena` and `bodies` may be left out:
//!
//! ```yaml
//! arena:
//!   width: 6.0
//!   height: 4.0
//!
//! parameters:
//!   gravity: -9.82          # signed, +y is up
//!   contact_epsilon: 1.0e-3 # overlap needed before a pair counts as colliding
//!   slop: 1.0e-3            # overlap left alone by positional correction
//!   correction: 1.0         # fraction of overlap removed per contact
//!   guard_wall_flip: true
//!   guard_separating: true
//!
//! collision:               # or just `collision: elastic`
//!   inelastic:
//!     restitution: 0.9
//!
//! run:
//!   dt: 0.016               # seconds per frame
//!   substeps: 4             # engine updates per frame
//!   frames: 600
//!   report_every: 60
//!
//! bodies:
//!   - x: [ 2.0, 3.6 ]
//!     v: [ 1.2, 1.6 ]
//!     m: 1.0
//!     radius: 0.2
//! ```
//!
//! Preconditions the engine itself never checks are validated once here by
//! [`ScenarioConfig::validate`].

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::simulation::params::Parameters;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("arena must have positive width and height, got {width} x {height}")]
    InvalidArena { width: f64, height: f64 },

    #[error("body {index}: {reason}")]
    InvalidBody { index: usize, reason: String },

    #[error("invalid run settings: {0}")]
    InvalidRun(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Size of the walled area; walls sit at x = 0, x = width, y = 0, y = height
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ArenaConfig {
    pub width: f64,
    pub height: f64,
}

/// Physical constant and contact tolerances, every field optional
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields, default)]
pub struct ParametersConfig {
    pub gravity: f64,
    pub contact_epsilon: f64,
    pub slop: f64,
    pub correction: f64,
    pub guard_wall_flip: bool,
    pub guard_separating: bool,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        let p = Parameters::default();
        Self {
            gravity: p.gravity,
            contact_epsilon: p.contact_epsilon,
            slop: p.slop,
            correction: p.correction,
            guard_wall_flip: p.guard_wall_flip,
            guard_separating: p.guard_separating,
        }
    }
}

impl ParametersConfig {
    pub fn to_parameters(&self) -> Parameters {
        Parameters {
            gravity: self.gravity,
            contact_epsilon: self.contact_epsilon,
            slop: self.slop,
            correction: self.correction,
            guard_wall_flip: self.guard_wall_flip,
            guard_separating: self.guard_separating,
        }
    }
}

/// Which collision response the engine gets
/// `collision: elastic` or `collision: { inelastic: { restitution: 0.8 } }`
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub enum CollisionConfig {
    #[default]
    #[serde(rename = "elastic")] // momentum and kinetic energy conserving
    Elastic,

    #[serde(rename = "inelastic")] // momentum conserving, normal speed scaled by restitution
    Inelastic { restitution: f64 },
}

/// How the driver calls the engine
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields, default)]
pub struct RunConfig {
    pub dt: f64, // frame length in seconds
    pub substeps: usize, // engine updates per frame, each with dt / substeps
    pub frames: usize, // frames to run
    pub report_every: usize, // frames between energy/momentum reports, 0 = never
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dt: 1.0 / 60.0,
            substeps: 4,
            frames: 600,
            report_every: 60,
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position [x, y]
    pub v: Vec<f64>, // initial velocity [vx, vy]
    pub m: f64, // mass, > 0
    pub radius: f64, // radius, > 0
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    pub arena: ArenaConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub collision: CollisionConfig,
    #[serde(default)]
    pub run: RunConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text (no validation)
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Check everything the engine treats as a precondition
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = (self.arena.width, self.arena.height);
        if !(w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite()) {
            return Err(ConfigError::InvalidArena { width: w, height: h });
        }

        let p = &self.parameters;
        if !p.gravity.is_finite() {
            return Err(ConfigError::InvalidParameter(format!("gravity must be finite, got {}", p.gravity)));
        }
        if !(p.contact_epsilon >= 0.0) {
            return Err(ConfigError::InvalidParameter(format!("contact_epsilon must be >= 0, got {}", p.contact_epsilon)));
        }
        if !(p.slop >= 0.0) {
            return Err(ConfigError::InvalidParameter(format!("slop must be >= 0, got {}", p.slop)));
        }
        if !(p.correction > 0.0 && p.correction <= 1.0) {
            return Err(ConfigError::InvalidParameter(format!("correction must be in (0, 1], got {}", p.correction)));
        }
        if let CollisionConfig::Inelastic { restitution: e } = self.collision {
            if !(0.0..=1.0).contains(&e) {
                return Err(ConfigError::InvalidParameter(format!("restitution must be in [0, 1], got {e}")));
            }
        }

        let r = &self.run;
        if !(r.dt > 0.0 && r.dt.is_finite()) {
            return Err(ConfigError::InvalidRun(format!("dt must be positive, got {}", r.dt)));
        }
        if r.substeps == 0 {
            return Err(ConfigError::InvalidRun("substeps must be at least 1".to_string()));
        }

        for (index, b) in self.bodies.iter().enumerate() {
            let invalid = |reason: String| ConfigError::InvalidBody { index, reason };
            if b.x.len() != 2 || b.v.len() != 2 {
                return Err(invalid(format!("x and v need 2 components, got {} and {}", b.x.len(), b.v.len())));
            }
            if !(b.m > 0.0) {
                return Err(invalid(format!("mass must be positive, got {}", b.m)));
            }
            if !(b.radius > 0.0) {
                return Err(invalid(format!("radius must be positive, got {}", b.radius)));
            }
            let inside_x = b.x[0] >= b.radius && b.x[0] <= w - b.radius;
            let inside_y = b.x[1] >= b.radius && b.x[1] <= h - b.radius;
            if !(inside_x && inside_y) {
                return Err(invalid(format!("starts outside the arena at ({}, {})", b.x[0], b.x[1])));
            }
        }

        Ok(())
    }
}

/// Read and parse a scenario file
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig, ConfigError> {
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    Ok(serde_yaml::from_reader(reader)?)
}
