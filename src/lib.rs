pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, System, Arena, NVec2, Movable, PhysicalObject};
pub use simulation::params::Parameters;
pub use simulation::collision::{CollisionStrategy, ElasticCollision, InelasticCollision};
pub use simulation::engine::PhysicsEngine;
pub use simulation::scenario::{Scenario, RunSettings, RunSummary};

pub use configuration::config::{ScenarioConfig, ArenaConfig, ParametersConfig, CollisionConfig, RunConfig, BodyConfig, ConfigError, load_scenario};

pub use benchmark::benchmark::bench_update;
