pub mod states;
pub mod params;
pub mod integrator;
pub mod boundary;
pub mod collision;
pub mod engine;
pub mod diagnostics;
pub mod scenario;
