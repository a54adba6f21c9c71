use std::time::Instant;

use crate::simulation::engine::PhysicsEngine;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Arena, Body};

/// Helper to build `n` bodies on a grid filling a square arena, with
/// deterministic velocities (no rand needed)
fn make_bodies(n: usize, side: f64) -> Vec<Body> {
    let per_row = (n as f64).sqrt().ceil() as usize;
    let spacing = side / per_row as f64;
    let radius = 0.3 * spacing;

    (0..n).map(|i| {
        let i_f = i as f64;
        let (row, col) = (i / per_row, i % per_row);
        Body::new(
            (col as f64 + 0.5) * spacing,
            (row as f64 + 0.5) * spacing,
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            radius,
            1.0 + (i % 3) as f64,
        )
    }).collect()
}

/// Time `PhysicsEngine::update` for a range of body counts
/// Paste output directly into a spreadsheet to graph the O(n^2) pair scan
pub fn bench_update() {
    let ns = [10, 20, 40, 80, 160, 320];
    let steps = 100;
    let dt = 1.0 / 240.0;
    let side = 100.0;

    println!("N,ms_per_update");

    for n in ns {
        let engine = PhysicsEngine::with_parameters(Arena::new(side, side), Parameters::default());
        let mut bodies = make_bodies(n, side);

        // Warm-up
        engine.update(&mut bodies, dt);

        let t0 = Instant::now();
        for _ in 0..steps {
            engine.update(&mut bodies, dt);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
