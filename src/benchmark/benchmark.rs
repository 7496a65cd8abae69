use std::time::Instant;

use crate::simulation::engine::Engine;
use crate::simulation::states::{Body, NVec3, System, DEFAULT_COLOR};
use crate::simulation::stepper::Stepper;

/// Build a System of size `n` with deterministic positions, no rand needed
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0e3,
            (i_f * 0.13).cos() * 5.0e3,
            (i_f * 0.07).sin() * 5.0e3,
        );

        let body = Body::new(3.0e3, 1.0, x, NVec3::zeros(), DEFAULT_COLOR)
            .expect("benchmark bodies use positive parameters");
        bodies.push(body);
    }

    System { bodies, t: 0.0 }
}

/// Time a full engine step (force pass + integration + collision scan) for a
/// range of body counts. Paste output directly into a spreadsheet to graph.
pub fn bench_step() {
    let ns = [8, 16, 32, 64, 128, 256];
    let steps = 100;
    let engine = Engine::default();

    println!("N,step_ms");

    for n in ns {
        let sys = make_system(n);

        // Warm up
        let _ = engine.step(0.1, &sys);

        let t0 = Instant::now();
        let mut world = sys.clone();
        for _ in 0..steps {
            world = engine.step(0.1, &world);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms:.6}");
    }
}

/// Time one stepper update across time scales; the substep count grows with
/// the scale, so cost should grow roughly linearly past 1.0.
pub fn bench_substep() {
    let frames = 20;
    let stepper = Stepper::default();
    let sys = make_system(64);

    println!("time_scale,update_ms");

    for ts in [0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 20.0] {
        // Warm up
        let _ = stepper.update_physics(ts, &sys);

        let t0 = Instant::now();
        let mut world = sys.clone();
        for _ in 0..frames {
            world = stepper.update_physics(ts, &world).0;
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / frames as f64;

        println!("{ts},{ms:.6}");
    }
}
