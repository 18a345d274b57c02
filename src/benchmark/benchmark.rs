use std::time::Instant;

use crate::simulation::engine::run_to_end;
use crate::simulation::forces::Repulsion;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Ball, Bounds, NVec2, System};

fn arena() -> Bounds {
    Bounds {
        left: 0.0,
        top: 0.0,
        right: 800.0,
        bottom: 600.0,
    }
}

fn bench_params() -> Parameters {
    Parameters {
        t_end: 1.0,
        h0: 0.016,
        gravity: 980.0,
        repulsion: 10_000.0,
        seed: 42,
    }
}

/// Crowded deterministic layout; dense enough that the scan finds overlaps.
fn dense_system(n: usize, bounds: &Bounds) -> System {
    let mut balls = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            bounds.left + (0.5 + 0.45 * (i_f * 0.37).sin()) * bounds.width(),
            bounds.top + (0.5 + 0.45 * (i_f * 0.13).cos()) * bounds.height(),
        );

        balls.push(Ball {
            x,
            v: NVec2::zeros(),
            radius: 12.0,
        });
    }

    System { balls, t: 0.0 }
}

/// Time one full all-pairs repulsion pass at different system sizes.
pub fn bench_repulsion() {
    let ns = [100, 200, 400, 800, 1600, 3200];
    let bounds = arena();
    let params = bench_params();

    for n in ns {
        let mut sys = dense_system(n, &bounds);
        let repulsion = Repulsion {
            strength: params.repulsion,
        };

        // Warm up
        for i in 0..sys.balls.len() {
            repulsion.apply(i, &mut sys.balls);
        }

        let t0 = Instant::now();
        for i in 0..sys.balls.len() {
            repulsion.apply(i, &mut sys.balls);
        }
        let dt_scan = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, repulsion pass = {dt_scan:8.6} s");
    }
}

/// Time full headless runs to `t_end` at different system sizes.
pub fn bench_step() {
    let ns = [100, 200, 400, 800];
    let bounds = arena();
    let params = bench_params();

    for n in ns {
        let mut sys = dense_system(n, &bounds);

        let t0 = Instant::now();
        if let Err(e) = run_to_end(&mut sys, &bounds, &params) {
            println!("bench_step: aborted at t = {}: {e}", sys.t);
            return;
        }
        let elapsed = t0.elapsed().as_secs_f64();
        let steps = (params.t_end / params.h0).ceil() as usize;

        println!("N = {n:5}, {steps} steps in {elapsed:8.6} s");
    }
}
