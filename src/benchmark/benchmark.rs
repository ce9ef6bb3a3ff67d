use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::simulation::links::LinkSet;
use crate::simulation::motion::drift_step;
use crate::simulation::params::Parameters;
use crate::simulation::report::{distance_block, ReportClock};
use crate::simulation::states::{Cube, NVec2, NVec3, System};

/// Parameters used for all benchmark system sizes
fn bench_params(n: usize) -> Parameters {
    Parameters {
        num_cubes: n,
        bound: 10.0,
        spawn_half: 5.0,
        vel_min: -0.05,
        vel_max: 0.15,
        report_interval_ms: 1000.0,
        seed: 42,
    }
}

/// Build a seeded system of `n` cubes, same distributions as a real scene
fn bench_system(params: &Parameters) -> System {
    let mut rng = StdRng::seed_from_u64(params.seed);
    let cubes = (0..params.num_cubes)
        .map(|_| Cube {
            x: NVec3::new(
                rng.gen_range(-params.spawn_half..params.spawn_half),
                rng.gen_range(-params.spawn_half..params.spawn_half),
                0.0,
            ),
            v: NVec2::new(
                rng.gen_range(params.vel_min..params.vel_max),
                rng.gen_range(params.vel_min..params.vel_max),
            ),
        })
        .collect();

    System { cubes, ticks: 0 }
}

/// Time the full per-tick cycle (drift + throttled O(N^2) distance pass)
/// over growing system sizes, at a simulated 16 ms frame cadence.
pub fn bench_tick() {
    // Different system sizes to test; the real scene runs the first one
    let ns = [10, 20, 40, 80, 160, 320];
    let steps = 10_000;

    // Show one report block for the stock size so the output format is
    // visible alongside the timings
    {
        let params = bench_params(10);
        let system = bench_system(&params);
        let links = LinkSet::complete(params.num_cubes);
        println!("sample report for n = 10:");
        print!("{}", distance_block(&system, &links));
        println!();
    }

    for n in ns {
        let params = bench_params(n);
        let mut system = bench_system(&params);
        let links = LinkSet::complete(n);
        let mut clock = ReportClock::new(params.report_interval_ms);

        let mut reports = 0usize;
        let mut now_ms = 0.0;

        let t0 = Instant::now();
        for _ in 0..steps {
            drift_step(&mut system, &params);
            now_ms += 16.0;
            if clock.fire(now_ms) {
                let block = distance_block(&system, &links);
                std::hint::black_box(block);
                reports += 1;
            }
        }
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

        println!(
            "n = {:4}  links = {:6}  {:10.3} ms for {} ticks ({:7.3} us/tick, {} reports)",
            n,
            links.len(),
            elapsed_ms,
            steps,
            elapsed_ms * 1000.0 / steps as f64,
            reports,
        );
    }
}
