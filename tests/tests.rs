use cubelink::configuration::config::{ParametersConfig, SceneConfig, ViewConfig};
use cubelink::simulation::links::LinkSet;
use cubelink::simulation::motion::drift_step;
use cubelink::simulation::params::Parameters;
use cubelink::simulation::report::{distance_block, ReportClock};
use cubelink::simulation::scenario::Scenario;
use cubelink::simulation::states::{Cube, NVec2, NVec3, System};

use std::collections::HashSet;

/// Default parameters for tests
pub fn test_params(n: usize) -> Parameters {
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

/// Build a cube at (x, y, 0) with velocity (vx, vy)
pub fn cube_at(x: f64, y: f64, vx: f64, vy: f64) -> Cube {
    Cube {
        x: NVec3::new(x, y, 0.0),
        v: NVec2::new(vx, vy),
    }
}

/// Wrap cubes into a fresh system at tick 0
pub fn system_of(cubes: Vec<Cube>) -> System {
    System { cubes, ticks: 0 }
}

/// A full scene configuration with a pinned seed
pub fn test_config(seed: Option<u64>) -> SceneConfig {
    SceneConfig {
        parameters: ParametersConfig {
            num_cubes: 10,
            bound: 10.0,
            spawn_half: 5.0,
            vel_min: -0.05,
            vel_max: 0.15,
            report_interval_ms: 1000.0,
            seed,
        },
        view: ViewConfig {
            fov_deg: 75.0,
            near: 0.1,
            far: 1000.0,
            camera_distance: 20.0,
            damping: 0.05,
            cube_size: 2.0,
            line_thickness: None,
            axis_length: None,
        },
    }
}

// ==================================================================================
// Link graph tests
// ==================================================================================

#[test]
fn link_graph_is_complete() {
    for n in 2..=10 {
        let links = LinkSet::complete(n);
        assert_eq!(links.len(), n * (n - 1) / 2, "wrong link count for n = {}", n);

        let mut seen = HashSet::new();
        for link in &links.links {
            assert!(link.a < link.b, "link not ordered: ({}, {})", link.a, link.b);
            assert!(link.b < n, "link index out of range: {}", link.b);
            assert!(seen.insert((link.a, link.b)), "duplicate link ({}, {})", link.a, link.b);
        }
    }
}

#[test]
fn link_graph_construction_order() {
    let links = LinkSet::complete(4);
    let pairs: Vec<(usize, usize)> = links.links.iter().map(|l| (l.a, l.b)).collect();
    assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
}

#[test]
fn link_endpoints_track_live_positions() {
    let params = test_params(3);
    let mut sys = system_of(vec![
        cube_at(0.0, 0.0, 0.01, 0.02),
        cube_at(1.0, 1.0, -0.03, 0.01),
        cube_at(-2.0, 3.0, 0.02, -0.04),
    ]);
    let links = LinkSet::complete(3);

    for _ in 0..50 {
        drift_step(&mut sys, &params);
    }

    for (k, link) in links.links.iter().enumerate() {
        let (a, b) = links.endpoints(&sys, k);
        assert_eq!(a, sys.cubes[link.a].x, "stale endpoint A on link {}", k);
        assert_eq!(b, sys.cubes[link.b].x, "stale endpoint B on link {}", k);
    }
}

#[test]
fn three_four_five_distance() {
    let sys = system_of(vec![cube_at(0.0, 0.0, 0.0, 0.0), cube_at(3.0, 4.0, 0.0, 0.0)]);
    let links = LinkSet::complete(2);

    let d = links.distance(&sys, 0);
    assert!((d - 5.0).abs() < 1e-12, "expected 5.0, got {}", d);

    let block = distance_block(&sys, &links);
    assert_eq!(block, "Distancia entre Cubo 1 y Cubo 2: 5.00\n");
}

// ==================================================================================
// Motion tests
// ==================================================================================

#[test]
fn drift_moves_by_velocity_and_keeps_z() {
    let params = test_params(1);
    let mut sys = system_of(vec![cube_at(1.0, -2.0, 0.1, -0.05)]);

    drift_step(&mut sys, &params);

    let c = &sys.cubes[0];
    assert!((c.x.x - 1.1).abs() < 1e-12);
    assert!((c.x.y + 2.05).abs() < 1e-12);
    assert_eq!(c.x.z, 0.0);
    assert_eq!(sys.ticks, 1);
}

#[test]
fn boundary_overshoot_is_visible_then_reversed() {
    let params = test_params(1);
    let mut sys = system_of(vec![cube_at(9.95, 0.0, 0.1, 0.0)]);

    drift_step(&mut sys, &params);

    let c = &sys.cubes[0];
    // The position crosses the bound and stays there for this tick
    assert!((c.x.x - 10.05).abs() < 1e-12, "expected overshoot to 10.05, got {}", c.x.x);
    // The velocity has already flipped
    assert!((c.v.x + 0.1).abs() < 1e-12, "expected vx = -0.1, got {}", c.v.x);

    // Next tick drifts back inside without another flip
    drift_step(&mut sys, &params);
    let c = &sys.cubes[0];
    assert!((c.x.x - 9.95).abs() < 1e-12);
    assert!((c.v.x + 0.1).abs() < 1e-12);
}

#[test]
fn no_flip_while_inside_bounds() {
    let params = test_params(1);
    let mut sys = system_of(vec![cube_at(0.0, 0.0, 0.1, -0.05)]);

    for _ in 0..10 {
        drift_step(&mut sys, &params);
    }

    let c = &sys.cubes[0];
    assert!((c.v.x - 0.1).abs() < 1e-12);
    assert!((c.v.y + 0.05).abs() < 1e-12);
}

#[test]
fn axes_reflect_independently() {
    let params = test_params(1);
    // x crosses +bound and y crosses -bound on the same tick
    let mut sys = system_of(vec![cube_at(9.95, -9.97, 0.1, -0.05)]);

    drift_step(&mut sys, &params);

    let c = &sys.cubes[0];
    assert!(c.x.x > 10.0 && c.x.y < -10.0, "both axes should overshoot");
    assert!((c.v.x + 0.1).abs() < 1e-12, "x velocity should flip");
    assert!((c.v.y - 0.05).abs() < 1e-12, "y velocity should flip");
}

#[test]
fn exact_bound_does_not_flip() {
    let params = test_params(1);
    // Lands exactly on the bound: not strictly outside, no flip
    let mut sys = system_of(vec![cube_at(9.9, 0.0, 0.1, 0.0)]);

    drift_step(&mut sys, &params);

    let c = &sys.cubes[0];
    assert!((c.x.x - 10.0).abs() < 1e-12);
    assert!((c.v.x - 0.1).abs() < 1e-12, "no flip when exactly on the bound");
}

// ==================================================================================
// Report throttle tests
// ==================================================================================

#[test]
fn report_clock_fires_twice_in_2500ms() {
    let mut clock = ReportClock::new(1000.0);
    let mut fires = Vec::new();

    // ~16 ms frame cadence from process start to 2500 ms
    let mut now = 0.0;
    while now <= 2500.0 {
        if clock.fire(now) {
            fires.push(now);
        }
        now += 16.0;
    }

    assert_eq!(fires.len(), 2, "expected exactly 2 reports, got {:?}", fires);
    assert!(fires[0] >= 1000.0 && fires[0] < 1100.0, "first report near 1000 ms: {:?}", fires);
    assert!(fires[1] >= 2000.0 && fires[1] < 2100.0, "second report near 2000 ms: {:?}", fires);
}

#[test]
fn report_clock_does_not_accumulate_missed_intervals() {
    let mut clock = ReportClock::new(1000.0);

    // A long stall spanning several intervals yields a single report
    assert!(clock.fire(3500.0));
    assert!(!clock.fire(3516.0));
    assert!(!clock.fire(4499.0));
    assert!(clock.fire(4500.0));
}

#[test]
fn report_block_lines_and_labels() {
    let cfg = test_config(Some(7));
    let scenario = Scenario::build_scenario(cfg);
    let block = distance_block(&scenario.system, &scenario.links);

    let lines: Vec<&str> = block.lines().collect();
    assert_eq!(lines.len(), 45, "10 cubes give 45 report lines");
    assert!(lines[0].starts_with("Distancia entre Cubo 1 y Cubo 2: "));
    assert!(lines[44].starts_with("Distancia entre Cubo 9 y Cubo 10: "));

    // Every line carries a 2-decimal value
    for line in &lines {
        let value = line.rsplit(": ").next().unwrap();
        assert_eq!(value.split('.').nth(1).map(str::len), Some(2), "bad format: {}", line);
    }
}

// ==================================================================================
// Scenario tests
// ==================================================================================

#[test]
fn scenario_spawns_within_configured_ranges() {
    let scenario = Scenario::build_scenario(test_config(Some(11)));

    assert_eq!(scenario.system.cubes.len(), 10);
    assert_eq!(scenario.links.len(), 45);

    for cube in &scenario.system.cubes {
        assert!(cube.x.x >= -5.0 && cube.x.x < 5.0);
        assert!(cube.x.y >= -5.0 && cube.x.y < 5.0);
        assert_eq!(cube.x.z, 0.0);
        assert!(cube.v.x >= -0.05 && cube.v.x < 0.15);
        assert!(cube.v.y >= -0.05 && cube.v.y < 0.15);
    }
}

#[test]
fn same_seed_builds_identical_scenarios() {
    let a = Scenario::build_scenario(test_config(Some(1234)));
    let b = Scenario::build_scenario(test_config(Some(1234)));

    assert_eq!(a.system.cubes.len(), b.system.cubes.len());
    for (ca, cb) in a.system.cubes.iter().zip(b.system.cubes.iter()) {
        assert_eq!(ca.x, cb.x);
        assert_eq!(ca.v, cb.v);
    }
}

#[test]
fn different_seeds_differ() {
    let a = Scenario::build_scenario(test_config(Some(1)));
    let b = Scenario::build_scenario(test_config(Some(2)));

    let same = a
        .system
        .cubes
        .iter()
        .zip(b.system.cubes.iter())
        .all(|(ca, cb)| ca.x == cb.x);
    assert!(!same, "different seeds should not reproduce the same layout");
}

#[test]
fn scenario_tick_reports_on_schedule() {
    let mut scenario = Scenario::build_scenario(test_config(Some(99)));

    let mut reports = 0;
    let mut now = 0.0;
    while now <= 2500.0 {
        if let Some(block) = scenario.tick(now) {
            assert_eq!(block.lines().count(), 45);
            reports += 1;
        }
        now += 16.0;
    }

    assert_eq!(reports, 2);
    assert_eq!(scenario.system.ticks, 157); // one drift per tick call
}
