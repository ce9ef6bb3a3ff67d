//! Build a fully-initialized scene from configuration
//!
//! Takes a `SceneConfig` (YAML-facing) and produces the runtime bundle
//! (`Scenario`) containing:
//! - numerical parameters (`Parameters`)
//! - viewer settings (`View`)
//! - system state (`System` with seeded-random cubes)
//! - the complete connector graph (`LinkSet`)
//! - the report throttle (`ReportClock`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! motion, sync, and report systems. `tick` drives the same update cycle
//! without a window, for tests and the benchmark.

use bevy::prelude::Resource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::SceneConfig;
use crate::simulation::links::LinkSet;
use crate::simulation::motion::drift_step;
use crate::simulation::params::Parameters;
use crate::simulation::report::{distance_block, ReportClock};
use crate::simulation::states::{Cube, NVec2, NVec3, System};

/// Viewer-facing settings carried alongside the simulation state.
#[derive(Debug, Clone)]
pub struct View {
    pub fov_deg: f32, // vertical field of view
    pub near: f32,
    pub far: f32,
    pub camera_distance: f32, // initial camera offset along +Z
    pub damping: f32, // orbit camera smoothing factor
    pub cube_size: f32, // cuboid edge length
    pub line_thickness: f32, // connector cross-section
    pub axis_length: f32, // axes helper half-length
}

/// Bevy resource representing a fully-initialized scene
///
/// This is the main "runtime bundle" constructed from a [`SceneConfig`]:
/// parameters, viewer settings, current system state, the connector
/// graph, and the report clock.
#[derive(Resource)]
pub struct Scenario {
    pub parameters: Parameters,
    pub view: View,
    pub system: System,
    pub links: LinkSet,
    pub clock: ReportClock,
}

impl Scenario {
    pub fn build_scenario(cfg: SceneConfig) -> Self {
        // Parameters (runtime) from ParametersConfig; an absent seed means
        // a fresh one per run, so launches differ unless pinned
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            num_cubes: p_cfg.num_cubes,
            bound: p_cfg.bound,
            spawn_half: p_cfg.spawn_half,
            vel_min: p_cfg.vel_min,
            vel_max: p_cfg.vel_max,
            report_interval_ms: p_cfg.report_interval_ms,
            seed: p_cfg.seed.unwrap_or_else(rand::random),
        };

        // Cubes: positions uniform on [-spawn_half, spawn_half) in x/y with
        // z pinned to 0, velocity components uniform on [vel_min, vel_max)
        let mut rng = StdRng::seed_from_u64(parameters.seed);
        let cubes: Vec<Cube> = (0..parameters.num_cubes)
            .map(|_| Cube {
                x: NVec3::new(
                    rng.gen_range(-parameters.spawn_half..parameters.spawn_half),
                    rng.gen_range(-parameters.spawn_half..parameters.spawn_half),
                    0.0,
                ),
                v: NVec2::new(
                    rng.gen_range(parameters.vel_min..parameters.vel_max),
                    rng.gen_range(parameters.vel_min..parameters.vel_max),
                ),
            })
            .collect();

        // Initial system state plus the complete connector graph over it
        let links = LinkSet::complete(cubes.len());
        let system = System { cubes, ticks: 0 };

        let clock = ReportClock::new(parameters.report_interval_ms);

        let v_cfg = cfg.view;
        let view = View {
            fov_deg: v_cfg.fov_deg,
            near: v_cfg.near,
            far: v_cfg.far,
            camera_distance: v_cfg.camera_distance,
            damping: v_cfg.damping,
            cube_size: v_cfg.cube_size,
            line_thickness: v_cfg.line_thickness.unwrap_or(0.05),
            axis_length: v_cfg.axis_length.unwrap_or(10.0),
        };

        Self {
            parameters,
            view,
            system,
            links,
            clock,
        }
    }

    /// Run one update cycle against a caller-supplied clock: drift every
    /// cube, then return the formatted distance block iff the report
    /// throttle fires. This is the windowless twin of the viewer's
    /// per-frame systems.
    pub fn tick(&mut self, now_ms: f64) -> Option<String> {
        drift_step(&mut self.system, &self.parameters);
        if self.clock.fire(now_ms) {
            Some(distance_block(&self.system, &self.links))
        } else {
            None
        }
    }
}
