//! Configuration types for loading scene definitions from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scene. A scene consists of:
//!
//! - [`ParametersConfig`] – cube count, bounds, ranges, throttle, seed
//! - [`ViewConfig`]       – camera projection and viewer cosmetics
//! - [`SceneConfig`]      – top-level wrapper used to load a scene from YAML
//!
//! # YAML format
//! An example scene YAML matching these types:
//!
//! ```yaml
//! parameters:
//!   num_cubes: 10            # N, fixed for the run
//!   bound: 10.0              # velocity sign flips outside [-bound, bound]
//!   spawn_half: 5.0          # initial x/y uniform on [-5, 5)
//!   vel_min: -0.05           # velocity components uniform on [-0.05, 0.15)
//!   vel_max: 0.15
//!   report_interval_ms: 1000.0
//!   seed: 42                 # optional; omit for a fresh run every launch
//!
//! view:
//!   fov_deg: 75.0            # vertical field of view
//!   near: 0.1
//!   far: 1000.0
//!   camera_distance: 20.0    # initial camera position (0, 0, 20)
//!   damping: 0.05            # orbit control smoothing
//!   cube_size: 2.0
//!   line_thickness: 0.05     # optional
//!   axis_length: 10.0        # optional
//! ```
//!
//! The engine maps this configuration into its runtime scenario
//! representation before anything else runs.

use serde::Deserialize;

/// Simulation parameters for a scene
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub num_cubes: usize,        // number of cubes N
    pub bound: f64,              // reflection boundary
    pub spawn_half: f64,         // spawn range half-extent
    pub vel_min: f64,            // lower edge of the velocity distribution
    pub vel_max: f64,            // upper edge (exclusive)
    pub report_interval_ms: f64, // distance report throttle
    pub seed: Option<u64>,       // deterministic seed to make runs reproducible
}

/// Camera projection and viewer cosmetics
#[derive(Deserialize, Debug, Clone)]
pub struct ViewConfig {
    pub fov_deg: f32,                // vertical field of view in degrees
    pub near: f32,                   // near clip plane
    pub far: f32,                    // far clip plane
    pub camera_distance: f32,        // initial camera offset along +Z
    pub damping: f32,                // orbit camera smoothing factor
    pub cube_size: f32,              // cuboid edge length
    pub line_thickness: Option<f32>, // connector cross-section
    pub axis_length: Option<f32>,    // axes helper half-length
}

/// Top-level scene configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct SceneConfig {
    pub parameters: ParametersConfig, // simulation parameters
    pub view: ViewConfig,             // viewer settings
}
