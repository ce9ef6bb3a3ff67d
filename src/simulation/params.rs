//! Numerical parameters for the scene
//!
//! `Parameters` holds runtime settings:
//! - cube count and the reflection boundary,
//! - spawn and velocity ranges for initial state,
//! - report throttle interval and random seed

#[derive(Debug, Clone)]
pub struct Parameters {
    pub num_cubes: usize, // N, fixed for the process lifetime
    pub bound: f64, // reflection boundary on |x| and |y|
    pub spawn_half: f64, // initial positions uniform on [-spawn_half, spawn_half)
    pub vel_min: f64, // velocity components uniform on [vel_min, vel_max)
    pub vel_max: f64,
    pub report_interval_ms: f64, // distance report throttle
    pub seed: u64, // deterministic seed
}
