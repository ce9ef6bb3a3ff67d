//! Core state types for the cube scene.
//!
//! Defines the cube/system structs:
//! - `Cube` holds one drifting cube (position + velocity)
//! - `System` holds the full collection plus the tick count
//!
//! Positions are 3D (`NVec3`) but the walk is planar: `z` stays at 0
//! and velocities are 2D (`NVec2`).

use nalgebra::{Vector2, Vector3};
pub type NVec2 = Vector2<f64>;
pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone)]
pub struct Cube {
    pub x: NVec3, // position, z fixed at 0
    pub v: NVec2, // drift velocity, mutated only by boundary sign flips
}

#[derive(Debug, Clone)]
pub struct System {
    pub cubes: Vec<Cube>, // collection of cubes, size fixed at construction
    pub ticks: u64, // elapsed update ticks
}
