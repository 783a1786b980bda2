//! Combat simulation engine for Last Judgment.
//!
//! Owns the hecs ECS world, runs the combat systems once per frame,
//! and produces GameStateSnapshots for the renderer.

pub mod context;
pub mod drop_table;
pub mod engine;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use judgment_core as core;
