//! Core types and definitions for the Last Judgment combat simulation.
//!
//! This crate defines the vocabulary shared by the simulation and whatever
//! front end drives it: components, commands, configuration, state
//! snapshots, events, and constants. It has no dependency on the ECS runtime
//! or on any rendering layer.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod mask;
pub mod state;
pub mod types;
