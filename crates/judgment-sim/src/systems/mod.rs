//! ECS systems that operate on the simulation world each frame.
//!
//! Systems are plain functions over `&mut World` plus whatever slice of the
//! frame context they need. They hold no state of their own.

pub mod cleanup;
pub mod collision;
pub mod combat;
pub mod destruction;
pub mod effects;
pub mod movement;
pub mod projectile;
pub mod shooting;
pub mod snapshot;
