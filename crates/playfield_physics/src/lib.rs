//! Simplified physics facade for the Playfield 3D sandbox.
//!
//! Wraps the Rapier 3D backend behind a small surface for games that need:
//! - Static collision geometry cooked from renderer-agnostic vertex data
//! - Heightfield terrain built from normalized heightmaps
//! - Kinematic capsule character controllers with sweep-and-resolve moves
//! - Fixed-frequency simulation stepping decoupled from the frame rate
//!
//! Dynamic rigid bodies, joints, and multi-world setups are intentionally
//! out of scope; the facade owns exactly one world for its lifetime.

pub mod character;
pub mod cooking;
pub mod engine;
pub mod error;
mod telemetry;

pub use character::{CollisionFlags, ControllerHandle};
pub use cooking::MeshHandle;
pub use engine::PhysicsEngine;
pub use error::{PhysicsError, PhysicsResult};
