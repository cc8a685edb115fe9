//! Simulation engine for antwar.
//!
//! Owns the full game state, validates and applies player commands, and
//! resolves rounds through a fixed, auditable pipeline of phase systems.
//! Completely headless and synchronous, enabling deterministic testing.

pub mod engine;
pub mod pheromone;
pub mod state;
pub mod systems;

pub use antwar_core as core;
pub use engine::{Rejection, SimConfig, SimulationEngine};
pub use state::GameState;
