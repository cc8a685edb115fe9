//! Phase systems run by the engine, one module per resolution phase.
//!
//! Systems are free functions over `&mut GameState`; the engine calls
//! them in a fixed order each round, and that order is the contract.

pub mod cleanup;
pub mod combat;
pub mod movement;
pub mod snapshot;
pub mod spawn;
pub mod trail;
