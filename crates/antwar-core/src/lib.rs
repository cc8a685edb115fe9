//! Core types and definitions for the antwar simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! hex coordinates and terrain, entity value types, static config tables,
//! commands, round events, and snapshot views. It has no dependency on any
//! I/O or runtime framework.

pub mod commands;
pub mod constants;
pub mod entities;
pub mod enums;
pub mod events;
pub mod map;
pub mod state;
pub mod types;
