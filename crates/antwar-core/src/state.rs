//! Snapshot views — the externally visible state after a round.
//!
//! These mirror what the judge broadcasts each round, plus the pheromone
//! grids for replay and determinism checks. Ant views deliberately carry
//! no path history.

use serde::{Deserialize, Serialize};

use crate::enums::{AntState, TowerKind};
use crate::types::{Coord, Player};

/// A tower as visible to both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TowerView {
    pub id: u32,
    pub player: Player,
    pub coord: Coord,
    pub kind: TowerKind,
    pub cooldown: u32,
}

/// An ant as visible to both players (no path).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntView {
    pub id: u32,
    pub player: Player,
    pub coord: Coord,
    pub hp: i32,
    pub level: usize,
    pub age: u32,
    pub state: AntState,
}

/// Complete engine state rendered for the caller after a round. Two runs
/// with equal seeds and command sequences produce byte-identical
/// serializations of this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub round: u32,
    pub towers: Vec<TowerView>,
    pub ants: Vec<AntView>,
    pub coin: [i32; 2],
    pub hq_hp: [i32; 2],
    /// Both players' pheromone grids, row-major.
    pub pheromone: [Vec<Vec<f64>>; 2],
}
