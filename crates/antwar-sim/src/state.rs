//! The engine-owned mutable game state.

use antwar_core::constants::{INITIAL_COIN, INITIAL_HQ_HP, TOWER_BASE_COST};
use antwar_core::entities::{Ant, SuperWeapon, Tower};
use antwar_core::enums::SuperWeaponKind;
use antwar_core::types::{distance, Coord, Player};

use crate::pheromone::{generate_fields, PheromoneField};

/// Complete round state of one match. The engine is the sole mutator;
/// everything here is reachable read-only through `SimulationEngine`.
///
/// Entity vectors keep insertion order: towers act in creation order and
/// id tie-breaks fall out of the ordered scans, so lookups stay linear
/// over these small lists on purpose.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Rounds fully resolved so far; starts at 0.
    pub round: u32,
    pub ants: Vec<Ant>,
    pub towers: Vec<Tower>,
    pub coin: [i32; 2],
    pub hq_hp: [i32; 2],
    pub active_weapons: Vec<SuperWeapon>,
    /// Remaining deploy cooldown per player per weapon kind, indexed by
    /// `SuperWeaponKind::cooldown_slot`.
    pub weapon_cooldowns: [[u32; 4]; 2],
    pub fields: [PheromoneField; 2],
    /// Spawn-speed upgrade level per player (0..=2).
    pub spawn_level: [usize; 2],
    /// Max-hp upgrade level per player (0..=2).
    pub hp_level: [usize; 2],
    pub next_ant_id: u32,
    pub next_tower_id: u32,
}

impl GameState {
    /// Fresh round-0 state with both pheromone fields drawn from `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            round: 0,
            ants: Vec::new(),
            towers: Vec::new(),
            coin: [INITIAL_COIN; 2],
            hq_hp: [INITIAL_HQ_HP; 2],
            active_weapons: Vec::new(),
            weapon_cooldowns: [[0; 4]; 2],
            fields: generate_fields(seed),
            spawn_level: [0; 2],
            hp_level: [0; 2],
            next_ant_id: 0,
            next_tower_id: 0,
        }
    }

    pub fn ant(&self, id: u32) -> Option<&Ant> {
        self.ants.iter().find(|ant| ant.id == id)
    }

    pub fn ant_mut(&mut self, id: u32) -> Option<&mut Ant> {
        self.ants.iter_mut().find(|ant| ant.id == id)
    }

    /// All ants standing on the cell; ants of either side may overlap.
    pub fn ants_at(&self, coord: Coord) -> impl Iterator<Item = &Ant> {
        self.ants.iter().filter(move |ant| ant.coord == coord)
    }

    pub fn tower(&self, id: u32) -> Option<&Tower> {
        self.towers.iter().find(|tower| tower.id == id)
    }

    pub fn tower_mut(&mut self, id: u32) -> Option<&mut Tower> {
        self.towers.iter_mut().find(|tower| tower.id == id)
    }

    /// The tower occupying the cell, if any. At most one fits.
    pub fn tower_at(&self, coord: Coord) -> Option<&Tower> {
        self.towers.iter().find(|tower| tower.coord == coord)
    }

    /// Price of the player's next tower: 15 * 2^n for n towers owned,
    /// saturating once the doubling leaves the i32 range.
    pub fn build_cost(&self, player: Player) -> i32 {
        let owned = self
            .towers
            .iter()
            .filter(|tower| tower.player == player)
            .count() as u32;
        match i64::from(TOWER_BASE_COST).checked_shl(owned) {
            Some(cost) if cost <= i64::from(i32::MAX) => cost as i32,
            _ => i32::MAX,
        }
    }

    /// Whether the cell sits inside an enemy EMP blaster's footprint, which
    /// forbids every tower mutation there and silences towers standing in it.
    pub fn in_enemy_emp(&self, player: Player, coord: Coord) -> bool {
        self.active_weapons.iter().any(|sw| {
            sw.player != player
                && sw.kind == SuperWeaponKind::EmpBlaster
                && distance(coord, sw.coord) <= sw.stats().radius
        })
    }

    /// Whether the cell is covered by an active own-side deflector zone.
    pub fn in_own_deflector(&self, player: Player, coord: Coord) -> bool {
        self.active_weapons.iter().any(|sw| {
            sw.player == player
                && sw.kind == SuperWeaponKind::Deflectors
                && distance(sw.coord, coord) <= sw.stats().radius
        })
    }
}
