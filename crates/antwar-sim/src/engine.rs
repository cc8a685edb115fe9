//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the `GameState`, validates and applies player
//! commands, and resolves rounds by running the phase systems in their
//! fixed order. Checking and applying share one legality predicate, so
//! the two can never disagree.

use std::io;

use thiserror::Error;

use antwar_core::commands::Command;
use antwar_core::constants::{
    super_weapon_stats, HQ_MAX_LEVEL, HQ_UPGRADE_COST, TOWER_DEMOLISH_REFUND_RATE,
    TOWER_REFUND_TIER1, TOWER_REFUND_TIER2, TOWER_UPGRADE_COST_TIER1, TOWER_UPGRADE_COST_TIER2,
};
use antwar_core::entities::{SuperWeapon, Tower};
use antwar_core::enums::{SuperWeaponKind, TowerKind};
use antwar_core::events::RoundEvent;
use antwar_core::map;
use antwar_core::state::RoundSnapshot;
use antwar_core::types::{distance, Coord, Player};

use crate::state::GameState;
use crate::systems;

/// Configuration for starting a new match.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// Pheromone seed handed out by the judge. Same seed and commands =
    /// same match.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 0 }
    }
}

/// Why a command was refused. The accept/reject outcome is authoritative;
/// the reason is diagnostic only and carries no wire representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("not enough coin")]
    NotEnoughCoin,
    #[error("cell is not this player's highland")]
    NotOwnHighland,
    #[error("cell is already occupied by a tower")]
    CellOccupied,
    #[error("cell is under enemy EMP coverage")]
    UnderEmp,
    #[error("no tower with that id")]
    NoSuchTower,
    #[error("tower belongs to the opponent")]
    NotOwnTower,
    #[error("no upgrade edge between those tower kinds")]
    InvalidUpgrade,
    #[error("super weapon still on cooldown")]
    WeaponOnCooldown,
    #[error("headquarters upgrade already at max level")]
    LevelCapped,
}

/// The simulation engine. Owns the game state and all round bookkeeping.
pub struct SimulationEngine {
    state: GameState,
    events: Vec<RoundEvent>,
}

impl SimulationEngine {
    /// Create a new engine with both pheromone fields seeded per config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            state: GameState::new(config.seed),
            events: Vec::new(),
        }
    }

    /// Read-only view of the full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable state access for test scenario setup.
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Check a command without touching any state.
    pub fn check_command(&self, player: Player, command: &Command) -> Result<(), Rejection> {
        match *command {
            Command::BuildTower { coord } => self.check_build(player, coord),
            Command::UpgradeTower { id, kind } => self.check_upgrade(player, id, kind),
            Command::DowngradeTower { id } => self.check_downgrade(player, id),
            Command::DeploySuperWeapon { kind, .. } => self.check_deploy(player, kind),
            Command::UpgradeSpawnRate => {
                Self::check_hq_upgrade(self.state.coin[player], self.state.spawn_level[player])
            }
            Command::UpgradeAntHp => {
                Self::check_hq_upgrade(self.state.coin[player], self.state.hp_level[player])
            }
        }
    }

    /// The plain pass/fail form of `check_command`.
    pub fn is_command_valid(&self, player: Player, command: &Command) -> bool {
        self.check_command(player, command).is_ok()
    }

    /// Check a command and, if legal, commit its effects (coin movement
    /// included). A rejected command is a complete no-op.
    pub fn apply_command(&mut self, player: Player, command: &Command) -> Result<(), Rejection> {
        self.check_command(player, command)?;
        match *command {
            Command::BuildTower { coord } => self.commit_build(player, coord),
            Command::UpgradeTower { id, kind } => self.commit_upgrade(player, id, kind),
            Command::DowngradeTower { id } => self.commit_downgrade(player, id),
            Command::DeploySuperWeapon { kind, coord } => self.commit_deploy(player, kind, coord),
            Command::UpgradeSpawnRate => {
                self.state.coin[player] -= HQ_UPGRADE_COST[self.state.spawn_level[player]];
                self.state.spawn_level[player] += 1;
            }
            Command::UpgradeAntHp => {
                self.state.coin[player] -= HQ_UPGRADE_COST[self.state.hp_level[player]];
                self.state.hp_level[player] += 1;
            }
        }
        Ok(())
    }

    /// Resolve one round through the fixed phase order and return what
    /// happened. See the systems modules for the individual phases.
    pub fn advance_round(&mut self) -> Vec<RoundEvent> {
        self.events.clear();
        systems::combat::run_storms(&mut self.state, &mut self.events);
        systems::combat::run_towers(&mut self.state, &mut self.events);
        systems::movement::run_aging(&mut self.state, &mut self.events);
        systems::movement::run(&mut self.state, &mut self.events);
        systems::trail::run(&mut self.state);
        systems::spawn::run(&mut self.state, &mut self.events);
        systems::cleanup::run(&mut self.state);
        std::mem::take(&mut self.events)
    }

    /// Render the externally visible state after the last round.
    pub fn snapshot(&self) -> RoundSnapshot {
        systems::snapshot::build_snapshot(&self.state)
    }

    /// Append one round's replay block to a caller-supplied sink.
    pub fn write_replay<W: io::Write>(&self, sink: &mut W) -> io::Result<()> {
        systems::snapshot::write_replay(&self.state, sink)
    }

    // ---- Legality predicates ----

    fn check_build(&self, player: Player, coord: Coord) -> Result<(), Rejection> {
        if self.state.coin[player] < self.state.build_cost(player) {
            return Err(Rejection::NotEnoughCoin);
        }
        if !map::is_player_highland(coord, player) {
            return Err(Rejection::NotOwnHighland);
        }
        if self.state.tower_at(coord).is_some() {
            return Err(Rejection::CellOccupied);
        }
        if self.state.in_enemy_emp(player, coord) {
            return Err(Rejection::UnderEmp);
        }
        Ok(())
    }

    fn check_upgrade(&self, player: Player, id: u32, kind: TowerKind) -> Result<(), Rejection> {
        let tower = self.state.tower(id).ok_or(Rejection::NoSuchTower)?;
        if tower.player != player {
            return Err(Rejection::NotOwnTower);
        }
        if self.state.coin[player] < Self::upgrade_cost(kind) {
            return Err(Rejection::NotEnoughCoin);
        }
        if self.state.in_enemy_emp(player, tower.coord) {
            return Err(Rejection::UnderEmp);
        }
        if !tower.kind.can_upgrade_to(kind) {
            return Err(Rejection::InvalidUpgrade);
        }
        Ok(())
    }

    fn check_downgrade(&self, player: Player, id: u32) -> Result<(), Rejection> {
        let tower = self.state.tower(id).ok_or(Rejection::NoSuchTower)?;
        if tower.player != player {
            return Err(Rejection::NotOwnTower);
        }
        if self.state.in_enemy_emp(player, tower.coord) {
            return Err(Rejection::UnderEmp);
        }
        Ok(())
    }

    fn check_deploy(&self, player: Player, kind: SuperWeaponKind) -> Result<(), Rejection> {
        if self.state.coin[player] < super_weapon_stats(kind).cost {
            return Err(Rejection::NotEnoughCoin);
        }
        if self.state.weapon_cooldowns[player][kind.cooldown_slot()] != 0 {
            return Err(Rejection::WeaponOnCooldown);
        }
        Ok(())
    }

    fn check_hq_upgrade(coin: i32, level: usize) -> Result<(), Rejection> {
        if level >= HQ_MAX_LEVEL {
            return Err(Rejection::LevelCapped);
        }
        if coin < HQ_UPGRADE_COST[level] {
            return Err(Rejection::NotEnoughCoin);
        }
        Ok(())
    }

    const fn upgrade_cost(kind: TowerKind) -> i32 {
        if kind.code() > 10 {
            TOWER_UPGRADE_COST_TIER2
        } else {
            TOWER_UPGRADE_COST_TIER1
        }
    }

    /// Refund for downgrading the given kind: tier refunds are flat, while
    /// demolishing a basic tower returns a fraction of the *recomputed*
    /// build price (the tower itself still counted), not of what was paid.
    fn downgrade_refund(&self, player: Player, kind: TowerKind) -> i32 {
        if kind.code() > 10 {
            TOWER_REFUND_TIER2
        } else if kind.code() > 0 {
            TOWER_REFUND_TIER1
        } else {
            (self.state.build_cost(player) as f64 * TOWER_DEMOLISH_REFUND_RATE) as i32
        }
    }

    // ---- Committed effects (legality already established) ----

    fn commit_build(&mut self, player: Player, coord: Coord) {
        let cost = self.state.build_cost(player);
        let id = self.state.next_tower_id;
        self.state.next_tower_id += 1;
        self.state
            .towers
            .push(Tower::new(id, player, coord, TowerKind::Basic));
        self.state.coin[player] -= cost;
    }

    fn commit_upgrade(&mut self, player: Player, id: u32, kind: TowerKind) {
        self.state.coin[player] -= Self::upgrade_cost(kind);
        if let Some(tower) = self.state.tower_mut(id) {
            tower.kind = kind;
            tower.reset_cooldown();
        }
    }

    fn commit_downgrade(&mut self, player: Player, id: u32) {
        let Some(kind) = self.state.tower(id).map(|tower| tower.kind) else {
            return;
        };
        let refund = self.downgrade_refund(player, kind);
        match kind.downgraded() {
            None => {
                self.state.towers.retain(|tower| tower.id != id);
            }
            Some(down) => {
                if let Some(tower) = self.state.tower_mut(id) {
                    tower.kind = down;
                    tower.reset_cooldown();
                }
            }
        }
        self.state.coin[player] += refund;
    }

    fn commit_deploy(&mut self, player: Player, kind: SuperWeaponKind, coord: Coord) {
        let stats = super_weapon_stats(kind);
        self.state.coin[player] -= stats.cost;
        self.state.weapon_cooldowns[player][kind.cooldown_slot()] = stats.cooldown;
        if kind == SuperWeaponKind::EmergencyEvasion {
            // Instant effect: charge up own ants in range, no standing entity.
            for ant in self
                .state
                .ants
                .iter_mut()
                .filter(|ant| ant.player == player && distance(ant.coord, coord) <= stats.radius)
            {
                ant.evasion += stats.duration;
            }
        } else {
            self.state
                .active_weapons
                .push(SuperWeapon::deploy(player, kind, coord));
        }
    }
}
