//! Entity value types: ants, towers, and super weapons.

use serde::{Deserialize, Serialize};

use crate::constants::{
    super_weapon_stats, tower_stats, SuperWeaponStats, TowerStats, ANT_MAX_HP,
};
use crate::enums::{AntState, SuperWeaponKind, TowerKind};
use crate::types::{Coord, Player};

/// A mobile unit marching from its owner's headquarters toward the
/// opponent's. Both players' ants share one id sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ant {
    pub id: u32,
    pub player: Player,
    pub hp: i32,
    pub max_hp: i32,
    pub coord: Coord,
    /// Hp level at spawn time (0..=2); fixes the kill bounty.
    pub level: usize,
    /// Rounds survived so far.
    pub age: u32,
    /// Pending evasion charges; each consumes one incoming hit.
    pub evasion: u32,
    pub state: AntState,
    /// Every cell visited, including the spawn cell and the current one.
    /// Only consumed by trail reinforcement.
    pub path: Vec<Coord>,
}

impl Ant {
    /// A freshly spawned ant at its owner's headquarters cell.
    pub fn spawn(id: u32, player: Player, level: usize, coord: Coord) -> Self {
        Self {
            id,
            player,
            hp: ANT_MAX_HP[level],
            max_hp: ANT_MAX_HP[level],
            coord,
            level,
            age: 0,
            evasion: 0,
            state: AntState::Alive,
            path: vec![coord],
        }
    }
}

/// A stationary defensive structure. Towers have their own id sequence,
/// independent of the ants'.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tower {
    pub id: u32,
    pub player: Player,
    pub coord: Coord,
    pub kind: TowerKind,
    /// Rounds until the tower may fire again; 0 means ready.
    pub cooldown: u32,
}

impl Tower {
    pub fn new(id: u32, player: Player, coord: Coord, kind: TowerKind) -> Self {
        let mut tower = Self {
            id,
            player,
            coord,
            kind,
            cooldown: 0,
        };
        tower.reset_cooldown();
        tower
    }

    pub fn stats(&self) -> TowerStats {
        tower_stats(self.kind)
    }

    /// Restart the attack cycle from the kind's full interval.
    pub fn reset_cooldown(&mut self) {
        self.cooldown = self.stats().interval;
    }
}

/// A standing super weapon effect. `EmergencyEvasion` resolves instantly
/// and never appears as one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuperWeapon {
    pub player: Player,
    pub kind: SuperWeaponKind,
    pub coord: Coord,
    /// Remaining rounds of effect; removed at 0.
    pub duration: u32,
}

impl SuperWeapon {
    /// A freshly deployed effect with its kind's full duration.
    pub fn deploy(player: Player, kind: SuperWeaponKind, coord: Coord) -> Self {
        Self {
            player,
            kind,
            coord,
            duration: super_weapon_stats(kind).duration,
        }
    }

    pub fn stats(&self) -> SuperWeaponStats {
        super_weapon_stats(self.kind)
    }
}
