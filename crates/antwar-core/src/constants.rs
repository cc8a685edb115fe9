//! Game constants and static config tables.

use crate::enums::{SuperWeaponKind, TowerKind};

/// Starting headquarters hp for both players.
pub const INITIAL_HQ_HP: i32 = 50;

/// Starting coin for both players.
pub const INITIAL_COIN: i32 = 50;

/// Coin credited to each player at the end of every round.
pub const ROUND_INCOME: i32 = 1;

// --- Ants ---

/// Maximum ant lifetime in rounds; older ants fade out.
pub const ANT_MAX_AGE: u32 = 32;

/// Maximum hp per hp-upgrade level.
pub const ANT_MAX_HP: [i32; 3] = [10, 25, 50];

/// Coin credited to the opponent for killing an ant of each level.
pub const ANT_KILL_BOUNTY: [i32; 3] = [3, 5, 7];

/// Rounds between spawns per spawn-speed level. An ant spawns whenever the
/// round number is divisible by the interval.
pub const ANT_SPAWN_INTERVAL: [u32; 3] = [4, 2, 1];

/// Cost of the next headquarters upgrade (either line) per current level.
pub const HQ_UPGRADE_COST: [i32; 2] = [200, 250];

/// Highest reachable level for both headquarters upgrade lines.
pub const HQ_MAX_LEVEL: usize = 2;

// --- Towers ---

/// Base price of a player's first tower; the nth tower costs twice the
/// (n-1)th.
pub const TOWER_BASE_COST: i32 = 15;

/// Coin to upgrade a tower to a tier-1 kind.
pub const TOWER_UPGRADE_COST_TIER1: i32 = 60;

/// Coin to upgrade a tower to a tier-2 kind.
pub const TOWER_UPGRADE_COST_TIER2: i32 = 200;

/// Refund for downgrading out of a tier-1 kind (80% of the upgrade price).
pub const TOWER_REFUND_TIER1: i32 = 48;

/// Refund for downgrading out of a tier-2 kind (80% of the upgrade price).
pub const TOWER_REFUND_TIER2: i32 = 160;

/// Fraction of the *current* build price refunded for demolishing a basic
/// tower. Deliberately not 80% of what was actually paid.
pub const TOWER_DEMOLISH_REFUND_RATE: f64 = 0.4;

/// Combat stats of a tower kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TowerStats {
    /// Damage per hit.
    pub damage: i32,
    /// Rounds between attacks.
    pub interval: u32,
    /// Targeting range in hex distance.
    pub range: i32,
    /// Splash radius around the struck cell; 0 means single target.
    pub aoe: i32,
}

/// Static stats table, one entry per tower kind.
pub const fn tower_stats(kind: TowerKind) -> TowerStats {
    const fn stats(damage: i32, interval: u32, range: i32, aoe: i32) -> TowerStats {
        TowerStats {
            damage,
            interval,
            range,
            aoe,
        }
    }
    match kind {
        TowerKind::Basic => stats(5, 2, 2, 0),
        TowerKind::Heavy => stats(20, 2, 2, 0),
        TowerKind::HeavyPlus => stats(35, 2, 3, 0),
        TowerKind::Ice => stats(15, 2, 2, 0),
        TowerKind::Cannon => stats(50, 3, 3, 0),
        TowerKind::Quick => stats(6, 1, 3, 0),
        TowerKind::QuickPlus => stats(8, 1, 3, 0),
        TowerKind::Double => stats(7, 1, 4, 0),
        TowerKind::Sniper => stats(15, 2, 6, 0),
        TowerKind::Mortar => stats(16, 4, 3, 1),
        TowerKind::MortarPlus => stats(35, 4, 4, 1),
        TowerKind::Pulse => stats(30, 3, 2, 2),
        TowerKind::Missile => stats(45, 6, 5, 2),
    }
}

// --- Super weapons ---

/// Flat damage a lightning storm deals to each enemy ant in range per round.
pub const STORM_DAMAGE: i32 = 100;

/// Deployment stats of a super weapon kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuperWeaponStats {
    /// Coin to deploy once.
    pub cost: i32,
    /// Rounds before the same player may deploy this kind again.
    pub cooldown: u32,
    /// Rounds the effect persists (evasion charges granted, for
    /// `EmergencyEvasion`).
    pub duration: u32,
    /// Effect radius in hex distance.
    pub radius: i32,
}

/// Static stats table, one entry per super weapon kind.
pub const fn super_weapon_stats(kind: SuperWeaponKind) -> SuperWeaponStats {
    const fn stats(cost: i32, cooldown: u32, duration: u32, radius: i32) -> SuperWeaponStats {
        SuperWeaponStats {
            cost,
            cooldown,
            duration,
            radius,
        }
    }
    match kind {
        SuperWeaponKind::LightningStorm => stats(150, 100, 20, 3),
        SuperWeaponKind::EmpBlaster => stats(150, 100, 20, 3),
        SuperWeaponKind::Deflectors => stats(100, 50, 10, 3),
        SuperWeaponKind::EmergencyEvasion => stats(100, 50, 2, 3),
    }
}

// --- Pheromone ---

/// Baseline trail strength that decay pulls every cell toward.
pub const TRAIL_BASELINE: f64 = 10.0;

/// Per-round retention factor of the trail decay.
pub const TRAIL_DECAY_RATE: f64 = 0.97;

/// Trail delta over an ant's path when it breaches the enemy headquarters.
pub const TRAIL_SUCCESS_DELTA: f64 = 10.0;

/// Trail delta over an ant's path when its hp is depleted.
pub const TRAIL_FAIL_DELTA: f64 = -5.0;

/// Trail delta over an ant's path when it dies of old age.
pub const TRAIL_TOO_OLD_DELTA: f64 = -3.0;

/// Effective trail strength of an off-map neighbor during move selection.
pub const TRAIL_OFF_MAP: f64 = -10.0;
