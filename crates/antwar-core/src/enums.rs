//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Lifecycle state of an ant. `Alive` is the only non-terminal state;
/// `Frozen` reverts to `Alive` at end of round, the rest are pruned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AntState {
    /// Marching toward the enemy headquarters.
    #[default]
    Alive,
    /// Reached the enemy headquarters this round.
    Success,
    /// Hp depleted this round.
    Fail,
    /// Exceeded the maximum lifetime this round.
    TooOld,
    /// Hit by an ice tower; skips one round of movement.
    Frozen,
}

impl AntState {
    /// Numeric code used on the wire and in replay dumps.
    pub const fn code(self) -> u32 {
        match self {
            AntState::Alive => 0,
            AntState::Success => 1,
            AntState::Fail => 2,
            AntState::TooOld => 3,
            AntState::Frozen => 4,
        }
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(AntState::Alive),
            1 => Some(AntState::Success),
            2 => Some(AntState::Fail),
            3 => Some(AntState::TooOld),
            4 => Some(AntState::Frozen),
            _ => None,
        }
    }
}

/// Tower variant. The numeric codes encode the upgrade graph: a kind with
/// code `c` upgrades exactly to the kinds with codes `c * 10 + k`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    #[default]
    Basic,
    Heavy,
    HeavyPlus,
    Ice,
    Cannon,
    Quick,
    QuickPlus,
    Double,
    Sniper,
    Mortar,
    MortarPlus,
    Pulse,
    Missile,
}

impl TowerKind {
    pub const ALL: [TowerKind; 13] = [
        TowerKind::Basic,
        TowerKind::Heavy,
        TowerKind::HeavyPlus,
        TowerKind::Ice,
        TowerKind::Cannon,
        TowerKind::Quick,
        TowerKind::QuickPlus,
        TowerKind::Double,
        TowerKind::Sniper,
        TowerKind::Mortar,
        TowerKind::MortarPlus,
        TowerKind::Pulse,
        TowerKind::Missile,
    ];

    /// Numeric type id, as used on the wire and in the upgrade graph.
    pub const fn code(self) -> u32 {
        match self {
            TowerKind::Basic => 0,
            TowerKind::Heavy => 1,
            TowerKind::HeavyPlus => 11,
            TowerKind::Ice => 12,
            TowerKind::Cannon => 13,
            TowerKind::Quick => 2,
            TowerKind::QuickPlus => 21,
            TowerKind::Double => 22,
            TowerKind::Sniper => 23,
            TowerKind::Mortar => 3,
            TowerKind::MortarPlus => 31,
            TowerKind::Pulse => 32,
            TowerKind::Missile => 33,
        }
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(TowerKind::Basic),
            1 => Some(TowerKind::Heavy),
            11 => Some(TowerKind::HeavyPlus),
            12 => Some(TowerKind::Ice),
            13 => Some(TowerKind::Cannon),
            2 => Some(TowerKind::Quick),
            21 => Some(TowerKind::QuickPlus),
            22 => Some(TowerKind::Double),
            23 => Some(TowerKind::Sniper),
            3 => Some(TowerKind::Mortar),
            31 => Some(TowerKind::MortarPlus),
            32 => Some(TowerKind::Pulse),
            33 => Some(TowerKind::Missile),
            _ => None,
        }
    }

    /// Whether this kind may upgrade directly to `target`.
    pub const fn can_upgrade_to(self, target: TowerKind) -> bool {
        !matches!(target, TowerKind::Basic) && self.code() == target.code() / 10
    }

    /// The kind one step down the upgrade graph, or `None` for `Basic`
    /// (downgrading a basic tower demolishes it).
    pub const fn downgraded(self) -> Option<Self> {
        match self {
            TowerKind::Basic => None,
            other => TowerKind::from_code(other.code() / 10),
        }
    }
}

/// Super weapon variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuperWeaponKind {
    /// Standing area effect: massive damage to enemy ants each round.
    LightningStorm,
    /// Standing area effect: enemy towers in range neither fire nor may
    /// be built, upgraded, or downgraded.
    EmpBlaster,
    /// Standing area effect: own ants in range shrug off sub-half-hp hits.
    Deflectors,
    /// Instant: grants evasion charges to own ants in range.
    EmergencyEvasion,
}

impl SuperWeaponKind {
    pub const ALL: [SuperWeaponKind; 4] = [
        SuperWeaponKind::LightningStorm,
        SuperWeaponKind::EmpBlaster,
        SuperWeaponKind::Deflectors,
        SuperWeaponKind::EmergencyEvasion,
    ];

    /// Numeric type id, as used on the wire.
    pub const fn code(self) -> u32 {
        match self {
            SuperWeaponKind::LightningStorm => 1,
            SuperWeaponKind::EmpBlaster => 2,
            SuperWeaponKind::Deflectors => 3,
            SuperWeaponKind::EmergencyEvasion => 4,
        }
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(SuperWeaponKind::LightningStorm),
            2 => Some(SuperWeaponKind::EmpBlaster),
            3 => Some(SuperWeaponKind::Deflectors),
            4 => Some(SuperWeaponKind::EmergencyEvasion),
            _ => None,
        }
    }

    /// Index into the per-player cooldown table.
    pub const fn cooldown_slot(self) -> usize {
        self.code() as usize - 1
    }
}
