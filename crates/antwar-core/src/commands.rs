//! Player commands submitted to the simulation.
//!
//! One command mutates at most one entity or counter. Validation and
//! application share a single legality predicate in the engine, so a
//! command that checks as valid can always be committed.

use serde::{Deserialize, Serialize};

use crate::enums::{SuperWeaponKind, TowerKind};
use crate::types::Coord;

/// All player actions. The four super weapon deploys share one variant;
/// the wire protocol assigns each kind its own numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    /// Build a basic tower on an own highland cell.
    BuildTower { coord: Coord },
    /// Upgrade an owned tower one step along the upgrade graph.
    UpgradeTower { id: u32, kind: TowerKind },
    /// Downgrade an owned tower one step; a basic tower is demolished.
    DowngradeTower { id: u32 },
    /// Deploy a super weapon centered on the given cell.
    DeploySuperWeapon { kind: SuperWeaponKind, coord: Coord },
    /// Raise the headquarters ant spawn rate one level.
    UpgradeSpawnRate,
    /// Raise the max hp of newly spawned ants one level.
    UpgradeAntHp,
}
