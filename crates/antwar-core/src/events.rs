//! Events emitted by the engine while resolving a round.

use serde::{Deserialize, Serialize};

use crate::types::{Coord, Player};

/// Something observable that happened during round resolution. Collected
/// in resolution order and handed to the caller after each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// An ant ran out of hp; its killer's side collected the bounty.
    AntKilled {
        ant: u32,
        player: Player,
        bounty: i32,
    },
    /// An ant exceeded the maximum lifetime.
    AntExpired { ant: u32, player: Player },
    /// An ant stepped onto the enemy headquarters.
    HeadquartersBreached {
        ant: u32,
        player: Player,
        /// The side whose headquarters lost a hit point.
        defender: Player,
    },
    /// A new ant emerged at its owner's headquarters.
    AntSpawned {
        ant: u32,
        player: Player,
        coord: Coord,
    },
}
