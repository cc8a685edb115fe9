//! The fixed 19x19 battle map: terrain classification and headquarters.

use crate::types::{distance, Coord, Player};

/// Map radius in hex distance from the center cell.
pub const MAP_RADIUS: i32 = 9;

/// Side length of the backing terrain grid.
pub const MAP_SIZE: usize = 19;

/// Center of the map.
pub const MAP_CENTER: Coord = Coord::new(9, 9);

/// Terrain codes, indexed `[x][y]`: 0 open ground, 1 neutral highland,
/// 2 player-0 highland, 3 player-1 highland. Ants walk only on open
/// ground; towers are built only on the owning player's highland.
const TERRAIN: [[u8; MAP_SIZE]; MAP_SIZE] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0],
    [0, 0, 2, 2, 0, 1, 0, 0, 0, 2, 0, 0, 0, 1, 0, 2, 2, 0, 0],
    [0, 0, 0, 2, 0, 0, 2, 2, 0, 2, 0, 2, 2, 0, 0, 2, 0, 0, 0],
    [0, 2, 2, 0, 2, 0, 0, 2, 0, 2, 0, 2, 0, 0, 2, 0, 2, 2, 0],
    [0, 2, 0, 0, 0, 2, 0, 0, 2, 0, 2, 0, 0, 2, 0, 0, 0, 2, 0],
    [0, 0, 2, 0, 2, 0, 0, 2, 0, 0, 0, 2, 0, 0, 2, 0, 2, 0, 0],
    [0, 1, 3, 0, 3, 1, 0, 1, 0, 1, 0, 1, 0, 1, 3, 0, 3, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 3, 3, 0, 3, 3, 0, 0, 0, 0, 0, 0, 0],
    [0, 3, 3, 0, 3, 3, 0, 0, 0, 0, 0, 0, 0, 3, 3, 0, 3, 3, 0],
    [0, 3, 0, 0, 0, 0, 3, 3, 0, 3, 0, 3, 3, 0, 0, 0, 0, 3, 0],
    [0, 0, 3, 3, 0, 0, 0, 3, 0, 3, 0, 3, 0, 0, 0, 3, 3, 0, 0],
    [0, 0, 0, 3, 0, 1, 1, 0, 0, 3, 0, 0, 1, 1, 0, 3, 0, 0, 0],
    [0, 0, 0, 0, 0, 1, 0, 0, 1, 0, 1, 0, 0, 1, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

fn terrain_at(coord: Coord) -> u8 {
    TERRAIN[coord.x as usize][coord.y as usize]
}

/// The headquarters cell of the given player.
pub const fn headquarters(player: Player) -> Coord {
    [Coord::new(2, 9), Coord::new(16, 9)][player]
}

/// Whether the cell lies on the map at all.
pub fn is_in_map(coord: Coord) -> bool {
    distance(coord, MAP_CENTER) <= MAP_RADIUS
}

/// Whether an ant may stand on the cell: on the map and not highland.
pub fn is_passable(coord: Coord) -> bool {
    is_in_map(coord) && terrain_at(coord) == 0
}

/// Whether the cell is highland of any kind.
pub fn is_highland(coord: Coord) -> bool {
    is_in_map(coord) && terrain_at(coord) != 0
}

/// Whether the cell is the given player's own buildable highland.
pub fn is_player_highland(coord: Coord, player: Player) -> bool {
    is_in_map(coord) && terrain_at(coord) == player as u8 + 2
}
