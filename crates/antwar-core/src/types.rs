//! Fundamental coordinate and player types.

use serde::{Deserialize, Serialize};

/// Player seat index. Always 0 (first mover) or 1.
pub type Player = usize;

/// The opposing seat.
pub const fn opponent(player: Player) -> Player {
    1 - player
}

/// A cell on the hex map, in the odd-row offset layout.
///
/// `x` selects the row and `y` the column of the backing 19x19 grid;
/// which of the two neighbor delta tables applies depends on the parity
/// of `y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Offsets of the six hex directions, indexed by row parity (`y mod 2`).
/// Directions 0..6 are: upper-right, up, upper-left, lower-left, down,
/// lower-right.
const NEIGHBOR_DELTA: [[(i32, i32); 6]; 2] = [
    [(0, 1), (-1, 0), (0, -1), (1, -1), (1, 0), (1, 1)],
    [(-1, 1), (-1, 0), (-1, -1), (0, -1), (1, 0), (0, 1)],
];

/// Number of hex directions.
pub const DIRECTION_COUNT: usize = 6;

/// The adjacent cell in the given direction (0..6).
pub fn neighbor(coord: Coord, direction: usize) -> Coord {
    let (dx, dy) = NEIGHBOR_DELTA[coord.y.rem_euclid(2) as usize][direction];
    Coord::new(coord.x + dx, coord.y + dy)
}

/// Hex distance between two cells: offset coordinates are converted to
/// axial and measured with the axial Manhattan metric.
pub fn distance(a: Coord, b: Coord) -> i32 {
    fn to_axial(c: Coord) -> (i32, i32) {
        // (y + (y & 1)) is always even, so truncating division is exact.
        (c.y, c.x - (c.y + (c.y & 1)) / 2)
    }

    let (aq, ar) = to_axial(a);
    let (bq, br) = to_axial(b);
    ((aq - bq).abs() + (aq + ar - bq - br).abs() + (ar - br).abs()) / 2
}
