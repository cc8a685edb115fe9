//! Per-player pheromone fields and the trail-following move selection.
//!
//! The field completely controls ant movement, so its initialization must
//! be bit-for-bit reproducible across SDKs: both grids are filled from one
//! advancing linear congruential generator seeded by the judge.

use std::collections::HashSet;

use antwar_core::constants::{
    TRAIL_BASELINE, TRAIL_DECAY_RATE, TRAIL_OFF_MAP,
};
use antwar_core::entities::Ant;
use antwar_core::map::{self, MAP_SIZE};
use antwar_core::types::{distance, neighbor, opponent, Coord, DIRECTION_COUNT};

/// Multiplier of the LCG mandated by the rules (same as `java.util.Random`).
const LCG_MULTIPLIER: u64 = 25214903917;

/// The generator state is kept modulo 2^48.
const LCG_MASK: u64 = (1 << 48) - 1;

/// The mandated pheromone-seeding generator. Each draw advances the state
/// by one multiplication modulo 2^48 and returns the new state.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed & LCG_MASK,
        }
    }

    pub fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(LCG_MULTIPLIER) & LCG_MASK;
        self.state
    }
}

/// One player's 19x19 grid of trail strengths. Values never go negative.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneField {
    values: [[f64; MAP_SIZE]; MAP_SIZE],
}

impl PheromoneField {
    /// Fill a fresh grid in row-major order from the shared generator.
    fn generate(lcg: &mut Lcg) -> Self {
        let mut values = [[0.0; MAP_SIZE]; MAP_SIZE];
        for row in values.iter_mut() {
            for cell in row.iter_mut() {
                *cell = lcg.next() as f64 * 2f64.powi(-46) + 8.0;
            }
        }
        Self { values }
    }

    pub fn get(&self, coord: Coord) -> f64 {
        self.values[coord.x as usize][coord.y as usize]
    }

    /// Pull every cell toward the baseline: tau' = lambda*tau + (1-lambda)*tau0.
    pub fn decay(&mut self) {
        for row in self.values.iter_mut() {
            for cell in row.iter_mut() {
                *cell = TRAIL_DECAY_RATE * *cell + (1.0 - TRAIL_DECAY_RATE) * TRAIL_BASELINE;
            }
        }
    }

    /// Apply `delta` once to every distinct cell of the path, clamping each
    /// result at zero. Revisited cells count once.
    pub fn reinforce_path(&mut self, path: &[Coord], delta: f64) {
        let distinct: HashSet<Coord> = path.iter().copied().collect();
        for coord in distinct {
            let cell = &mut self.values[coord.x as usize][coord.y as usize];
            *cell = (*cell + delta).max(0.0);
        }
    }

    /// Trail strength of the six neighbor cells; off-map neighbors score
    /// far below anything reachable.
    fn neighbor_trail(&self, coord: Coord) -> [f64; DIRECTION_COUNT] {
        let mut tau = [0.0; DIRECTION_COUNT];
        for (dir, value) in tau.iter_mut().enumerate() {
            let c = neighbor(coord, dir);
            *value = if map::is_in_map(c) { self.get(c) } else { TRAIL_OFF_MAP };
        }
        tau
    }

    /// Goal bias of the six directions: 1.25 when the step closes distance
    /// to `target`, 1.00 when it keeps it, 0.75 when it opens it.
    fn neighbor_bias(coord: Coord, target: Coord) -> [f64; DIRECTION_COUNT] {
        let here = distance(coord, target);
        let mut eta = [0.0; DIRECTION_COUNT];
        for (dir, value) in eta.iter_mut().enumerate() {
            let delta = distance(neighbor(coord, dir), target) - here;
            *value = [1.25, 1.00, 0.75][(delta + 1) as usize];
        }
        eta
    }

    /// Pick the move direction for `ant`: maximize tau*eta over the valid
    /// directions, where a direction is valid if its cell is passable and
    /// not the cell the ant just came from. Exact ties prefer the larger
    /// raw tau, then the earliest direction.
    pub fn next_direction(&self, ant: &Ant) -> usize {
        let last_pos = if ant.path.len() > 1 {
            ant.path[ant.path.len() - 2]
        } else {
            ant.coord
        };
        let tau = self.neighbor_trail(ant.coord);
        let eta = Self::neighbor_bias(ant.coord, map::headquarters(opponent(ant.player)));

        let mut best_dir = 0;
        let mut best_score = -1000.0;
        for dir in 0..DIRECTION_COUNT {
            let cell = neighbor(ant.coord, dir);
            if !map::is_passable(cell) || cell == last_pos {
                continue;
            }
            let score = tau[dir] * eta[dir];
            if score > best_score || (score == best_score && tau[dir] > tau[best_dir]) {
                best_dir = dir;
                best_score = score;
            }
        }
        best_dir
    }

    /// Row-major copy of the grid, for snapshots.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.values.iter().map(|row| row.to_vec()).collect()
    }
}

/// Generate both players' initial fields from one seed: player 0's grid is
/// drawn completely before player 1's continues the same generator.
pub fn generate_fields(seed: u64) -> [PheromoneField; 2] {
    let mut lcg = Lcg::new(seed);
    let first = PheromoneField::generate(&mut lcg);
    let second = PheromoneField::generate(&mut lcg);
    [first, second]
}
