//! Phase 5: pheromone decay, then path feedback for resolved ants.

use antwar_core::constants::{TRAIL_FAIL_DELTA, TRAIL_SUCCESS_DELTA, TRAIL_TOO_OLD_DELTA};
use antwar_core::enums::AntState;

use crate::state::GameState;

/// Both fields decay toward the baseline, then every ant resolved this
/// round reinforces its own side's field over the distinct cells of its
/// path. Frozen and still-marching ants leave no feedback.
pub fn run(state: &mut GameState) {
    let GameState { ants, fields, .. } = state;
    for field in fields.iter_mut() {
        field.decay();
    }
    for ant in ants.iter() {
        let delta = match ant.state {
            AntState::Success => TRAIL_SUCCESS_DELTA,
            AntState::Fail => TRAIL_FAIL_DELTA,
            AntState::TooOld => TRAIL_TOO_OLD_DELTA,
            AntState::Alive | AntState::Frozen => continue,
        };
        fields[ant.player].reinforce_path(&ant.path, delta);
    }
}
