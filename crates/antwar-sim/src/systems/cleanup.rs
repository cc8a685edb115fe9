//! Phase 7: end-of-round housekeeping.

use antwar_core::constants::ROUND_INCOME;
use antwar_core::enums::AntState;

use crate::state::GameState;

/// Close out the round: advance the counter, pay the round income, thaw
/// frozen ants, prune every ant that resolved, age the survivors, and
/// tick down super weapon durations and deploy cooldowns.
pub fn run(state: &mut GameState) {
    state.round += 1;
    for coin in state.coin.iter_mut() {
        *coin += ROUND_INCOME;
    }

    for ant in state.ants.iter_mut() {
        if ant.state == AntState::Frozen {
            ant.state = AntState::Alive;
        }
    }
    state.ants.retain(|ant| ant.state == AntState::Alive);
    for ant in state.ants.iter_mut() {
        ant.age += 1;
    }

    for sw in state.active_weapons.iter_mut() {
        sw.duration -= 1;
    }
    state.active_weapons.retain(|sw| sw.duration > 0);

    for cooldowns in state.weapon_cooldowns.iter_mut() {
        for cd in cooldowns.iter_mut() {
            *cd = cd.saturating_sub(1);
        }
    }
}
