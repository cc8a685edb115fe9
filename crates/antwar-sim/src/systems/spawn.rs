//! Phase 6: headquarters spawn new ants on their interval.

use antwar_core::constants::ANT_SPAWN_INTERVAL;
use antwar_core::entities::Ant;
use antwar_core::events::RoundEvent;
use antwar_core::map;

use crate::state::GameState;

/// Each player spawns one ant at their headquarters whenever the round
/// number is divisible by the spawn interval of their current spawn-speed
/// level. The ant's hp level is the player's current max-hp level.
pub fn run(state: &mut GameState, events: &mut Vec<RoundEvent>) {
    for player in 0..2 {
        let interval = ANT_SPAWN_INTERVAL[state.spawn_level[player]];
        if state.round % interval != 0 {
            continue;
        }
        let id = state.next_ant_id;
        state.next_ant_id += 1;
        let coord = map::headquarters(player);
        state
            .ants
            .push(Ant::spawn(id, player, state.hp_level[player], coord));
        events.push(RoundEvent::AntSpawned {
            ant: id,
            player,
            coord,
        });
    }
}
