//! Aging and movement phases.

use antwar_core::constants::ANT_MAX_AGE;
use antwar_core::enums::AntState;
use antwar_core::events::RoundEvent;
use antwar_core::map;
use antwar_core::types::{neighbor, opponent};

use crate::state::GameState;

/// Phase 3: ants past the maximum lifetime fade out instead of moving.
pub fn run_aging(state: &mut GameState, events: &mut Vec<RoundEvent>) {
    for ant in state
        .ants
        .iter_mut()
        .filter(|ant| ant.hp > 0 && ant.age > ANT_MAX_AGE)
    {
        ant.state = AntState::TooOld;
        events.push(RoundEvent::AntExpired {
            ant: ant.id,
            player: ant.player,
        });
    }
}

/// Phase 4: every ant still Alive takes one step chosen by its own side's
/// pheromone field. Landing on the enemy headquarters scores a breach.
pub fn run(state: &mut GameState, events: &mut Vec<RoundEvent>) {
    for idx in 0..state.ants.len() {
        if state.ants[idx].state != AntState::Alive {
            continue;
        }
        let direction = {
            let ant = &state.ants[idx];
            state.fields[ant.player].next_direction(ant)
        };
        let ant = &mut state.ants[idx];
        let new_coord = neighbor(ant.coord, direction);
        ant.coord = new_coord;
        ant.path.push(new_coord);

        let defender = opponent(ant.player);
        if new_coord == map::headquarters(defender) {
            ant.state = AntState::Success;
            events.push(RoundEvent::HeadquartersBreached {
                ant: ant.id,
                player: ant.player,
                defender,
            });
            state.hq_hp[defender] -= 1;
        }
    }
}
