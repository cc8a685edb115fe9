//! Combat phases: lightning storms, then towers in creation order.

use antwar_core::constants::{tower_stats, ANT_KILL_BOUNTY, STORM_DAMAGE};
use antwar_core::enums::{AntState, SuperWeaponKind, TowerKind};
use antwar_core::events::RoundEvent;
use antwar_core::types::{distance, opponent, Coord, Player};

use crate::state::GameState;

/// Phase 1: every active lightning storm burns each enemy ant in range
/// for a flat amount and pays the ant's bounty to the storm owner at
/// once. Evasion charges and deflectors do not apply, and the ant's
/// state is left untouched.
pub fn run_storms(state: &mut GameState, _events: &mut Vec<RoundEvent>) {
    let storms: Vec<(Player, Coord, i32)> = state
        .active_weapons
        .iter()
        .filter(|sw| sw.kind == SuperWeaponKind::LightningStorm)
        .map(|sw| (sw.player, sw.coord, sw.stats().radius))
        .collect();

    for (owner, center, radius) in storms {
        for ant in state.ants.iter_mut().filter(|ant| {
            ant.hp > 0 && ant.player != owner && distance(ant.coord, center) <= radius
        }) {
            ant.hp -= STORM_DAMAGE;
            state.coin[opponent(ant.player)] += ANT_KILL_BOUNTY[ant.level];
        }
    }
}

/// Phase 2: towers act in creation order. A tower under enemy EMP
/// coverage is skipped without even ticking its cooldown; otherwise the
/// cooldown ticks down and the tower fires when it reaches zero and a
/// target is in range.
pub fn run_towers(state: &mut GameState, events: &mut Vec<RoundEvent>) {
    for idx in 0..state.towers.len() {
        let (player, coord) = {
            let tower = &state.towers[idx];
            (tower.player, tower.coord)
        };
        if state.in_enemy_emp(player, coord) {
            continue;
        }
        if state.towers[idx].cooldown > 0 {
            state.towers[idx].cooldown -= 1;
        }
        if state.towers[idx].cooldown > 0 {
            continue;
        }

        let kind = state.towers[idx].kind;
        let stats = tower_stats(kind);
        let Some(target) = acquire_target(state, player, coord, stats.range, None) else {
            continue;
        };
        state.towers[idx].reset_cooldown();

        match kind {
            // Fires twice; the second shot re-searches and may strike the
            // same ant again if it survived.
            TowerKind::QuickPlus => {
                hit_ant(state, target, stats.damage, events);
                if let Some(next) = acquire_target(state, player, coord, stats.range, None) {
                    hit_ant(state, next, stats.damage, events);
                }
            }
            // Fires twice at two distinct targets.
            TowerKind::Double => {
                let first_id = state.ants[target].id;
                hit_ant(state, target, stats.damage, events);
                if let Some(next) =
                    acquire_target(state, player, coord, stats.range, Some(first_id))
                {
                    hit_ant(state, next, stats.damage, events);
                }
            }
            // Splashes around the tower itself, over its whole range.
            TowerKind::Pulse => {
                splash(state, player, coord, stats.range, stats.damage, events);
            }
            _ if stats.aoe == 0 => {
                // Freeze lands before the damage, so a lethal hit overrides
                // Frozen with Fail.
                if kind == TowerKind::Ice {
                    state.ants[target].state = AntState::Frozen;
                }
                hit_ant(state, target, stats.damage, events);
            }
            // Splashes around the acquired target's cell.
            _ => {
                let center = state.ants[target].coord;
                splash(state, player, center, stats.aoe, stats.damage, events);
            }
        }
    }
}

/// Targeting: the nearest enemy ant with hp > 0 within range, ties broken
/// by smallest id. `skip` excludes one ant id from the search.
fn acquire_target(
    state: &GameState,
    player: Player,
    coord: Coord,
    range: i32,
    skip: Option<u32>,
) -> Option<usize> {
    let mut target: Option<usize> = None;
    let mut min_dist = 0;
    for (idx, ant) in state.ants.iter().enumerate() {
        let dist = distance(coord, ant.coord);
        if ant.player == player || dist > range || Some(ant.id) == skip || ant.hp <= 0 {
            continue;
        }
        let better = match target {
            None => true,
            Some(best) => {
                dist < min_dist || (dist == min_dist && ant.id < state.ants[best].id)
            }
        };
        if better {
            target = Some(idx);
            min_dist = dist;
        }
    }
    target
}

/// The shared damage primitive. An evasion charge negates the whole hit;
/// failing that, an own-side deflector zone negates any hit weaker than
/// half the ant's max hp; otherwise the damage lands, and a kill pays the
/// attacker's side the ant's level bounty.
fn hit_ant(state: &mut GameState, idx: usize, damage: i32, events: &mut Vec<RoundEvent>) {
    if state.ants[idx].evasion > 0 {
        state.ants[idx].evasion -= 1;
        return;
    }
    let (player, coord, max_hp) = {
        let ant = &state.ants[idx];
        (ant.player, ant.coord, ant.max_hp)
    };
    if (damage as f64) < max_hp as f64 / 2.0 && state.in_own_deflector(player, coord) {
        return;
    }
    state.ants[idx].hp -= damage;
    if state.ants[idx].hp <= 0 {
        state.ants[idx].state = AntState::Fail;
        let bounty = ANT_KILL_BOUNTY[state.ants[idx].level];
        state.coin[opponent(player)] += bounty;
        events.push(RoundEvent::AntKilled {
            ant: state.ants[idx].id,
            player,
            bounty,
        });
    }
}

/// Apply `damage` to every enemy ant with hp > 0 within `radius` of
/// `center`, through the shared damage primitive.
fn splash(
    state: &mut GameState,
    player: Player,
    center: Coord,
    radius: i32,
    damage: i32,
    events: &mut Vec<RoundEvent>,
) {
    let struck: Vec<usize> = state
        .ants
        .iter()
        .enumerate()
        .filter(|(_, ant)| {
            ant.player != player && ant.hp > 0 && distance(ant.coord, center) <= radius
        })
        .map(|(idx, _)| idx)
        .collect();
    for idx in struck {
        hit_ant(state, idx, damage, events);
    }
}
