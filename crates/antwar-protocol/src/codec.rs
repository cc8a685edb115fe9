//! Line codec for the judge protocol.
//!
//! Commands travel as numeric codes with zero to two arguments; lists are
//! count-prefixed, one entry per line. Everything parses into the typed
//! forms from `antwar-core`, and every malformed input comes back as a
//! `ProtocolError` value.

use std::io::{self, BufRead};

use thiserror::Error;

use antwar_core::commands::Command;
use antwar_core::enums::{AntState, SuperWeaponKind, TowerKind};
use antwar_core::state::{AntView, TowerView};
use antwar_core::types::Coord;

/// Numeric command codes on the wire.
const CODE_BUILD: i64 = 11;
const CODE_UPGRADE: i64 = 12;
const CODE_DOWNGRADE: i64 = 13;
/// Deploy codes are 20 plus the weapon kind's own code (1..=4).
const CODE_DEPLOY_BASE: i64 = 20;
const CODE_UPGRADE_SPAWN_RATE: i64 = 31;
const CODE_UPGRADE_ANT_HP: i64 = 32;

/// Why a judge message could not be decoded.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("read failed: {0}")]
    Io(#[from] io::Error),
    #[error("input ended mid-message")]
    UnexpectedEof,
    #[error("not an integer: {0:?}")]
    BadInteger(String),
    #[error("line has fewer fields than its code requires")]
    TruncatedLine,
    #[error("unknown command code {0}")]
    UnknownCommandCode(i64),
    #[error("unknown tower kind code {0}")]
    UnknownTowerKind(i64),
    #[error("unknown ant state code {0}")]
    UnknownAntState(i64),
}

/// Match setup sent once before the first round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitInfo {
    /// This player's seat: 0 moves first.
    pub seat: usize,
    /// Pheromone seed shared by both sides.
    pub seed: u64,
}

/// The judge's authoritative post-round snapshot. Ants arrive without
/// their path history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundInfo {
    pub round: u32,
    pub towers: Vec<TowerView>,
    pub ants: Vec<AntView>,
    pub coin: [i32; 2],
    pub hq_hp: [i32; 2],
}

// ---- Reading ----

fn read_ints<R: BufRead>(input: &mut R) -> Result<Vec<i64>, ProtocolError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ProtocolError::UnexpectedEof);
    }
    line.split_whitespace()
        .map(|token| {
            token
                .parse()
                .map_err(|_| ProtocolError::BadInteger(token.to_string()))
        })
        .collect()
}

fn field(parts: &[i64], index: usize) -> Result<i64, ProtocolError> {
    parts.get(index).copied().ok_or(ProtocolError::TruncatedLine)
}

fn read_count<R: BufRead>(input: &mut R) -> Result<usize, ProtocolError> {
    let parts = read_ints(input)?;
    Ok(field(&parts, 0)? as usize)
}

/// Parse the "seat seed" init line.
pub fn read_init_info<R: BufRead>(input: &mut R) -> Result<InitInfo, ProtocolError> {
    let parts = read_ints(input)?;
    Ok(InitInfo {
        seat: field(&parts, 0)? as usize,
        seed: field(&parts, 1)? as u64,
    })
}

fn read_command<R: BufRead>(input: &mut R) -> Result<Command, ProtocolError> {
    let parts = read_ints(input)?;
    let code = field(&parts, 0)?;
    let command = match code {
        CODE_BUILD => Command::BuildTower {
            coord: Coord::new(field(&parts, 1)? as i32, field(&parts, 2)? as i32),
        },
        CODE_UPGRADE => {
            let raw = field(&parts, 2)?;
            let kind = TowerKind::from_code(raw as u32)
                .ok_or(ProtocolError::UnknownTowerKind(raw))?;
            Command::UpgradeTower {
                id: field(&parts, 1)? as u32,
                kind,
            }
        }
        CODE_DOWNGRADE => Command::DowngradeTower {
            id: field(&parts, 1)? as u32,
        },
        CODE_UPGRADE_SPAWN_RATE => Command::UpgradeSpawnRate,
        CODE_UPGRADE_ANT_HP => Command::UpgradeAntHp,
        other => {
            let kind = SuperWeaponKind::from_code((other - CODE_DEPLOY_BASE) as u32)
                .ok_or(ProtocolError::UnknownCommandCode(other))?;
            Command::DeploySuperWeapon {
                kind,
                coord: Coord::new(field(&parts, 1)? as i32, field(&parts, 2)? as i32),
            }
        }
    };
    Ok(command)
}

/// Parse a count-prefixed command list, such as the opponent's moves.
pub fn read_commands<R: BufRead>(input: &mut R) -> Result<Vec<Command>, ProtocolError> {
    let count = read_count(input)?;
    (0..count).map(|_| read_command(input)).collect()
}

fn read_tower<R: BufRead>(input: &mut R) -> Result<TowerView, ProtocolError> {
    let parts = read_ints(input)?;
    let raw = field(&parts, 4)?;
    Ok(TowerView {
        id: field(&parts, 0)? as u32,
        player: field(&parts, 1)? as usize,
        coord: Coord::new(field(&parts, 2)? as i32, field(&parts, 3)? as i32),
        kind: TowerKind::from_code(raw as u32).ok_or(ProtocolError::UnknownTowerKind(raw))?,
        cooldown: field(&parts, 5)? as u32,
    })
}

fn read_ant<R: BufRead>(input: &mut R) -> Result<AntView, ProtocolError> {
    let parts = read_ints(input)?;
    let raw = field(&parts, 7)?;
    Ok(AntView {
        id: field(&parts, 0)? as u32,
        player: field(&parts, 1)? as usize,
        coord: Coord::new(field(&parts, 2)? as i32, field(&parts, 3)? as i32),
        hp: field(&parts, 4)? as i32,
        level: field(&parts, 5)? as usize,
        age: field(&parts, 6)? as u32,
        state: AntState::from_code(raw as u32).ok_or(ProtocolError::UnknownAntState(raw))?,
    })
}

/// Parse the judge's post-round snapshot: round, count-prefixed tower and
/// ant lists, then the coin and headquarters-hp pairs.
pub fn read_round_info<R: BufRead>(input: &mut R) -> Result<RoundInfo, ProtocolError> {
    let round = read_count(input)? as u32;
    let towers = (0..read_count(input)?)
        .map(|_| read_tower(input))
        .collect::<Result<_, _>>()?;
    let ants = (0..read_count(input)?)
        .map(|_| read_ant(input))
        .collect::<Result<_, _>>()?;
    let coin = read_ints(input)?;
    let hq_hp = read_ints(input)?;
    Ok(RoundInfo {
        round,
        towers,
        ants,
        coin: [field(&coin, 0)? as i32, field(&coin, 1)? as i32],
        hq_hp: [field(&hq_hp, 0)? as i32, field(&hq_hp, 1)? as i32],
    })
}

// ---- Rendering ----

/// Render one command as its wire line, arguments included only where the
/// code takes them.
pub fn render_command(command: &Command) -> String {
    match *command {
        Command::BuildTower { coord } => format!("{CODE_BUILD} {} {}", coord.x, coord.y),
        Command::UpgradeTower { id, kind } => format!("{CODE_UPGRADE} {id} {}", kind.code()),
        Command::DowngradeTower { id } => format!("{CODE_DOWNGRADE} {id}"),
        Command::DeploySuperWeapon { kind, coord } => format!(
            "{} {} {}",
            CODE_DEPLOY_BASE + kind.code() as i64,
            coord.x,
            coord.y
        ),
        Command::UpgradeSpawnRate => CODE_UPGRADE_SPAWN_RATE.to_string(),
        Command::UpgradeAntHp => CODE_UPGRADE_ANT_HP.to_string(),
    }
}

/// Render a command list as the judge expects it: a count line, then one
/// line per command, each newline-terminated.
pub fn render_commands(commands: &[Command]) -> String {
    let mut out = format!("{}\n", commands.len());
    for command in commands {
        out.push_str(&render_command(command));
        out.push('\n');
    }
    out
}
