//! Codec and framing tests.

use std::io::Cursor;

use antwar_core::commands::Command;
use antwar_core::enums::{AntState, SuperWeaponKind, TowerKind};
use antwar_core::types::Coord;

use crate::codec::{
    read_commands, read_init_info, read_round_info, render_command, render_commands, InitInfo,
    ProtocolError,
};
use crate::framing::frame;

#[test]
fn test_init_line_parses_seat_and_seed() {
    let mut input = Cursor::new("1 281474976710655\n");
    assert_eq!(
        read_init_info(&mut input).unwrap(),
        InitInfo {
            seat: 1,
            seed: 281474976710655,
        }
    );
}

#[test]
fn test_command_lines_render_with_their_arity() {
    let cases = [
        (Command::BuildTower { coord: Coord::new(6, 4) }, "11 6 4"),
        (
            Command::UpgradeTower {
                id: 3,
                kind: TowerKind::MortarPlus,
            },
            "12 3 31",
        ),
        (Command::DowngradeTower { id: 7 }, "13 7"),
        (
            Command::DeploySuperWeapon {
                kind: SuperWeaponKind::LightningStorm,
                coord: Coord::new(9, 9),
            },
            "21 9 9",
        ),
        (
            Command::DeploySuperWeapon {
                kind: SuperWeaponKind::EmergencyEvasion,
                coord: Coord::new(2, 9),
            },
            "24 2 9",
        ),
        (Command::UpgradeSpawnRate, "31"),
        (Command::UpgradeAntHp, "32"),
    ];
    for (command, line) in cases {
        assert_eq!(render_command(&command), line);
    }
}

#[test]
fn test_command_list_round_trips() {
    let commands = vec![
        Command::BuildTower { coord: Coord::new(6, 14) },
        Command::UpgradeTower {
            id: 0,
            kind: TowerKind::Heavy,
        },
        Command::DeploySuperWeapon {
            kind: SuperWeaponKind::Deflectors,
            coord: Coord::new(10, 10),
        },
        Command::UpgradeSpawnRate,
    ];
    let text = render_commands(&commands);
    assert!(text.starts_with("4\n"));
    let mut input = Cursor::new(text);
    assert_eq!(read_commands(&mut input).unwrap(), commands);
}

#[test]
fn test_empty_command_list() {
    assert_eq!(render_commands(&[]), "0\n");
    let mut input = Cursor::new("0\n");
    assert_eq!(read_commands(&mut input).unwrap(), Vec::new());
}

#[test]
fn test_unknown_code_is_rejected() {
    let mut input = Cursor::new("1\n99 1 2\n");
    assert!(matches!(
        read_commands(&mut input),
        Err(ProtocolError::UnknownCommandCode(99))
    ));

    let mut input = Cursor::new("1\n12 0 7\n");
    assert!(matches!(
        read_commands(&mut input),
        Err(ProtocolError::UnknownTowerKind(7))
    ));
}

#[test]
fn test_truncated_input_is_rejected() {
    let mut input = Cursor::new("2\n31\n");
    assert!(matches!(
        read_commands(&mut input),
        Err(ProtocolError::UnexpectedEof)
    ));

    let mut input = Cursor::new("1\n11 6\n");
    assert!(matches!(
        read_commands(&mut input),
        Err(ProtocolError::TruncatedLine)
    ));

    let mut input = Cursor::new("1\neleven\n");
    assert!(matches!(
        read_commands(&mut input),
        Err(ProtocolError::BadInteger(_))
    ));
}

#[test]
fn test_round_info_parses_full_block() {
    let block = "\
3
2
0 0 6 4 1 2
1 1 11 4 0 1
1
4 1 15 9 25 1 6 0
55 43
50 49
";
    let mut input = Cursor::new(block);
    let info = read_round_info(&mut input).unwrap();
    assert_eq!(info.round, 3);
    assert_eq!(info.towers.len(), 2);
    assert_eq!(info.towers[0].kind, TowerKind::Heavy);
    assert_eq!(info.towers[1].coord, Coord::new(11, 4));
    assert_eq!(info.ants.len(), 1);
    let ant = &info.ants[0];
    assert_eq!((ant.id, ant.player), (4, 1));
    assert_eq!(ant.hp, 25);
    assert_eq!(ant.level, 1);
    assert_eq!(ant.age, 6);
    assert_eq!(ant.state, AntState::Alive);
    assert_eq!(info.coin, [55, 43]);
    assert_eq!(info.hq_hp, [50, 49]);
}

#[test]
fn test_frame_prefixes_big_endian_length() {
    assert_eq!(frame(""), vec![0, 0, 0, 0]);
    let framed = frame("1\n31\n");
    assert_eq!(&framed[..4], &[0, 0, 0, 5]);
    assert_eq!(&framed[4..], b"1\n31\n");
}
