//! Judge-facing wire boundary.
//!
//! The judge speaks a line-oriented text protocol wrapped in a 4-byte
//! big-endian length framing. This crate maps those lines to and from the
//! typed `Command` and view types; it never touches the network itself,
//! callers hand in any `BufRead`/byte sink they like.

pub mod codec;
pub mod framing;

pub use codec::{
    read_commands, read_init_info, read_round_info, render_command, render_commands, InitInfo,
    ProtocolError, RoundInfo,
};
pub use framing::frame;

#[cfg(test)]
mod tests;
