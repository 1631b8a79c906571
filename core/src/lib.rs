//! Text-board Minesweeper engine.
//!
//! Boards are validated once by [`BoardBuilder`] and never change afterwards, a [`Game`] holds
//! the current snapshot and swaps in a new one on every move.

#![no_std]

extern crate alloc;

pub use board::*;
pub use builder::*;
pub use error::*;
pub use game::*;
pub use loader::*;
pub use row::*;
pub use tile::*;
pub use types::*;

mod board;
mod builder;
mod error;
mod game;
mod loader;
mod row;
mod tile;
mod types;
