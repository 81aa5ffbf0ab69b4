// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A two-player chess rules engine. The `Board` holds 64 cells and the pieces on them, `rules`
//! decides which squares each kind of piece can reach, `validate` turns that into a yes/no for a
//! proposed move, and `Game` applies validated moves and tracks whose turn it is. A `Session`
//! drives a game to completion against any pair of `MoveSource`s.

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod board;
pub mod config;
mod error;
mod game;
mod move_generator;
mod moves;
pub mod notation;
mod paths;
mod perft;
mod piece;
pub mod render;
pub mod rules;
pub mod session;
mod types;
mod validate;

pub use board::{Board, Cell};
pub use config::Config;
pub use error::{Error, PlacementParseError, Result};
pub use game::{Game, GameStatus, Side};
pub use move_generator::{MoveGenerator, MoveVec};
pub use moves::Move;
pub use perft::perft;
pub use piece::{Piece, PieceFlags, PieceId, State};
pub use render::{render, GlyphSet};
pub use session::{MoveSource, Offer, RandomMoveSource, Session, TerminalMoveSource};
pub use types::{Color, Direction, File, PieceKind, Rank, Square};
pub use validate::{check_move, validate, IllegalMove};
