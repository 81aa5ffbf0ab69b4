// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::board::Board;
use crate::rules;
use crate::types::{Color, Square};

/// The first reason a proposed move was turned down. Illegal moves are an ordinary outcome,
/// not an error: the driver is expected to ask for another move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    /// There is no piece on the start square.
    EmptySource,
    /// The piece on the start square belongs to the other side.
    NotYourPiece,
    /// Start and end are the same square.
    NullMove,
    /// The end square holds one of the mover's own pieces.
    SelfCapture,
    /// The piece cannot travel from start to end.
    Unreachable,
    /// The game has already ended.
    GameOver,
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match self {
            IllegalMove::EmptySource => "there is no piece there",
            IllegalMove::NotYourPiece => "that piece belongs to your opponent",
            IllegalMove::NullMove => "a piece has to move somewhere",
            IllegalMove::SelfCapture => "you cannot capture your own piece",
            IllegalMove::Unreachable => "that piece cannot move there",
            IllegalMove::GameOver => "the game is over",
        };
        f.write_str(msg)
    }
}

/// Checks a proposed move for `side`, reporting why it was rejected.
pub fn check_move(
    board: &Board,
    side: Color,
    start: Square,
    end: Square,
) -> Result<(), IllegalMove> {
    let piece = board.piece_at(start).ok_or(IllegalMove::EmptySource)?;
    if piece.color != side {
        return Err(IllegalMove::NotYourPiece);
    }

    if start == end {
        return Err(IllegalMove::NullMove);
    }

    if let Some(target) = board.piece_at(end) {
        if target.color == side {
            return Err(IllegalMove::SelfCapture);
        }
    }

    if !rules::can_reach(board, start, end) {
        return Err(IllegalMove::Unreachable);
    }

    Ok(())
}

/// Move legality test. Returns true if `side` may move the piece on `start` to `end`.
pub fn validate(board: &Board, side: Color, start: Square, end: Square) -> bool {
    match check_move(board, side, start, end) {
        Ok(()) => true,
        Err(reason) => {
            debug!("rejected {}{} for {}: {:?}", start, end, side.name(), reason);
            false
        }
    }
}
