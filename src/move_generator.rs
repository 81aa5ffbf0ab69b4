// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Enumeration of legal moves. A move is generated exactly when the validator would accept it,
//! so the generator is a brute-force scan of candidate destinations rather than a separate
//! implementation of the movement rules.
use crate::board::Board;
use crate::moves::Move;
use crate::types::{Color, Square, SQUARES};
use crate::validate;

pub type MoveVec = Vec<Move>;

#[derive(Default)]
pub struct MoveGenerator;

impl MoveGenerator {
    pub fn new() -> MoveGenerator {
        MoveGenerator
    }

    /// Pushes every legal move for `side` onto `moves`, ordered by source square and then by
    /// destination square.
    pub fn generate_moves(&self, board: &Board, side: Color, moves: &mut MoveVec) {
        for (source, _) in board.pieces_of(side) {
            self.generate_moves_from(board, side, source, moves);
        }
    }

    /// Pushes every legal move of the piece on `source` onto `moves`. Nothing is generated when
    /// the square is empty or holds a piece that `side` does not own.
    pub fn generate_moves_from(
        &self,
        board: &Board,
        side: Color,
        source: Square,
        moves: &mut MoveVec,
    ) {
        for &dest in SQUARES.iter() {
            if validate::check_move(board, side, source, dest).is_ok() {
                moves.push(Move::new(source, dest));
            }
        }
    }

    /// Convenience wrapper returning the legal destinations of the piece on `source`, played by
    /// whichever side owns it.
    pub fn destinations(&self, board: &Board, source: Square) -> Vec<Square> {
        let side = match board.piece_at(source) {
            Some(piece) => piece.color,
            None => return vec![],
        };

        let mut moves = MoveVec::new();
        self.generate_moves_from(board, side, source, &mut moves);
        moves.into_iter().map(|m| m.destination()).collect()
    }
}
