// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Move-tree node counting. Since the rules here know nothing of check, these counts diverge
//! from the well-known perft tables after a few plies; they measure this engine against itself.
use rayon::prelude::*;

use crate::board::Board;
use crate::move_generator::{MoveGenerator, MoveVec};

/// Counts the leaves of the move tree `depth` plies below `board`, with the side to move taken
/// from the board. Only the root is searched in parallel.
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = MoveVec::default();
    MoveGenerator::new().generate_moves(board, board.side_to_move(), &mut moves);
    moves
        .par_iter()
        .map(|&mov| {
            let mut child = board.clone();
            child
                .apply_move(mov.source(), mov.destination())
                .expect("generated move has no piece at source");
            perft_serial(&child, depth - 1)
        })
        .sum()
}

fn perft_serial(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut moves = MoveVec::default();
    MoveGenerator::new().generate_moves(board, board.side_to_move(), &mut moves);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|&mov| {
            let mut child = board.clone();
            child
                .apply_move(mov.source(), mov.destination())
                .expect("generated move has no piece at source");
            perft_serial(&child, depth - 1)
        })
        .sum()
}
