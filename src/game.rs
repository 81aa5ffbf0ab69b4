// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::board::Board;
use crate::error::{Error, Result};
use crate::piece::PieceId;
use crate::types::{Color, Square, COLORS};
use crate::validate::{self, IllegalMove};

/// Lifecycle of a game session. Only `Active` and `Forfeited` are ever reached; the rest are
/// reserved for rules this engine does not implement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Active,
    Forfeited,
    WhiteWin,
    BlackWin,
    Stalemate,
    Resignation,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Active
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = match self {
            GameStatus::Active => "active",
            GameStatus::Forfeited => "forfeited",
            GameStatus::WhiteWin => "white wins",
            GameStatus::BlackWin => "black wins",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Resignation => "resignation",
        };
        f.write_str(msg)
    }
}

/// A view of one player: their color and whether it is their turn. Sides are computed from the
/// board's side to move, so the two turn flags can never disagree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Side {
    pub color: Color,
    pub turn: bool,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} player", self.color.name())
    }
}

/// A single game: the board, its status and a count of applied moves.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    status: GameStatus,
    moves_played: u32,
    forfeited_by: Option<Color>,
}

impl Game {
    /// A fresh game in the starting position with White to move.
    pub fn new() -> Game {
        Game::from_board(Board::initial())
    }

    pub fn from_board(board: Board) -> Game {
        Game {
            board,
            status: GameStatus::Active,
            moves_played: 0,
            forfeited_by: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    pub fn current_side(&self) -> Side {
        Side {
            color: self.side_to_move(),
            turn: true,
        }
    }

    pub fn sides(&self) -> [Side; 2] {
        let to_move = self.side_to_move();
        let side = |color: Color| Side {
            color,
            turn: color == to_move,
        };
        [side(COLORS[0]), side(COLORS[1])]
    }

    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// The color that forfeited, once the game is over by forfeit.
    pub fn forfeited_by(&self) -> Option<Color> {
        self.forfeited_by
    }

    /// Checks a move for the side to move without playing it. Nothing is legal once the game
    /// has ended.
    pub fn check(&self, start: Square, end: Square) -> std::result::Result<(), IllegalMove> {
        if self.status.is_terminal() {
            return Err(IllegalMove::GameOver);
        }

        validate::check_move(&self.board, self.side_to_move(), start, end)
    }

    pub fn is_legal(&self, start: Square, end: Square) -> bool {
        !self.status.is_terminal()
            && validate::validate(&self.board, self.side_to_move(), start, end)
    }

    /// Applies a move the caller has already validated, passing the turn to the other side.
    /// Returns the captured piece, if any. Fails with `GameOver` once the game has ended.
    pub fn apply_move(&mut self, start: Square, end: Square) -> Result<Option<PieceId>> {
        if self.status.is_terminal() {
            return Err(Error::GameOver(self.status));
        }

        let captured = self.board.apply_move(start, end)?;
        self.moves_played += 1;
        Ok(captured)
    }

    /// Validates and, if legal, applies a move. Nothing changes when the move is rejected.
    pub fn play(
        &mut self,
        start: Square,
        end: Square,
    ) -> std::result::Result<Option<PieceId>, IllegalMove> {
        self.check(start, end)?;
        let captured = self
            .apply_move(start, end)
            .expect("validated move has no piece at source");
        Ok(captured)
    }

    /// Ends the game because the side to move declined to move.
    pub fn forfeit(&mut self) {
        if self.status.is_terminal() {
            return;
        }

        info!(
            "{} forfeits after {} moves",
            self.side_to_move().name(),
            self.moves_played
        );
        self.forfeited_by = Some(self.side_to_move());
        self.status = GameStatus::Forfeited;
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
