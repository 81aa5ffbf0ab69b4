// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt::{self, Write};

use crate::error::{Error, PlacementParseError, Result};
use crate::paths;
use crate::piece::{Piece, PieceId};
use crate::types::{Color, File, PieceKind, Rank, Square, TableIndex};
use crate::types::{BACK_RANK, FILES, RANKS, SQUARES};

/// One of the 64 addressable positions on the board. A cell knows its own square and holds at
/// most one piece.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    square: Square,
    occupant: Option<PieceId>,
}

impl Cell {
    fn new(square: Square) -> Cell {
        Cell {
            square,
            occupant: None,
        }
    }

    pub fn square(&self) -> Square {
        self.square
    }

    pub fn occupant(&self) -> Option<PieceId> {
        self.occupant
    }

    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }
}

/// The board owns every cell and, through an arena, every piece that has ever been placed on
/// it. Captured pieces stay in the arena after they are detached from their cell.
#[derive(Clone, Debug)]
pub struct Board {
    cells: Vec<Cell>,
    pieces: Vec<Piece>,
    side_to_move: Color,
}

//
// Board state getters
//

impl Board {
    /// An empty board with White to move.
    pub fn new() -> Board {
        Board {
            cells: SQUARES.iter().map(|&sq| Cell::new(sq)).collect(),
            pieces: Vec::with_capacity(32),
            side_to_move: Color::White,
        }
    }

    /// A board in the standard starting position with White to move.
    pub fn initial() -> Board {
        let mut board = Board::new();
        board.setup_initial_position();
        board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Looks up a cell by zero-based file and rank.
    pub fn cell(&self, file: i32, rank: i32) -> Result<&Cell> {
        let square = Square::from_coords(file, rank)?;
        Ok(self.cell_at(square))
    }

    pub fn cell_at(&self, square: Square) -> &Cell {
        &self.cells[square.as_index()]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.index()]
    }

    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.cell_at(square).occupant.map(|id| self.piece(id))
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.cell_at(square).is_occupied()
    }

    /// Every piece currently standing on the board, with its square.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> {
        self.cells
            .iter()
            .filter_map(move |cell| cell.occupant.map(|id| (cell.square, self.piece(id))))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, &Piece)> {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Pieces that were captured and detached from the board.
    pub fn captured(&self) -> impl Iterator<Item = &Piece> {
        let mut on_board = vec![false; self.pieces.len()];
        for cell in &self.cells {
            if let Some(id) = cell.occupant {
                on_board[id.index()] = true;
            }
        }

        self.pieces
            .iter()
            .enumerate()
            .filter(move |(idx, _)| !on_board[*idx])
            .map(|(_, piece)| piece)
    }

    /// The squares strictly between `start` and `end`, nearest to `start` first. Fails with
    /// `NotAligned` when the two squares do not share a rank, file or diagonal.
    pub fn path_between(&self, start: Square, end: Square) -> Result<&'static [Square]> {
        paths::between(start, end).ok_or(Error::NotAligned { start, end })
    }

    /// Whether every square in `path` is empty.
    pub fn is_clear(&self, path: &[Square]) -> bool {
        path.iter().all(|&sq| !self.is_occupied(sq))
    }
}

//
// Setup and board manipulation
//

impl Board {
    /// Resets this board to the standard starting position. Any pieces from a previous game are
    /// discarded along with the arena that held them.
    pub fn setup_initial_position(&mut self) {
        self.clear();
        for &color in &[Color::White, Color::Black] {
            for (&file, &kind) in FILES.iter().zip(BACK_RANK.iter()) {
                self.add_piece(Square::of(color.back_rank(), file), Piece::new(kind, color))
                    .expect("starting position double-add piece?");
                self.add_piece(
                    Square::of(color.pawn_rank(), file),
                    Piece::new(PieceKind::Pawn, color),
                )
                .expect("starting position double-add piece?");
            }
        }

        self.side_to_move = Color::White;
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.occupant = None;
        }

        self.pieces.clear();
    }

    pub fn add_piece(&mut self, square: Square, piece: Piece) -> Result<PieceId> {
        if self.is_occupied(square) {
            return Err(Error::Occupied(square));
        }

        let id = PieceId(self.pieces.len());
        self.pieces.push(piece);
        self.cells[square.as_index()].occupant = Some(id);
        Ok(id)
    }

    /// Detaches the piece on `square` from the board. The piece itself stays in the arena.
    pub fn remove_piece(&mut self, square: Square) -> Result<PieceId> {
        self.cells[square.as_index()]
            .occupant
            .take()
            .ok_or(Error::Vacant(square))
    }

    /// Applies a move that the caller has already validated. The piece on `start` is moved to
    /// `end` and told that it moved, and the turn passes to the other side. Whatever stood on
    /// `end` is detached from its cell but keeps its state. Returns the captured piece, if any.
    ///
    /// No legality checks happen here. The only failure is an empty `start` square, which is
    /// reported before anything is mutated.
    pub fn apply_move(&mut self, start: Square, end: Square) -> Result<Option<PieceId>> {
        let moving = self.remove_piece(start)?;
        let captured = self.cells[end.as_index()].occupant.replace(moving);
        self.pieces[moving.index()].on_moved();
        self.side_to_move = self.side_to_move.toggle();
        debug!(
            "applied {}{} ({}), captured: {:?}",
            start,
            end,
            self.pieces[moving.index()],
            captured.map(|id| self.pieces[id.index()])
        );
        Ok(captured)
    }
}

//
// Piece placement parsing and generation.
//
// The placement field of FEN is a compact way of writing down a board: ranks 8 through 1,
// separated by slashes, with piece letters (uppercase for White) and digits counting runs of
// empty squares.
//

impl Board {
    /// Constructs a board from the placement field of a FEN string, with White to move. Pawns
    /// found off their home rank are treated as having moved already, as are kings off their
    /// home square.
    pub fn from_placement<S: AsRef<str>>(placement: S) -> Result<Board> {
        use std::convert::TryFrom;
        use std::iter::Peekable;
        use std::str::Chars;

        type Stream<'a> = Peekable<Chars<'a>>;

        fn eat(iter: &mut Stream, expected: char) -> std::result::Result<(), PlacementParseError> {
            match iter.next() {
                Some(c) if c == expected => Ok(()),
                Some(c) => Err(PlacementParseError::UnexpectedChar(c)),
                None => Err(PlacementParseError::UnexpectedEnd),
            }
        }

        fn peek(iter: &mut Stream) -> std::result::Result<char, PlacementParseError> {
            iter.peek()
                .cloned()
                .ok_or(PlacementParseError::UnexpectedEnd)
        }

        let mut board = Board::new();
        let iter = &mut placement.as_ref().chars().peekable();
        for &rank in RANKS.iter().rev() {
            let mut file = File::A as usize;
            while file <= File::H as usize {
                let c = peek(iter)?;
                // digits 1 through 8 indicate empty squares.
                if c.is_digit(10) {
                    if c < '1' || c > '8' {
                        return Err(PlacementParseError::InvalidDigit.into());
                    }

                    file += c as usize - '0' as usize;
                    if file > 8 {
                        return Err(PlacementParseError::FileDoesNotSumToEight.into());
                    }

                    iter.next();
                    continue;
                }

                let mut piece =
                    Piece::try_from(c).map_err(|_| PlacementParseError::UnknownPiece(c))?;
                let square = Square::of(rank, File::from_index(file));
                if piece.kind == PieceKind::Pawn && rank != piece.color.pawn_rank() {
                    piece.on_moved();
                }
                if piece.kind == PieceKind::King
                    && square != Square::of(piece.color.back_rank(), File::E)
                {
                    piece.on_moved();
                }

                board.add_piece(square, piece)?;
                iter.next();
                file += 1;
            }

            if rank != Rank::One {
                eat(iter, '/')?;
            }
        }

        if iter.next().is_some() {
            return Err(PlacementParseError::TrailingInput.into());
        }

        Ok(board)
    }

    pub fn as_placement(&self) -> String {
        let mut buf = String::new();
        for &rank in RANKS.iter().rev() {
            let mut empty_squares = 0;
            for &file in &FILES {
                if let Some(piece) = self.piece_at(Square::of(rank, file)) {
                    if empty_squares != 0 {
                        buf.push((b'0' + empty_squares) as char);
                    }
                    buf.push_str(&piece.to_string());
                    empty_squares = 0;
                } else {
                    empty_squares += 1;
                }
            }

            if empty_squares != 0 {
                buf.push((b'0' + empty_squares) as char);
            }

            if rank != Rank::One {
                buf.push('/');
            }
        }

        buf
    }
}

//
// Trait implementations
//

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &rank in RANKS.iter().rev() {
            for &file in &FILES {
                if let Some(piece) = self.piece_at(Square::of(rank, file)) {
                    write!(f, " {} ", piece)?;
                } else {
                    write!(f, " . ")?;
                }
            }

            writeln!(f, "| {}", rank)?;
        }

        for _ in &FILES {
            write!(f, "---")?;
        }

        writeln!(f)?;
        for &file in &FILES {
            f.write_char(' ')?;
            write!(f, "{}", file)?;
            f.write_char(' ')?;
        }

        writeln!(f)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
