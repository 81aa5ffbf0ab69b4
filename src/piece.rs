// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::convert::TryFrom;
use std::fmt::{self, Display, Write};

use crate::types::{Color, PieceKind};

bitflags! {
    pub struct PieceFlags: u8 {
        const NONE = 0;
        /// Pawn that has not moved yet and may still advance two ranks.
        const UNMOVED = 0b0000_0001;
        /// King that has not moved yet.
        const CAN_CASTLE = 0b0000_0010;
    }
}

/// Pieces are never destroyed. A captured piece is only detached from its cell, so nothing in
/// the rules ever moves a piece to `Dead`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum State {
    Alive,
    Dead,
}

/// Handle to a piece in the board's piece arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub state: State,
    flags: PieceFlags,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        let flags = match kind {
            PieceKind::Pawn => PieceFlags::UNMOVED,
            PieceKind::King => PieceFlags::CAN_CASTLE,
            _ => PieceFlags::NONE,
        };

        Piece {
            kind,
            color,
            state: State::Alive,
            flags,
        }
    }

    pub fn flags(&self) -> PieceFlags {
        self.flags
    }

    /// True for a pawn that has never moved. Always false for other kinds.
    pub fn is_unmoved_pawn(&self) -> bool {
        self.flags.contains(PieceFlags::UNMOVED)
    }

    pub fn can_castle(&self) -> bool {
        self.flags.contains(PieceFlags::CAN_CASTLE)
    }

    /// Notifies the piece that it has just been relocated. Pawns lose their double step and
    /// kings lose the right to castle; everything else is unaffected.
    pub fn on_moved(&mut self) {
        match self.kind {
            PieceKind::Pawn => self.flags.remove(PieceFlags::UNMOVED),
            PieceKind::King => self.flags.remove(PieceFlags::CAN_CASTLE),
            _ => {}
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = ();

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let kind = PieceKind::try_from(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(Piece::new(kind, color))
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let chr = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };

        match self.color {
            Color::White => f.write_char(chr.to_ascii_uppercase()),
            Color::Black => f.write_char(chr),
        }
    }
}
