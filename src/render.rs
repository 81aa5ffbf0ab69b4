// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt::Write;

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{Color, PieceKind, Square, FILES, RANKS};

/// Which characters to draw pieces with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphSet {
    /// Chess symbols; White's are filled in, Black's are outlines.
    Unicode,
    /// FEN letters, uppercase for White.
    Ascii,
}

impl Default for GlyphSet {
    fn default() -> GlyphSet {
        GlyphSet::Unicode
    }
}

impl GlyphSet {
    pub fn glyph(self, piece: &Piece) -> char {
        match self {
            GlyphSet::Ascii => piece.to_string().chars().next().unwrap_or('?'),
            GlyphSet::Unicode => match (piece.color, piece.kind) {
                (Color::White, PieceKind::Pawn) => '♟',
                (Color::White, PieceKind::Knight) => '♞',
                (Color::White, PieceKind::Bishop) => '♝',
                (Color::White, PieceKind::Rook) => '♜',
                (Color::White, PieceKind::Queen) => '♛',
                (Color::White, PieceKind::King) => '♚',
                (Color::Black, PieceKind::Pawn) => '♙',
                (Color::Black, PieceKind::Knight) => '♘',
                (Color::Black, PieceKind::Bishop) => '♗',
                (Color::Black, PieceKind::Rook) => '♖',
                (Color::Black, PieceKind::Queen) => '♕',
                (Color::Black, PieceKind::King) => '♔',
            },
        }
    }
}

const RULE: &str = "   ----------------------------------------";

/// Draws the board as an 8x8 grid, rank 8 at the top and file A on the left. Empty cells are
/// drawn blank.
pub fn render(board: &Board, glyphs: GlyphSet) -> String {
    let mut buf = String::new();
    buf.push_str(RULE);
    for &rank in RANKS.iter().rev() {
        write!(&mut buf, "\n {}|", rank).unwrap();
        for &file in &FILES {
            let glyph = board
                .piece_at(Square::of(rank, file))
                .map(|piece| glyphs.glyph(piece))
                .unwrap_or(' ');
            write!(&mut buf, " [{}] ", glyph).unwrap();
        }
    }

    buf.push('\n');
    buf.push_str(RULE);
    buf.push('\n');
    buf.push_str("   ");
    for &file in &FILES {
        write!(&mut buf, "  {}  ", file.as_upper()).unwrap();
    }

    buf.push('\n');
    buf
}

#[cfg(test)]
mod tests {
    use super::{render, GlyphSet};
    use crate::board::Board;

    #[test]
    fn starting_board_unicode() {
        let text = render(&Board::initial(), GlyphSet::Unicode);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(11, lines.len());
        assert_eq!(" 8| [♖]  [♘]  [♗]  [♕]  [♔]  [♗]  [♘]  [♖] ", lines[1]);
        assert_eq!(" 5| [ ]  [ ]  [ ]  [ ]  [ ]  [ ]  [ ]  [ ] ", lines[4]);
        assert_eq!(" 1| [♜]  [♞]  [♝]  [♛]  [♚]  [♝]  [♞]  [♜] ", lines[8]);
        assert!(lines[10].contains("A    B    C    D    E    F    G    H"));
    }

    #[test]
    fn starting_board_ascii() {
        let text = render(&Board::initial(), GlyphSet::Ascii);
        assert!(text.contains(" 7| [p]  [p]  [p]  [p]  [p]  [p]  [p]  [p] "));
        assert!(text.contains(" 2| [P]  [P]  [P]  [P]  [P]  [P]  [P]  [P] "));
    }

    #[test]
    fn empty_board_is_blank() {
        let text = render(&Board::new(), GlyphSet::Ascii);
        assert!(!text.contains(|c: char| c.is_ascii_alphabetic() && c.is_ascii_lowercase()));
    }
}
