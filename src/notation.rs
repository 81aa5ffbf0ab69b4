// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Coordinate text as typed by a player: a file letter `A`-`H` (either case) followed by a
//! one-based rank, e.g. `e2` or `B1`.
use crate::board::Board;
use crate::error::{Error, Result};
use crate::types::Square;

/// Zero-based file index of each letter.
const LETTERS: [(char, i32); 8] = [
    ('A', 0),
    ('B', 1),
    ('C', 2),
    ('D', 3),
    ('E', 4),
    ('F', 5),
    ('G', 6),
    ('H', 7),
];

/// Parses coordinate text into zero-based (file, rank) indices. Only the text is checked here;
/// a rank such as `9` parses fine and is rejected later by the board.
pub fn parse_coords(text: &str) -> Result<(i32, i32)> {
    let malformed = || Error::MalformedCoordinate(text.to_owned());
    let trimmed = text.trim();
    let mut chars = trimmed.chars();
    let letter = chars.next().ok_or_else(malformed)?.to_ascii_uppercase();
    let file = LETTERS
        .iter()
        .find(|&&(l, _)| l == letter)
        .map(|&(_, idx)| idx)
        .ok_or_else(malformed)?;

    // the rank is a single digit; anything else is not a coordinate.
    let rank = match (chars.next(), chars.next()) {
        (Some(digit), None) => digit.to_digit(10).ok_or_else(malformed)? as i32,
        _ => return Err(malformed()),
    };
    Ok((file, rank - 1))
}

/// Parses coordinate text into a square on `board`, failing with `OutOfBounds` when the rank
/// lies off the board.
pub fn parse_square(board: &Board, text: &str) -> Result<Square> {
    let (file, rank) = parse_coords(text)?;
    Ok(board.cell(file, rank)?.square())
}

/// Parses a move written as two coordinates, either run together (`e2e4`) or separated by
/// whitespace or a dash (`e2 e4`, `E2-E4`).
pub fn parse_move(board: &Board, text: &str) -> Result<(Square, Square)> {
    let trimmed = text.trim();
    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|s| !s.is_empty())
        .collect();

    match parts.as_slice() {
        [start, end] => Ok((parse_square(board, start)?, parse_square(board, end)?)),
        [joined] if joined.len() == 4 && joined.is_char_boundary(2) => {
            let (start, end) = joined.split_at(2);
            Ok((parse_square(board, start)?, parse_square(board, end)?))
        }
        _ => Err(Error::MalformedCoordinate(trimmed.to_owned())),
    }
}
