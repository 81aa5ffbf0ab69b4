// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;
use std::io;

use thiserror::Error;

use crate::game::GameStatus;
use crate::types::Square;

/// Possible errors that can arise when parsing the piece placement field of a FEN string into a
/// `Board`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlacementParseError {
    UnexpectedChar(char),
    UnexpectedEnd,
    TrailingInput,
    InvalidDigit,
    FileDoesNotSumToEight,
    UnknownPiece(char),
}

impl fmt::Display for PlacementParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlacementParseError::UnexpectedChar(c) => write!(f, "unexpected character '{}'", c),
            PlacementParseError::UnexpectedEnd => write!(f, "unexpected end of input"),
            PlacementParseError::TrailingInput => write!(f, "trailing input after rank 1"),
            PlacementParseError::InvalidDigit => write!(f, "empty-square count must be 1-8"),
            PlacementParseError::FileDoesNotSumToEight => write!(f, "rank does not sum to 8 files"),
            PlacementParseError::UnknownPiece(c) => write!(f, "unknown piece '{}'", c),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    /// A zero-based coordinate fell outside of `0..8`. This usually means the move source handed
    /// us garbage and should be asked again.
    #[error("coordinate ({file}, {rank}) is off the board")]
    OutOfBounds { file: i32, rank: i32 },

    #[error("squares {start} and {end} do not share a rank, file or diagonal")]
    NotAligned { start: Square, end: Square },

    #[error("square {0} is already occupied")]
    Occupied(Square),

    #[error("square {0} is empty")]
    Vacant(Square),

    #[error("invalid piece placement: {0}")]
    Placement(PlacementParseError),

    #[error("the game is over: {0}")]
    GameOver(GameStatus),

    #[error("malformed coordinate: {0:?}")]
    MalformedCoordinate(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<PlacementParseError> for Error {
    fn from(err: PlacementParseError) -> Error {
        Error::Placement(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
