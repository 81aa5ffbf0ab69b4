// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Precomputed tables of the squares lying strictly between two aligned squares. Sliding pieces
//! consult these to decide whether anything obstructs their move.
use arrayvec::ArrayVec;

use crate::types::{Square, SQUARES};

/// The squares strictly between two aligned squares, ordered from the start square outwards.
/// Two squares on an 8x8 board have at most six squares between them.
pub type Path = ArrayVec<[Square; 6]>;

struct BetweenTable {
    table: Vec<Option<Path>>,
}

impl BetweenTable {
    pub fn new() -> BetweenTable {
        let mut bt = BetweenTable {
            table: vec![None; 64 * 64],
        };

        for &start in SQUARES.iter() {
            for &end in SQUARES.iter() {
                let dir = match start.direction_to(end) {
                    Some(dir) => dir,
                    None => continue,
                };

                let mut path = Path::new();
                let mut cursor = start.towards(dir);
                while let Some(sq) = cursor {
                    if sq == end {
                        break;
                    }

                    path.push(sq);
                    cursor = sq.towards(dir);
                }

                bt.table[start.as_index() * 64 + end.as_index()] = Some(path);
            }
        }

        bt
    }

    pub fn between(&self, start: Square, end: Square) -> Option<&Path> {
        self.table[start.as_index() * 64 + end.as_index()].as_ref()
    }
}

lazy_static! {
    static ref BETWEEN_TABLE: BetweenTable = BetweenTable::new();
}

/// Returns the ordered squares strictly between `start` and `end`, or `None` if the two do not
/// share a rank, a file or a diagonal (or are the same square).
pub fn between(start: Square, end: Square) -> Option<&'static [Square]> {
    BETWEEN_TABLE.between(start, end).map(|path| &path[..])
}
