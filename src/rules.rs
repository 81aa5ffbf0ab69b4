// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Movement geometry for each kind of piece. The predicates here answer "could the piece on
//! `start` travel to `end`" and know nothing about whose turn it is; the validator layers turn
//! and ownership checks on top.
use crate::board::Board;
use crate::piece::Piece;
use crate::types::{PieceKind, Square};

/// Whether the piece standing on `start` can reach `end` on this board. Returns false when
/// `start` is empty, when `start == end`, and when `end` holds a piece of the mover's own color;
/// otherwise defers to the rule for the piece's kind.
pub fn can_reach(board: &Board, start: Square, end: Square) -> bool {
    let piece = match board.piece_at(start) {
        Some(piece) => piece,
        None => return false,
    };

    if start == end {
        return false;
    }

    if let Some(target) = board.piece_at(end) {
        if target.color == piece.color {
            return false;
        }
    }

    let rule: fn(&Board, &Piece, Square, Square) -> bool = match piece.kind {
        PieceKind::Pawn => pawn_can_reach,
        PieceKind::Knight => knight_can_reach,
        PieceKind::Bishop => bishop_can_reach,
        PieceKind::Rook => rook_can_reach,
        PieceKind::Queen => queen_can_reach,
        PieceKind::King => king_can_reach,
    };

    rule(board, piece, start, end)
}

// Each rule below assumes the shared preconditions in `can_reach` have already been checked.

fn pawn_can_reach(board: &Board, pawn: &Piece, start: Square, end: Square) -> bool {
    let (df, dr) = start.delta(end);
    let forward = dr * pawn.color.pawn_direction();
    let sideways = df.abs();

    match board.piece_at(end) {
        // Captures go one square diagonally forward and never straight ahead.
        Some(_) => sideways == 1 && forward == 1,

        // Quiet moves go straight ahead and never capture. The double step needs the square
        // it passes over to be empty too.
        None => {
            if sideways != 0 {
                return false;
            }

            match forward {
                1 => true,
                2 if pawn.is_unmoved_pawn() => board
                    .path_between(start, end)
                    .map(|path| board.is_clear(path))
                    .unwrap_or(false),
                _ => false,
            }
        }
    }
}

fn knight_can_reach(_: &Board, _: &Piece, start: Square, end: Square) -> bool {
    let (df, dr) = start.delta(end);
    df.abs() * dr.abs() == 2
}

fn bishop_can_reach(board: &Board, _: &Piece, start: Square, end: Square) -> bool {
    let (df, dr) = start.delta(end);
    if df == 0 || df.abs() != dr.abs() {
        return false;
    }

    slide_is_clear(board, start, end)
}

fn rook_can_reach(board: &Board, _: &Piece, start: Square, end: Square) -> bool {
    let (df, dr) = start.delta(end);
    if (df == 0) == (dr == 0) {
        return false;
    }

    slide_is_clear(board, start, end)
}

fn queen_can_reach(board: &Board, piece: &Piece, start: Square, end: Square) -> bool {
    rook_can_reach(board, piece, start, end) || bishop_can_reach(board, piece, start, end)
}

fn king_can_reach(_: &Board, _: &Piece, start: Square, end: Square) -> bool {
    let (df, dr) = start.delta(end);
    df.abs().max(dr.abs()) == 1
}

fn slide_is_clear(board: &Board, start: Square, end: Square) -> bool {
    match board.path_between(start, end) {
        Ok(path) => board.is_clear(path),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::can_reach;
    use crate::board::Board;
    use crate::piece::Piece;
    use crate::types::{Color, PieceKind, Square, DIRECTIONS, SQUARES};

    fn board(placement: &str) -> Board {
        Board::from_placement(placement).unwrap()
    }

    mod self_capture {
        use super::*;

        macro_rules! self_capture_tests {
            ($($name:ident: $placement:expr, $start:expr => $end:expr;)*) => {
                $(
                    #[test]
                    fn $name() {
                        let mut b = board($placement);
                        assert!(!can_reach(&b, $start, $end));

                        // the same geometry with an enemy on the target is fine.
                        let target = b.piece_at($end).unwrap().color.toggle();
                        b.remove_piece($end).unwrap();
                        b.add_piece($end, Piece::new(PieceKind::Pawn, target)).unwrap();
                        assert!(can_reach(&b, $start, $end));
                    }
                )*
            };
        }

        self_capture_tests! {
            pawn: "8/8/8/8/8/3P4/4P3/8", Square::E2 => Square::D3;
            knight: "8/8/8/8/8/2P5/8/1N6", Square::B1 => Square::C3;
            bishop: "8/8/8/8/8/2B5/8/B7", Square::A1 => Square::C3;
            rook: "8/8/8/8/8/8/8/R3R3", Square::A1 => Square::E1;
            queen: "8/8/8/8/3q4/8/8/3q4", Square::D1 => Square::D4;
            king: "8/8/8/8/8/8/4k3/4k3", Square::E1 => Square::E2;
        }

        #[test]
        fn all_kinds_all_destinations() {
            let kinds = [
                PieceKind::Pawn,
                PieceKind::Knight,
                PieceKind::Bishop,
                PieceKind::Rook,
                PieceKind::Queen,
                PieceKind::King,
            ];
            for &kind in &kinds {
                for &dest in SQUARES.iter() {
                    if dest == Square::D4 {
                        continue;
                    }

                    let mut b = Board::new();
                    b.add_piece(Square::D4, Piece::new(kind, Color::White)).unwrap();
                    b.add_piece(dest, Piece::new(PieceKind::Knight, Color::White))
                        .unwrap();
                    assert!(
                        !can_reach(&b, Square::D4, dest),
                        "{:?} on d4 captured its own piece on {}",
                        kind,
                        dest
                    );
                }
            }
        }
    }

    #[test]
    fn null_move_is_never_reachable() {
        let b = Board::initial();
        for (sq, _) in b.pieces() {
            assert!(!can_reach(&b, sq, sq));
        }
    }

    #[test]
    fn empty_start_is_never_reachable() {
        let b = Board::initial();
        assert!(!can_reach(&b, Square::E4, Square::E5));
    }

    mod sliders {
        use super::*;

        #[test]
        fn rook_straight_lines_only() {
            let b = board("8/8/8/8/3R4/8/8/8");
            assert!(can_reach(&b, Square::D4, Square::D8));
            assert!(can_reach(&b, Square::D4, Square::A4));
            assert!(!can_reach(&b, Square::D4, Square::E5));
            assert!(!can_reach(&b, Square::D4, Square::F5));
        }

        #[test]
        fn bishop_diagonals_only() {
            let b = board("8/8/8/8/3B4/8/8/8");
            assert!(can_reach(&b, Square::D4, Square::H8));
            assert!(can_reach(&b, Square::D4, Square::A1));
            assert!(can_reach(&b, Square::D4, Square::G1));
            assert!(!can_reach(&b, Square::D4, Square::D5));
            assert!(!can_reach(&b, Square::D4, Square::E6));
        }

        #[test]
        fn queen_is_rook_or_bishop() {
            let b = board("8/8/8/8/3Q4/8/8/8");
            assert!(can_reach(&b, Square::D4, Square::D8));
            assert!(can_reach(&b, Square::D4, Square::H8));
            assert!(can_reach(&b, Square::D4, Square::A4));
            assert!(!can_reach(&b, Square::D4, Square::E6));
            assert!(!can_reach(&b, Square::D4, Square::B5));
        }

        #[test]
        fn blockers_toggle_long_moves() {
            let cases = [
                (PieceKind::Rook, Square::A1, Square::A8),
                (PieceKind::Rook, Square::H4, Square::A4),
                (PieceKind::Bishop, Square::A1, Square::H8),
                (PieceKind::Bishop, Square::H1, Square::A8),
                (PieceKind::Queen, Square::D1, Square::D8),
                (PieceKind::Queen, Square::C1, Square::H6),
            ];

            for &(kind, start, end) in &cases {
                let mut b = Board::new();
                b.add_piece(start, Piece::new(kind, Color::White)).unwrap();
                assert!(can_reach(&b, start, end));

                let path = b.path_between(start, end).unwrap();
                for &blocker in path {
                    for &color in &[Color::White, Color::Black] {
                        b.add_piece(blocker, Piece::new(PieceKind::Pawn, color))
                            .unwrap();
                        assert!(
                            !can_reach(&b, start, end),
                            "{:?} {}{} not blocked by {}",
                            kind,
                            start,
                            end,
                            blocker
                        );
                        b.remove_piece(blocker).unwrap();
                        assert!(can_reach(&b, start, end));
                    }
                }
            }
        }

        #[test]
        fn capture_at_end_of_slide() {
            let b = board("3r4/8/8/8/8/8/8/3R4");
            assert!(can_reach(&b, Square::D1, Square::D8));
            assert!(can_reach(&b, Square::D8, Square::D1));
        }
    }

    mod knights {
        use super::*;

        #[test]
        fn all_eight_jumps() {
            let b = board("8/8/8/8/3N4/8/8/8");
            let targets = [
                Square::B3,
                Square::B5,
                Square::C2,
                Square::C6,
                Square::E2,
                Square::E6,
                Square::F3,
                Square::F5,
            ];
            for &dest in SQUARES.iter() {
                assert_eq!(
                    targets.contains(&dest),
                    can_reach(&b, Square::D4, dest),
                    "knight d4 -> {}",
                    dest
                );
            }
        }

        #[test]
        fn jumps_over_crowds() {
            let b = Board::initial();
            assert!(can_reach(&b, Square::B1, Square::C3));
            assert!(can_reach(&b, Square::B1, Square::A3));
            assert!(can_reach(&b, Square::G8, Square::F6));
            assert!(!can_reach(&b, Square::B1, Square::D2));
        }

        #[test]
        fn straight_and_diagonal_shapes_are_rejected() {
            let b = board("8/8/8/8/3N4/8/8/8");
            assert!(!can_reach(&b, Square::D4, Square::D6));
            assert!(!can_reach(&b, Square::D4, Square::F6));
            assert!(!can_reach(&b, Square::D4, Square::D7));
            assert!(!can_reach(&b, Square::D4, Square::G5));
        }
    }

    mod kings {
        use super::*;

        #[test]
        fn one_step_in_every_direction() {
            let b = board("8/8/8/8/3K4/8/8/8");
            for &dir in &DIRECTIONS {
                let dest = Square::D4.towards(dir).unwrap();
                assert!(can_reach(&b, Square::D4, dest), "king d4 -> {}", dest);
            }
        }

        #[test]
        fn two_or_more_steps_are_illegal() {
            let b = board("8/8/8/8/3K4/8/8/8");
            for &dest in SQUARES.iter() {
                let (df, dr) = Square::D4.delta(dest);
                if df.abs().max(dr.abs()) >= 2 {
                    assert!(!can_reach(&b, Square::D4, dest), "king d4 -> {}", dest);
                }
            }
        }

        #[test]
        fn castling_is_not_a_king_move() {
            let b = board("8/8/8/8/8/8/8/R3K2R");
            assert!(!can_reach(&b, Square::E1, Square::G1));
            assert!(!can_reach(&b, Square::E1, Square::C1));
        }
    }

    mod pawns {
        use super::*;

        #[test]
        fn white_single_and_double_step() {
            let b = Board::initial();
            assert!(can_reach(&b, Square::E2, Square::E3));
            assert!(can_reach(&b, Square::E2, Square::E4));
            assert!(!can_reach(&b, Square::E2, Square::E5));
        }

        #[test]
        fn black_moves_down_the_board() {
            let b = Board::initial();
            assert!(can_reach(&b, Square::D7, Square::D6));
            assert!(can_reach(&b, Square::D7, Square::D5));
            assert!(!can_reach(&b, Square::D7, Square::D8));
        }

        #[test]
        fn no_backwards_or_sideways() {
            let b = board("8/8/8/8/3P4/8/8/8");
            assert!(!can_reach(&b, Square::D4, Square::D3));
            assert!(!can_reach(&b, Square::D4, Square::C4));
            assert!(!can_reach(&b, Square::D4, Square::E3));
        }

        #[test]
        fn double_step_only_before_moving() {
            let mut b = Board::initial();
            b.apply_move(Square::A2, Square::A3).unwrap();
            assert!(can_reach(&b, Square::A3, Square::A4));
            assert!(!can_reach(&b, Square::A3, Square::A5));
        }

        #[test]
        fn double_step_needs_clear_path() {
            let b = board("8/8/8/8/8/4n3/4P3/8");
            assert!(!can_reach(&b, Square::E2, Square::E4));
            assert!(!can_reach(&b, Square::E2, Square::E3));
        }

        #[test]
        fn straight_ahead_never_captures() {
            let b = board("8/8/8/8/8/4p3/4P3/8");
            assert!(!can_reach(&b, Square::E2, Square::E3));
            let b = board("8/8/8/8/4p3/8/4P3/8");
            assert!(!can_reach(&b, Square::E2, Square::E4));
        }

        #[test]
        fn diagonal_needs_an_enemy() {
            let b = board("8/8/8/8/8/3p4/4P3/8");
            assert!(can_reach(&b, Square::E2, Square::D3));
            assert!(!can_reach(&b, Square::E2, Square::F3));
        }

        #[test]
        fn black_captures_downward() {
            let b = board("8/8/8/3p4/2P1P3/8/8/8");
            assert!(can_reach(&b, Square::D5, Square::C4));
            assert!(can_reach(&b, Square::D5, Square::E4));
            assert!(!can_reach(&b, Square::C4, Square::D3));
        }

        #[test]
        fn no_two_square_diagonal() {
            let b = board("8/8/8/8/2p5/8/4P3/8");
            assert!(!can_reach(&b, Square::E2, Square::C4));
        }
    }
}
