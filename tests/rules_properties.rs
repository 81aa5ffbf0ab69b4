// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use gambit::rules::can_reach;
use gambit::{
    validate, Board, Color, Game, GameStatus, MoveGenerator, MoveVec, Piece, PieceKind, Square,
};

const KINDS: [PieceKind; 6] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

fn all_squares() -> impl Iterator<Item = Square> {
    (0..64).map(Square::from_index)
}

#[test]
fn starting_position_back_ranks() {
    let board = Board::initial();
    let back = "RNBQKBNR";
    for (file, letter) in back.chars().enumerate() {
        let white = board.piece_at(Square::from_index(file)).unwrap();
        assert_eq!(letter.to_string(), white.to_string());
        let black = board.piece_at(Square::from_index(56 + file)).unwrap();
        assert_eq!(letter.to_ascii_lowercase().to_string(), black.to_string());
        assert_eq!(Color::White, board.piece_at(Square::from_index(8 + file)).unwrap().color);
        assert_eq!(Color::Black, board.piece_at(Square::from_index(48 + file)).unwrap().color);
    }

    let empty = all_squares().filter(|&sq| !board.is_occupied(sq)).count();
    assert_eq!(32, empty);
}

#[test]
fn cells_are_independent() {
    let mut board = Board::initial();
    let before: Vec<_> = board
        .cells()
        .map(|cell| (cell.square(), cell.occupant()))
        .collect();
    assert_eq!(64, before.len());

    board.apply_move(Square::B1, Square::C3).unwrap();
    let queen = board
        .add_piece(Square::D4, Piece::new(PieceKind::Queen, Color::Black))
        .unwrap();

    let knight = before[Square::B1.as_index()].1;
    for (idx, (cell, &(square, occupant))) in board.cells().zip(&before).enumerate() {
        assert_eq!(Square::from_index(idx), cell.square());
        assert_eq!(square, cell.square());
        match cell.square() {
            Square::B1 => assert_eq!(None, cell.occupant()),
            Square::C3 => assert_eq!(knight, cell.occupant()),
            Square::D4 => assert_eq!(Some(queen), cell.occupant()),
            other => assert_eq!(occupant, cell.occupant(), "cell {} changed", other),
        }
    }
}

#[test]
fn no_kind_may_capture_its_own_color() {
    for &kind in &KINDS {
        for &color in &[Color::White, Color::Black] {
            for start in all_squares() {
                let mut board = Board::new();
                board.add_piece(start, Piece::new(kind, color)).unwrap();
                for end in all_squares().filter(|&sq| sq != start) {
                    board
                        .add_piece(end, Piece::new(PieceKind::Knight, color))
                        .unwrap();
                    assert!(
                        !can_reach(&board, start, end),
                        "{:?} {:?} on {} captured its own piece on {}",
                        color,
                        kind,
                        start,
                        end
                    );
                    board.remove_piece(end).unwrap();
                }
            }
        }
    }
}

#[test]
fn sliders_are_blocked_between() {
    let cases = [
        (PieceKind::Rook, Square::A1, Square::A8),
        (PieceKind::Bishop, Square::C1, Square::H6),
        (PieceKind::Queen, Square::D1, Square::D8),
        (PieceKind::Queen, Square::A1, Square::H8),
    ];

    for &(kind, start, end) in &cases {
        let mut board = Board::new();
        let piece = Piece::new(kind, Color::White);
        board.add_piece(start, piece).unwrap();
        assert!(can_reach(&board, start, end));

        let path = board.path_between(start, end).unwrap();
        for &between in path {
            board
                .add_piece(between, Piece::new(PieceKind::Pawn, Color::Black))
                .unwrap();
            assert!(!can_reach(&board, start, end), "{} not blocked", between);
            board.remove_piece(between).unwrap();
            assert!(can_reach(&board, start, end));
        }
    }
}

#[test]
fn knights_jump_over_pieces() {
    let board = Board::initial();
    assert!(can_reach(&board, Square::G1, Square::F3));
    assert!(can_reach(&board, Square::G1, Square::H3));
    assert!(!can_reach(&board, Square::G1, Square::G3));
}

#[test]
fn pawn_double_step_only_once() {
    let mut board = Board::new();
    board
        .add_piece(Square::E2, Piece::new(PieceKind::Pawn, Color::White))
        .unwrap();
    assert!(can_reach(&board, Square::E2, Square::E4));

    let mut moved = Piece::new(PieceKind::Pawn, Color::White);
    moved.on_moved();
    board.remove_piece(Square::E2).unwrap();
    board.add_piece(Square::E2, moved).unwrap();
    assert!(!can_reach(&board, Square::E2, Square::E4));
    assert!(can_reach(&board, Square::E2, Square::E3));
}

#[test]
fn pawn_diagonal_needs_a_victim() {
    let mut board = Board::new();
    board
        .add_piece(Square::E4, Piece::new(PieceKind::Pawn, Color::White))
        .unwrap();
    assert!(!can_reach(&board, Square::E4, Square::D5));
    board
        .add_piece(Square::D5, Piece::new(PieceKind::Pawn, Color::Black))
        .unwrap();
    assert!(can_reach(&board, Square::E4, Square::D5));
}

#[test]
fn king_reaches_exactly_its_neighbours() {
    let mut board = Board::new();
    board
        .add_piece(Square::D4, Piece::new(PieceKind::King, Color::White))
        .unwrap();
    let reachable: Vec<_> = all_squares()
        .filter(|&sq| can_reach(&board, Square::D4, sq))
        .collect();
    assert_eq!(8, reachable.len());
    for sq in reachable {
        let (df, dr) = Square::D4.delta(sq);
        assert_eq!(1, df.abs().max(dr.abs()));
    }
}

#[test]
fn side_to_move_follows_parity() {
    let mut game = Game::new();
    let gen = MoveGenerator::new();
    for n in 0..30 {
        let expected = if n % 2 == 0 { Color::White } else { Color::Black };
        assert_eq!(expected, game.side_to_move());

        let mut moves = MoveVec::default();
        gen.generate_moves(game.board(), game.side_to_move(), &mut moves);
        let mov = moves[n % moves.len()];
        game.play(mov.source(), mov.destination()).unwrap();
    }

    assert_eq!(GameStatus::Active, game.status());
}

#[test]
fn scenario_knight_b1_c3() {
    let mut game = Game::new();
    assert!(validate(game.board(), Color::White, Square::B1, Square::C3));
    game.play(Square::B1, Square::C3).unwrap();
    assert!(!game.board().is_occupied(Square::B1));
    let knight = game.board().piece_at(Square::C3).unwrap();
    assert_eq!((PieceKind::Knight, Color::White), (knight.kind, knight.color));
}

#[test]
fn scenario_pawn_a2_a5() {
    let board = Board::initial();
    assert!(!validate(&board, Color::White, Square::A2, Square::A5));
}

#[test]
fn scenario_king_onto_own_pawn() {
    let board = Board::initial();
    assert!(!validate(&board, Color::White, Square::E1, Square::E2));
}
