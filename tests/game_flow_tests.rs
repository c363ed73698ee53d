//! Game Flow Integration Tests
//!
//! Tests for full game flows including:
//! - Lobby fill and game start
//! - Move submission and turn rotation
//! - Capture, demotion, and redeployment outcomes
//! - Pawn elimination and the finishing order

use ringchess::api::{join, new_game_with_seed, snapshot, submit_move};
use ringchess::board::Square;
use ringchess::turn::GamePhase;
use ringchess::types::{Game, PieceRank, SeatId};

/// Start a seeded game with all four seats joined
fn started_game(seed: u64) -> Game {
    let mut game = new_game_with_seed(seed);
    for seat in SeatId::ALL {
        join(&mut game, seat).unwrap();
    }
    game
}

/// Clear every piece off the board, leaving seats joined and the game active
fn clear_board(game: &mut Game) {
    for index in 0..4 {
        if let Some(position) = game.seats[index].position.take() {
            game.board.clear(position);
        }
    }
}

/// Put a seat's piece at a square with a given rank
fn place(game: &mut Game, id: SeatId, rank: PieceRank, square: Square) {
    let seat = game.seat_mut(id);
    seat.rank = rank;
    seat.position = Some(square);
    game.board.set(square, id);
}

// ============================================================================
// Lobby and Start
// ============================================================================

#[test]
fn test_four_joins_start_the_game_with_distinct_ring_queens() {
    let game = started_game(101);

    assert_eq!(game.phase, GamePhase::Active);
    assert_eq!(game.current_turn, SeatId::Green.index());

    let mut positions = Vec::new();
    for seat in &game.seats {
        assert_eq!(seat.rank, PieceRank::Queen);
        let position = seat.position.expect("every queen is deployed");
        assert!(position.is_ring(), "queen off the ring: {position}");
        assert!(!positions.contains(&position), "duplicate queen square");
        positions.push(position);
    }
}

#[test]
fn test_first_move_updates_board_log_and_cursor() {
    let mut game = started_game(101);
    let origin = game.seat(SeatId::Green).position.unwrap();

    // Pick a one-step diagonal onto an empty square
    let dest = [(1, 1), (1, -1), (-1, 1), (-1, -1)]
        .iter()
        .filter_map(|&(row_delta, col_delta)| origin.offset(row_delta, col_delta))
        .find(|square| game.board.is_empty_at(*square))
        .expect("queen has an empty diagonal neighbor");

    submit_move(&mut game, SeatId::Green, dest.row, dest.col).unwrap();

    assert!(game.board.is_empty_at(origin));
    assert_eq!(game.board.get(dest), Some(SeatId::Green));
    assert_eq!(game.seat(SeatId::Green).position, Some(dest));
    assert_eq!(game.current_turn, SeatId::Blue.index());

    let latest = game.log.latest().unwrap();
    assert_eq!(latest.message, format!("Green moved to {dest}."));
}

// ============================================================================
// Capture and Demotion
// ============================================================================

#[test]
fn test_rook_capturing_queen_becomes_committed_bishop() {
    let mut game = started_game(103);
    clear_board(&mut game);
    place(&mut game, SeatId::Green, PieceRank::Rook, Square::new(4, 4));
    place(&mut game, SeatId::Blue, PieceRank::Queen, Square::new(4, 6));

    submit_move(&mut game, SeatId::Green, 4, 6).unwrap();

    // Attacker: demoted, redeployed to the ring, committed to a color
    let green = game.seat(SeatId::Green);
    assert_eq!(green.rank, PieceRank::Bishop);
    let landed = green.position.unwrap();
    assert!(landed.is_ring());
    let commitment = green.bishop_color.expect("fresh bishop is committed");
    assert_eq!(landed.color(), commitment);
    assert_eq!(game.bishop_counts.count(commitment), 1);

    // Defender: displaced from the square but otherwise untouched
    let blue = game.seat(SeatId::Blue);
    assert!(game.board.is_empty_at(Square::new(4, 6)));
    assert_eq!(blue.position, Some(Square::new(4, 6)));
    assert_eq!(blue.rank, PieceRank::Queen);
    assert!(blue.finished_place.is_none());

    assert_eq!(game.current_turn, SeatId::Blue.index());
}

#[test]
fn test_pawn_capture_assigns_first_place_and_keeps_game_active() {
    let mut game = started_game(107);
    clear_board(&mut game);
    place(&mut game, SeatId::Green, PieceRank::Pawn, Square::new(4, 4));
    place(&mut game, SeatId::Blue, PieceRank::Queen, Square::new(3, 3));
    place(&mut game, SeatId::Red, PieceRank::Queen, Square::new(0, 0));
    place(&mut game, SeatId::Purple, PieceRank::Queen, Square::new(7, 7));

    submit_move(&mut game, SeatId::Green, 3, 3).unwrap();

    let green = game.seat(SeatId::Green);
    assert_eq!(green.position, None);
    assert_eq!(green.finished_place, Some(1));
    assert_eq!(game.finish_order, vec![SeatId::Green]);
    assert_eq!(game.phase, GamePhase::Active);

    // The turn passes to the next unfinished seat
    assert_eq!(game.current_turn, SeatId::Blue.index());
}

#[test]
fn test_turn_rotation_skips_finished_seats() {
    let mut game = started_game(109);
    clear_board(&mut game);
    // Blue already finished; green moves and the turn must land on red
    game.seat_mut(SeatId::Blue).finished_place = Some(1);
    game.finish_order.push(SeatId::Blue);
    place(&mut game, SeatId::Green, PieceRank::Queen, Square::new(4, 4));
    place(&mut game, SeatId::Red, PieceRank::Queen, Square::new(0, 0));
    place(&mut game, SeatId::Purple, PieceRank::Queen, Square::new(7, 0));

    submit_move(&mut game, SeatId::Green, 5, 5).unwrap();
    assert_eq!(game.current_turn, SeatId::Red.index());
}

#[test]
fn test_queen_demotes_step_by_step_to_pawn() {
    let mut game = started_game(113);
    let expected = [
        PieceRank::Rook,
        PieceRank::Bishop,
        PieceRank::Knight,
        PieceRank::Pawn,
    ];

    for rank in expected {
        clear_board(&mut game);
        game.current_turn = SeatId::Green.index();
        let attacker_rank = game.seat(SeatId::Green).rank;
        place(&mut game, SeatId::Green, attacker_rank, Square::new(4, 4));
        place(&mut game, SeatId::Blue, PieceRank::Queen, Square::new(4, 6));

        // Rooks, queens, and bishops cannot all reach (4, 6) from (4, 4);
        // pick a destination the current rank can actually attack.
        let dest = match attacker_rank {
            PieceRank::Knight => {
                game.board.clear(Square::new(4, 6));
                game.seat_mut(SeatId::Blue).position = Some(Square::new(6, 5));
                game.board.set(Square::new(6, 5), SeatId::Blue);
                Square::new(6, 5)
            }
            PieceRank::Bishop => {
                game.board.clear(Square::new(4, 6));
                game.seat_mut(SeatId::Blue).position = Some(Square::new(6, 6));
                game.board.set(Square::new(6, 6), SeatId::Blue);
                Square::new(6, 6)
            }
            _ => Square::new(4, 6),
        };

        submit_move(&mut game, SeatId::Green, dest.row, dest.col).unwrap();
        assert_eq!(game.seat(SeatId::Green).rank, rank);
    }
}

// ============================================================================
// Snapshot
// ============================================================================

#[test]
fn test_snapshot_tracks_finish_order_and_log() {
    let mut game = started_game(127);
    clear_board(&mut game);
    place(&mut game, SeatId::Green, PieceRank::Pawn, Square::new(4, 4));
    place(&mut game, SeatId::Blue, PieceRank::Queen, Square::new(3, 3));

    submit_move(&mut game, SeatId::Green, 3, 3).unwrap();

    let snap = snapshot(&game);
    assert_eq!(snap.finish_order, vec![SeatId::Green]);
    assert_eq!(snap.seats[0].finished_place, Some(1));
    assert!(snap.log[0]
        .message
        .contains("Green pawn captured at d5 and claimed place 1!"));
}
