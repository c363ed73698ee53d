//! Game lifecycle management
//!
//! Functions for creating, resetting, joining, and leaving games.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::board::Board;
use crate::error::{GameError, GameResult};
use crate::event_log::EventLog;
use crate::redeploy::place_initial_queens;
use crate::turn::GamePhase;
use crate::types::{BishopCounts, Game, Seat, SeatId};

/// Create a new game in the lobby, seeded from the operating system
pub fn new_game() -> Game {
    game_with_rng(StdRng::from_os_rng())
}

/// Create a new game with a fixed random seed, for reproducible runs
pub fn new_game_with_seed(seed: u64) -> Game {
    game_with_rng(StdRng::seed_from_u64(seed))
}

fn game_with_rng(rng: StdRng) -> Game {
    Game {
        board: Board::empty(),
        seats: SeatId::ALL.map(Seat::new),
        joined_count: 0,
        current_turn: 0,
        phase: GamePhase::Lobby,
        finish_order: Vec::new(),
        bishop_counts: BishopCounts::default(),
        log: EventLog::new(),
        rng,
    }
}

/// Reset a game to lobby state
///
/// Reinitializes every entity; the random source carries over so a seeded
/// game stays on one reproducible stream across resets.
pub fn reset_game(game: &mut Game) {
    game.board = Board::empty();
    game.seats = SeatId::ALL.map(Seat::new);
    game.joined_count = 0;
    game.current_turn = 0;
    game.phase = GamePhase::Lobby;
    game.finish_order.clear();
    game.bishop_counts = BishopCounts::default();
    game.log.clear();
    game.log.record("Game reset. Waiting for players to join.");
    info!("game reset to lobby");
}

/// Mark a seat as joined
///
/// The fourth distinct join while the game is in the lobby starts it:
/// queens are deployed to the ring and the turn cursor resets to the first
/// seat. Rejoining an abandoned seat mid-game is an ordinary join and does
/// not restart anything.
pub fn join(game: &mut Game, seat: SeatId) -> GameResult<()> {
    let index = seat.index();
    if game.seats[index].joined {
        debug!(%seat, "join rejected: already joined");
        return Err(GameError::AlreadyJoined { seat });
    }

    game.seats[index].joined = true;
    game.joined_count += 1;
    game.log
        .record(format!("{} joined the lobby.", seat.label()));

    if game.joined_count as usize == game.seats.len() && game.phase == GamePhase::Lobby {
        start_game(game);
    }
    Ok(())
}

/// Mark a seat as no longer controlled by a player
///
/// Mid-game the seat's piece stays on the board; the seat merely becomes
/// unassigned for future input.
pub fn disconnect(game: &mut Game, seat: SeatId) -> GameResult<()> {
    let index = seat.index();
    if !game.seats[index].joined {
        debug!(%seat, "disconnect rejected: seat not joined");
        return Err(GameError::NotJoined { seat });
    }

    game.seats[index].joined = false;
    game.joined_count = game.joined_count.saturating_sub(1);
    game.log.record(format!("{} disconnected.", seat.label()));
    Ok(())
}

fn start_game(game: &mut Game) {
    game.phase = GamePhase::Active;
    place_initial_queens(game);
    game.current_turn = 0;
    game.log
        .record("All players joined. Queens deployed to the outer ring.");
    info!("all seats joined, game started");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourth_join_starts_the_game() {
        let mut game = new_game_with_seed(1);
        for seat in SeatId::ALL {
            assert_eq!(game.phase, GamePhase::Lobby);
            join(&mut game, seat).unwrap();
        }

        assert_eq!(game.phase, GamePhase::Active);
        assert_eq!(game.current_turn, 0);
        assert_eq!(game.joined_count, 4);
        for seat in &game.seats {
            assert!(seat.position.unwrap().is_ring());
        }
    }

    #[test]
    fn test_duplicate_join_is_rejected_without_state_change() {
        let mut game = new_game_with_seed(1);
        join(&mut game, SeatId::Green).unwrap();
        let before_count = game.joined_count;
        let before_entries = game.log.entries().len();

        let result = join(&mut game, SeatId::Green);
        assert_eq!(
            result,
            Err(GameError::AlreadyJoined {
                seat: SeatId::Green
            })
        );
        assert_eq!(game.joined_count, before_count);
        assert_eq!(game.log.entries().len(), before_entries);
    }

    #[test]
    fn test_disconnect_keeps_piece_on_board() {
        let mut game = new_game_with_seed(1);
        for seat in SeatId::ALL {
            join(&mut game, seat).unwrap();
        }

        let position = game.seat(SeatId::Blue).position.unwrap();
        disconnect(&mut game, SeatId::Blue).unwrap();

        assert!(!game.seat(SeatId::Blue).joined);
        assert_eq!(game.joined_count, 3);
        assert_eq!(game.seat(SeatId::Blue).position, Some(position));
        assert_eq!(game.board.get(position), Some(SeatId::Blue));
        assert_eq!(game.phase, GamePhase::Active);
    }

    #[test]
    fn test_rejoin_mid_game_does_not_restart() {
        let mut game = new_game_with_seed(1);
        for seat in SeatId::ALL {
            join(&mut game, seat).unwrap();
        }
        let positions: Vec<_> = game.seats.iter().map(|seat| seat.position).collect();

        disconnect(&mut game, SeatId::Red).unwrap();
        join(&mut game, SeatId::Red).unwrap();

        assert_eq!(game.phase, GamePhase::Active);
        let after: Vec<_> = game.seats.iter().map(|seat| seat.position).collect();
        assert_eq!(positions, after, "rejoin must not redeploy queens");
    }

    #[test]
    fn test_disconnect_before_join_is_rejected() {
        let mut game = new_game_with_seed(1);
        assert_eq!(
            disconnect(&mut game, SeatId::Purple),
            Err(GameError::NotJoined {
                seat: SeatId::Purple
            })
        );
    }

    #[test]
    fn test_reset_returns_to_lobby() {
        let mut game = new_game_with_seed(1);
        for seat in SeatId::ALL {
            join(&mut game, seat).unwrap();
        }
        reset_game(&mut game);

        assert_eq!(game.phase, GamePhase::Lobby);
        assert_eq!(game.joined_count, 0);
        assert!(game.finish_order.is_empty());
        assert_eq!(game.bishop_counts, BishopCounts::default());
        for seat in &game.seats {
            assert!(!seat.joined);
            assert!(seat.position.is_none());
        }
        assert_eq!(game.log.entries().len(), 1);
        assert!(game.log.latest().unwrap().message.contains("Game reset"));
    }
}
