//! Game phase state machine and turn sequencing
//!
//! Tracks where the game is in its lifecycle and moves the turn cursor
//! forward past finished seats.

use serde::{Deserialize, Serialize};

use crate::constants::SEAT_COUNT;
use crate::types::Game;

/// Lifecycle phase of a game
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Fewer than four seats have joined; no board state exists yet
    ///
    /// Valid transitions: -> Active (the instant the 4th seat joins)
    #[default]
    Lobby,

    /// All four seats joined, queens deployed, moves being processed
    ///
    /// Valid transitions: -> Finished (the instant the 4th finishing place
    /// is assigned), -> Lobby (explicit reset)
    Active,

    /// All four seats hold finishing places
    ///
    /// Terminal until an explicit reset returns the game to Lobby.
    Finished,
}

impl GamePhase {
    /// Whether moves are currently being accepted
    #[inline]
    pub fn is_active(self) -> bool {
        matches!(self, GamePhase::Active)
    }
}

/// Advance the turn cursor to the next seat without a finishing place
///
/// Steps cyclically through the canonical seat order, at most one full cycle,
/// and stops at the first unfinished seat. Does nothing unless the game is
/// active; once every seat has finished the game is no longer active, so the
/// cursor is never left resting on a finished seat mid-game.
pub fn advance_turn(game: &mut Game) {
    if !game.phase.is_active() {
        return;
    }
    let mut next = game.current_turn;
    for _ in 0..SEAT_COUNT {
        next = (next + 1) % SEAT_COUNT;
        if game.seats[next].is_active() {
            break;
        }
    }
    game.current_turn = next;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::new_game_with_seed;

    #[test]
    fn test_advance_skips_finished_seats() {
        let mut game = new_game_with_seed(7);
        game.phase = GamePhase::Active;
        game.current_turn = 0;
        game.seats[1].finished_place = Some(1);
        game.seats[2].finished_place = Some(2);

        advance_turn(&mut game);
        assert_eq!(game.current_turn, 3);

        advance_turn(&mut game);
        assert_eq!(game.current_turn, 0);
    }

    #[test]
    fn test_advance_is_noop_outside_active_phase() {
        let mut game = new_game_with_seed(7);
        assert_eq!(game.phase, GamePhase::Lobby);
        game.current_turn = 2;

        advance_turn(&mut game);
        assert_eq!(game.current_turn, 2);

        game.phase = GamePhase::Finished;
        advance_turn(&mut game);
        assert_eq!(game.current_turn, 2);
    }
}
