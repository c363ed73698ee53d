//! Bishop color balancing
//!
//! Whenever a seat's piece becomes a bishop it must commit to playing on
//! light or dark squares, announced to all players. The policy keeps active
//! bishops spread across the two colors:
//!
//! 1. If two active bishops already committed to the color of the seat's
//!    present square, the opposite color is forced.
//! 2. Otherwise, if two already committed to the opposite color, the present
//!    square's color is forced.
//! 3. Otherwise, if any other active bishop is committed to the present
//!    square's color, the opposite color is preferred (soft one-per-color
//!    before the hard cap of two).
//! 4. Otherwise the present square's color is kept.
//!
//! A commitment that does not match the seat's present square triggers a
//! ring relocation constrained to the committed color before the commitment
//! is recorded. Recording replaces any prior commitment for the seat: the
//! old counter is decremented first, then the new one incremented. At most
//! two active bishops can ever be committed to one color.

use crate::board::SquareColor;
use crate::redeploy::relocate_to_ring;
use crate::types::{Game, PieceRank};

/// Commit a freshly demoted bishop to a square color, relocating it if its
/// present square has the wrong color
///
/// Returns the committed color, or `None` when the seat has no board
/// position (nothing to announce).
pub fn announce_bishop(game: &mut Game, seat_index: usize) -> Option<SquareColor> {
    let position = game.seats[seat_index].position?;
    let current = position.color();
    let opposite = current.opposite();

    let chosen = if game.bishop_counts.count(current) >= 2 {
        opposite
    } else if game.bishop_counts.count(opposite) >= 2 {
        current
    } else {
        let same_color_bishops = game
            .seats
            .iter()
            .enumerate()
            .filter(|(index, seat)| *index != seat_index && seat.rank == PieceRank::Bishop)
            .filter_map(|(_, seat)| seat.bishop_color)
            .filter(|color| *color == current)
            .count();
        if same_color_bishops >= 1 {
            opposite
        } else {
            current
        }
    };

    if chosen != current {
        relocate_to_ring(game, seat_index, Some(chosen));
    }

    if let Some(previous) = game.seats[seat_index].bishop_color {
        game.bishop_counts.decrement(previous);
    }
    game.seats[seat_index].bishop_color = Some(chosen);
    game.bishop_counts.increment(chosen);

    let label = game.seats[seat_index].id.label();
    game.log
        .record(format!("{label} bishop announced on {chosen} squares."));

    Some(chosen)
}
