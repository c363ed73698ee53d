//! Capture resolution and demotion
//!
//! A validated move either relocates the mover onto an empty square or lands
//! on an opponent. Landing on an opponent is a capture, and the outcome
//! depends on the attacker's rank:
//!
//! - **Pawn**: the attacker itself leaves the board permanently and claims
//!   the next finishing place. The fourth finish ends the game.
//! - **Any other rank**: the attacker is demoted one step, redeployed to the
//!   outer ring, and (when the new rank is bishop) run through bishop color
//!   balancing.
//!
//! Either way the defender is displaced from the contested square but its
//! seat record is otherwise untouched: it keeps its rank, is not finished,
//! is not redeployed, and its recorded position is left stale. See DESIGN.md
//! for the background on this deliberately preserved behavior.

use crate::bishop_balance::announce_bishop;
use crate::board::Square;
use crate::constants::SEAT_COUNT;
use crate::redeploy::relocate_to_ring;
use crate::turn::GamePhase;
use crate::types::{Game, PieceRank, SeatId};

/// Apply a validated move for the seat at `mover_index`
///
/// The destination must already have passed legal-move validation. An empty
/// destination is a plain relocation; an opponent-held destination resolves
/// as a capture.
pub fn execute_move(game: &mut Game, mover_index: usize, dest: Square) {
    let Some(from) = game.seats[mover_index].position else {
        return;
    };
    let mover = game.seats[mover_index].id;

    match game.board.get(dest) {
        Some(occupant) if occupant != mover => resolve_capture(game, mover_index, occupant, dest),
        _ => {
            game.board.clear(from);
            game.board.set(dest, mover);
            game.seats[mover_index].position = Some(dest);
            let label = mover.label();
            game.log.record(format!("{label} moved to {dest}."));
        }
    }
}

/// Demote a seat's piece one rank, releasing a bishop commitment the piece
/// no longer holds
pub fn demote(game: &mut Game, seat_index: usize) {
    let seat = &mut game.seats[seat_index];
    seat.rank = seat.rank.demoted();
    if seat.rank != PieceRank::Bishop {
        if let Some(color) = seat.bishop_color.take() {
            game.bishop_counts.decrement(color);
        }
    }
}

fn resolve_capture(game: &mut Game, attacker_index: usize, victim: SeatId, dest: Square) {
    // The defender always loses the contested square. Its recorded position
    // is intentionally left pointing at it.
    game.board.clear(dest);

    let attacker_label = game.seats[attacker_index].id.label();
    let victim_label = victim.label();

    if game.seats[attacker_index].rank == PieceRank::Pawn {
        if let Some(origin) = game.seats[attacker_index].position.take() {
            game.board.clear(origin);
        }
        if let Some(color) = game.seats[attacker_index].bishop_color.take() {
            game.bishop_counts.decrement(color);
        }

        let place = game.finish_order.len() as u8 + 1;
        game.seats[attacker_index].finished_place = Some(place);
        game.finish_order.push(game.seats[attacker_index].id);
        game.log.record(format!(
            "{attacker_label} pawn captured at {dest} and claimed place {place}!"
        ));

        if game.finish_order.len() == SEAT_COUNT {
            game.phase = GamePhase::Finished;
            game.log.record("All places taken. Game over.");
        }
        return;
    }

    demote(game, attacker_index);
    relocate_to_ring(game, attacker_index, None);
    if game.seats[attacker_index].rank == PieceRank::Bishop {
        announce_bishop(game, attacker_index);
    }

    let new_rank = game.seats[attacker_index].rank;
    game.log.record(format!(
        "{attacker_label} captured {victim_label} on {dest}, downgraded to {new_rank}, \
         and redeployed to the outer ring."
    ));
}
