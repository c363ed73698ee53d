//! Public engine operations
//!
//! The operations the transport layer drives the engine with: game lifecycle
//! (`new_game`, `reset_game`, `join`, `disconnect`), move submission
//! (`submit_move`), and state queries (`snapshot`, per-seat vision and
//! legal-move sets).

pub mod game;
pub mod moves;
pub mod state;

pub use game::{disconnect, join, new_game, new_game_with_seed, reset_game};
pub use moves::submit_move;
pub use state::{seat_legal_moves, seat_visible_squares, snapshot, GameSnapshot, SeatSnapshot};
