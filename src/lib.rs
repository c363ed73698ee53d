//! # ringchess - Authoritative Rule Engine for Four-Seat Fog-of-War Chess
//!
//! ## Overview
//!
//! Four players each control a single piece that starts as a queen on the
//! board's outer ring. A piece sees and moves only within its current rank's
//! geometry; every capture demotes the attacker one rank down the ladder
//! queen > rook > bishop > knight > pawn and redeploys it to a ring square
//! hidden from opponents. A pawn's capture eliminates the pawn itself and
//! claims the next finishing place; the game ends once all four seats have
//! finished.
//!
//! This crate is the server-side rule core only. It owns the complete game
//! state and exposes validated operations (`join`, `submit_move`, `reset`,
//! `disconnect`, snapshot queries); WebSocket transport, HTTP serving, and
//! all rendering live in separate layers that drive this engine one request
//! at a time.
//!
//! ## Architecture
//!
//! - [`types`] / [`board`] - the game aggregate, seats, and the 8x8 board
//! - [`move_gen`] - per-rank vision and legal-move square sets
//! - [`capture`] - capture resolution, demotion, elimination
//! - [`bishop_balance`] - light/dark bishop commitment balancing
//! - [`redeploy`] - opponent-blind outer-ring placement
//! - [`turn`] - game phase machine and turn cursor
//! - [`api`] - the operation surface consumed by the transport layer
//!
//! ## Example
//!
//! ```
//! use ringchess::api::{join, new_game_with_seed, snapshot, submit_move};
//! use ringchess::types::SeatId;
//!
//! let mut game = new_game_with_seed(7);
//! for seat in SeatId::ALL {
//!     join(&mut game, seat).unwrap();
//! }
//! assert!(snapshot(&game).active);
//!
//! // Green is to move; an illegal request is a no-op with an error.
//! let rejected = submit_move(&mut game, SeatId::Blue, 4, 4);
//! assert!(rejected.is_err());
//! ```

pub mod api;
pub mod bishop_balance;
pub mod bitset;
pub mod board;
pub mod capture;
pub mod constants;
pub mod error;
pub mod event_log;
pub mod move_gen;
pub mod redeploy;
pub mod turn;
pub mod types;

pub use api::{
    disconnect, join, new_game, new_game_with_seed, reset_game, seat_legal_moves,
    seat_visible_squares, snapshot, submit_move, GameSnapshot, SeatSnapshot,
};
pub use bitset::SquareSet;
pub use board::{Board, Square, SquareColor};
pub use error::{GameError, GameResult};
pub use event_log::{EventLog, LogEntry};
pub use turn::GamePhase;
pub use types::{BishopCounts, Game, PieceRank, Seat, SeatId};
