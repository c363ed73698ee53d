//! Sliding piece square generation
//!
//! Common ray-casting for queens, rooks, and bishops. A ray walks one
//! direction from the origin, collecting squares until it leaves the board or
//! meets an occupant. The occupied square itself is collected before the ray
//! stops, so blockers are both visible and capturable; squares behind a
//! blocker are never reached.

use crate::bitset::SquareSet;
use crate::board::{Board, Square};

/// Cast rays in each given direction, collecting squares into `out`
///
/// # Arguments
///
/// * `board` - Current occupancy, which terminates rays
/// * `origin` - Square the piece stands on (never added to `out`)
/// * `directions` - `(row delta, col delta)` unit steps to walk
/// * `out` - Square set to accumulate into
pub fn cast_rays(board: &Board, origin: Square, directions: &[(i8, i8)], out: &mut SquareSet) {
    for &(row_delta, col_delta) in directions {
        let mut current = origin;
        while let Some(next) = current.offset(row_delta, col_delta) {
            out.insert(next);
            if board.is_occupied(next) {
                break;
            }
            current = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ORTHOGONAL_DIRECTIONS;
    use crate::types::SeatId;

    #[test]
    fn test_ray_reaches_board_edge_when_unblocked() {
        let board = Board::empty();
        let mut out = SquareSet::new();
        cast_rays(&board, Square::new(0, 0), &ORTHOGONAL_DIRECTIONS, &mut out);

        // 7 squares down the file plus 7 along the rank
        assert_eq!(out.count(), 14);
        assert!(out.contains(Square::new(7, 0)));
        assert!(out.contains(Square::new(0, 7)));
    }

    #[test]
    fn test_ray_never_jumps_a_blocker() {
        let mut board = Board::empty();
        board.set(Square::new(0, 2), SeatId::Blue);

        let mut out = SquareSet::new();
        cast_rays(&board, Square::new(0, 0), &[(0, 1)], &mut out);

        assert!(out.contains(Square::new(0, 1)));
        assert!(out.contains(Square::new(0, 2)));
        assert!(!out.contains(Square::new(0, 3)));
        assert_eq!(out.count(), 2);
    }
}
