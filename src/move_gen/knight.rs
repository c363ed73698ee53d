//! Knight square generation
//!
//! Knights jump in a fixed L-shape pattern and are unaffected by occupancy:
//! every in-bounds target is reachable, whether empty or occupied, so the
//! same set serves vision and movement. Own-square exclusion happens in the
//! caller's legal-move post-filter.

use crate::bitset::SquareSet;
use crate::board::Square;
use crate::constants::KNIGHT_OFFSETS;

/// Collect the in-bounds knight targets from `origin` into `out`
pub fn knight_targets(origin: Square, out: &mut SquareSet) {
    for &(row_delta, col_delta) in &KNIGHT_OFFSETS {
        if let Some(target) = origin.offset(row_delta, col_delta) {
            out.insert(target);
        }
    }
}
