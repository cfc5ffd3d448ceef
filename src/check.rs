// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Check detection.

use crate::{
    attacks,
    board::Board,
    core::{Coord, Side},
};

/// Returns the square of `side`'s king.
///
/// Every board reachable from the starting position through validated moves has a king for any side that is asked
/// about, so a missing king means the caller has broken an invariant. This panics rather than returning an error.
pub fn find_king(board: &Board, side: Side) -> Coord {
    match board.king(side) {
        Some(king) => king,
        None => panic!("king not found: {} has no king on {}", side, board.as_placement()),
    }
}

/// Returns true if `side`'s king stands on a square attacked by the other side.
pub fn is_king_in_check(board: &Board, side: Side) -> bool {
    let king = find_king(board, side);
    attacks::build_attack_map(board, side.toggle()).contains(king)
}
