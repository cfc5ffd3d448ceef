// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Board geometry shared by move validation and attack generation: direction tables and the ray walker that both
//! sliding-piece legality and sliding-piece attacks are built from.

use crate::{board::Board, core::Coord};

/// A single step across the board, as `(rank delta, file delta)`.
pub type Offset = (i32, i32);

pub const ROOK_DIRECTIONS: [Offset; 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const BISHOP_DIRECTIONS: [Offset; 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub const QUEEN_DIRECTIONS: [Offset; 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub const KING_OFFSETS: [Offset; 8] = QUEEN_DIRECTIONS;

/// Returns true if the square at `to` holds a piece on the same side as the piece at `from`. An empty `from` has no
/// side and so never matches; an off-board `to` never matches either.
pub fn same_side_occupied(board: &Board, from: Coord, to: Coord) -> bool {
    match (board.piece_at(from), board.piece_at(to)) {
        (Some(mover), Some(occupant)) => mover.side == occupant.side,
        _ => false,
    }
}

/// The unit step leading from `from` to `to`, if the two share a rank, file, or diagonal and are distinct.
pub fn direction_between(from: Coord, to: Coord) -> Option<Offset> {
    let dr = to.rank.checked_sub(from.rank)?;
    let df = to.file.checked_sub(from.file)?;
    if dr == 0 && df == 0 {
        return None;
    }

    if dr != 0 && df != 0 && dr.abs() != df.abs() {
        return None;
    }

    Some((dr.signum(), df.signum()))
}

/// Walks outward from `origin` in `direction`, yielding each square in turn. The walk ends after yielding the first
/// occupied square, or when it falls off of the board. The origin itself is never yielded.
pub fn ray(board: &Board, origin: Coord, direction: Offset) -> Ray<'_> {
    Ray {
        board,
        cursor: origin,
        direction,
        blocked: false,
    }
}

pub struct Ray<'a> {
    board: &'a Board,
    cursor: Coord,
    direction: Offset,
    blocked: bool,
}

impl Iterator for Ray<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.blocked {
            return None;
        }

        let (dr, df) = self.direction;
        let next = self.cursor.offset(dr, df);
        if !next.in_bounds() || next == self.cursor {
            self.blocked = true;
            return None;
        }

        self.cursor = next;
        if !self.board.is_empty_at(next) {
            self.blocked = true;
        }

        Some(next)
    }
}

/// Returns true if `from` and `to` lie on a common line and every square strictly between them is empty. The
/// occupancy of `to` itself does not matter here. Degenerate and non-line vectors are never clear.
pub fn path_clear(board: &Board, from: Coord, to: Coord) -> bool {
    if !from.in_bounds() || !to.in_bounds() {
        return false;
    }

    match direction_between(from, to) {
        // The ray stops on the first occupied square, so it reaches `to` only if nothing stands in between.
        Some(direction) => ray(board, from, direction).any(|sq| sq == to),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(placement: &str) -> Board {
        Board::from_placement(placement).unwrap()
    }

    mod rays {
        use super::*;

        #[test]
        fn open_ray_runs_to_edge() {
            let empty = Board::empty();
            let squares: Vec<_> = ray(&empty, Coord::new(0, 0), (1, 1)).collect();
            assert_eq!(squares.len(), 7);
            assert_eq!(squares[0], Coord::new(1, 1));
            assert_eq!(squares[6], Coord::new(7, 7));
        }

        #[test]
        fn ray_includes_blocker() {
            // white rook on a1, black pawn on a4
            let pos = board("8/8/8/8/p7/8/8/R7");
            let squares: Vec<_> = ray(&pos, Coord::new(0, 0), (1, 0)).collect();
            assert_eq!(
                squares,
                vec![Coord::new(1, 0), Coord::new(2, 0), Coord::new(3, 0)]
            );
        }

        #[test]
        fn ray_from_edge_is_empty() {
            let empty = Board::empty();
            assert_eq!(ray(&empty, Coord::new(7, 3), (1, 0)).count(), 0);
        }

        #[test]
        fn zero_direction_yields_nothing() {
            let empty = Board::empty();
            assert_eq!(ray(&empty, Coord::new(3, 3), (0, 0)).count(), 0);
        }
    }

    mod paths {
        use super::*;

        #[test]
        fn direction_between_lines() {
            let d4 = Coord::new(3, 3);
            assert_eq!(direction_between(d4, Coord::new(7, 3)), Some((1, 0)));
            assert_eq!(direction_between(d4, Coord::new(0, 0)), Some((-1, -1)));
            assert_eq!(direction_between(d4, Coord::new(3, 0)), Some((0, -1)));
            assert_eq!(direction_between(d4, Coord::new(5, 4)), None);
            assert_eq!(direction_between(d4, d4), None);
        }

        #[test]
        fn destination_occupancy_is_ignored() {
            // black pawn sits on the destination, a8
            let pos = board("p7/8/8/8/8/8/8/R7");
            assert!(path_clear(&pos, Coord::new(0, 0), Coord::new(7, 0)));
        }

        #[test]
        fn blocked_in_between() {
            let pos = board("8/8/8/8/P7/8/8/R7");
            assert!(!path_clear(&pos, Coord::new(0, 0), Coord::new(7, 0)));
            assert!(path_clear(&pos, Coord::new(0, 0), Coord::new(3, 0)));
        }

        #[test]
        fn adjacent_is_always_clear() {
            let pos = Board::starting_position();
            assert!(path_clear(&pos, Coord::new(0, 0), Coord::new(1, 0)));
        }

        #[test]
        fn degenerate_is_not_clear() {
            let empty = Board::empty();
            assert!(!path_clear(&empty, Coord::new(2, 2), Coord::new(2, 2)));
            assert!(!path_clear(&empty, Coord::new(2, 2), Coord::new(3, 4)));
            assert!(!path_clear(&empty, Coord::new(2, 2), Coord::new(2, 9)));
        }
    }

    mod sides {
        use super::*;

        #[test]
        fn same_side() {
            let pos = Board::starting_position();
            assert!(same_side_occupied(&pos, Coord::new(0, 0), Coord::new(1, 0)));
            assert!(!same_side_occupied(&pos, Coord::new(0, 0), Coord::new(6, 0)));
            assert!(!same_side_occupied(&pos, Coord::new(0, 0), Coord::new(3, 0)));
        }

        #[test]
        fn empty_source_or_off_board() {
            let pos = Board::starting_position();
            assert!(!same_side_occupied(&pos, Coord::new(3, 3), Coord::new(1, 0)));
            assert!(!same_side_occupied(&pos, Coord::new(0, 0), Coord::new(-1, 0)));
        }
    }
}
