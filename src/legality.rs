// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Move validation. A move is checked against the movement rules of the piece standing on its source square; only
//! king moves look ahead at the position the move produces, to keep the king from walking into check.
//!
//! Illegal moves, including moves to or from squares off of the board, are reported as `false`. Nothing in here
//! returns an error.

use serde::{Deserialize, Serialize};

use crate::{
    attacks,
    board::Board,
    check,
    core::{self, geometry, Coord, Move, PieceKind, Side},
};

/// Which legality rules a front-end applies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Rules {
    /// Movement rules for every piece, plus self-check prevention for king moves only. A non-king move that exposes
    /// its own king (a pinned piece stepping off of its pin, say) is accepted.
    #[default]
    Geometric,
    /// As `Geometric`, but any move that leaves the mover's own king attacked is rejected.
    Strict,
}

impl Rules {
    pub fn is_valid_move(self, board: &Board, from: Coord, to: Coord) -> bool {
        match self {
            Rules::Geometric => is_valid_move(board, from, to),
            Rules::Strict => is_valid_move(board, from, to) && !exposes_own_king(board, from, to),
        }
    }
}

/// Returns true if the piece on `from` may legally move to `to`.
pub fn is_valid_move(board: &Board, from: Coord, to: Coord) -> bool {
    let piece = match board.piece_at(from) {
        Some(piece) => piece,
        None => {
            tracing::trace!(%from, %to, "rejected: no piece on source square");
            return false;
        }
    };

    if !to.in_bounds() {
        tracing::trace!(%from, %to, "rejected: destination off of the board");
        return false;
    }

    if from == to {
        tracing::trace!(%from, %to, "rejected: piece does not move");
        return false;
    }

    let valid = match piece.kind {
        PieceKind::Pawn => valid_pawn_move(board, piece.side, from, to),
        PieceKind::Knight => valid_knight_move(board, from, to),
        PieceKind::Bishop => valid_bishop_move(board, from, to),
        PieceKind::Rook => valid_rook_move(board, from, to),
        PieceKind::Queen => valid_queen_move(board, from, to),
        PieceKind::King => valid_king_move(board, piece.side, from, to),
    };

    if !valid {
        tracing::trace!(%from, %to, piece = %piece, "rejected: not a legal move for this piece");
    }

    valid
}

// The per-piece rules below assume `from` holds the piece in question and both coordinates are on the board.

fn valid_pawn_move(board: &Board, side: Side, from: Coord, to: Coord) -> bool {
    let forward = side.forward();
    let dr = to.rank - from.rank;
    let df = to.file - from.file;

    if df == 0 {
        if !board.is_empty_at(to) {
            return false;
        }

        if dr == forward {
            return true;
        }

        return dr == 2 * forward
            && from.rank == side.pawn_start_rank()
            && board.is_empty_at(from.offset(forward, 0));
    }

    if dr == forward && df.abs() == 1 {
        return matches!(board.piece_at(to), Some(target) if target.side != side);
    }

    false
}

fn valid_knight_move(board: &Board, from: Coord, to: Coord) -> bool {
    let dr = (to.rank - from.rank).abs();
    let df = (to.file - from.file).abs();
    let shape = (dr == 2 && df == 1) || (dr == 1 && df == 2);
    shape && !geometry::same_side_occupied(board, from, to)
}

fn valid_bishop_move(board: &Board, from: Coord, to: Coord) -> bool {
    let dr = (to.rank - from.rank).abs();
    let df = (to.file - from.file).abs();
    dr == df
        && dr != 0
        && !geometry::same_side_occupied(board, from, to)
        && geometry::path_clear(board, from, to)
}

fn valid_rook_move(board: &Board, from: Coord, to: Coord) -> bool {
    let same_rank = from.rank == to.rank;
    let same_file = from.file == to.file;
    same_rank != same_file
        && !geometry::same_side_occupied(board, from, to)
        && geometry::path_clear(board, from, to)
}

fn valid_queen_move(board: &Board, from: Coord, to: Coord) -> bool {
    valid_rook_move(board, from, to) || valid_bishop_move(board, from, to)
}

fn valid_king_move(board: &Board, side: Side, from: Coord, to: Coord) -> bool {
    let dr = (to.rank - from.rank).abs();
    let df = (to.file - from.file).abs();
    if dr > 1 || df > 1 || (dr == 0 && df == 0) {
        return false;
    }

    if geometry::same_side_occupied(board, from, to) {
        return false;
    }

    let next = board.apply_move(from, to);
    if check::is_king_in_check(&next, side) {
        tracing::debug!(%from, %to, %side, "rejected: king would be in check");
        return false;
    }

    true
}

/// Returns true if, after playing `from` to `to`, the mover's king is attacked. A side without a king has nothing to
/// expose.
fn exposes_own_king(board: &Board, from: Coord, to: Coord) -> bool {
    let side = match board.piece_at(from) {
        Some(piece) => piece.side,
        None => return false,
    };

    let next = board.apply_move(from, to);
    match next.king(side) {
        Some(king) => attacks::build_attack_map(&next, side.toggle()).contains(king),
        None => false,
    }
}

/// Every square the piece on `from` may legally move to, in rank-major order. Empty if `from` holds no piece.
pub fn legal_destinations(board: &Board, from: Coord) -> Vec<Coord> {
    if board.piece_at(from).is_none() {
        return vec![];
    }

    core::coords()
        .filter(|&to| is_valid_move(board, from, to))
        .collect()
}

/// Collects every legal move available to the pieces of `side` into `moves`.
pub fn generate_moves(side: Side, board: &Board, moves: &mut Vec<Move>) {
    generate_moves_with(Rules::Geometric, side, board, moves)
}

/// As [`generate_moves`], under the given rules.
pub fn generate_moves_with(rules: Rules, side: Side, board: &Board, moves: &mut Vec<Move>) {
    for (from, _) in board.pieces(side) {
        for to in core::coords() {
            if rules.is_valid_move(board, from, to) {
                moves.push(Move::new(from, to));
            }
        }
    }
}
