// Copyright 2017-2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Attack maps: the squares a side threatens as its pieces currently stand.
//!
//! Attacks are not moves. A pawn attacks both of its forward diagonals whether or not anything stands there, and
//! never attacks the square in front of it. Sliding pieces attack up to and including the first piece on each ray,
//! regardless of whose piece it is, since a piece defends the friendly pieces it can see.

use crate::{
    board::Board,
    core::{
        geometry::{self, Offset},
        AttackMap, Coord, Piece, PieceKind, Side,
    },
};

/// Computes the set of squares attacked by `side`. The map is rebuilt from scratch on every call.
pub fn build_attack_map(board: &Board, side: Side) -> AttackMap {
    let mut attacks = AttackMap::empty();
    for (coord, piece) in board.pieces(side) {
        piece_attacks(board, coord, piece, &mut attacks);
    }

    attacks
}

/// Marks every square attacked by `piece`, standing on `coord`, into `attacks`.
pub fn piece_attacks(board: &Board, coord: Coord, piece: Piece, attacks: &mut AttackMap) {
    match piece.kind {
        PieceKind::Pawn => pawn_attacks(coord, piece.side, attacks),
        PieceKind::Knight => offset_attacks(coord, &geometry::KNIGHT_OFFSETS, attacks),
        PieceKind::Bishop => sliding_attacks(board, coord, &geometry::BISHOP_DIRECTIONS, attacks),
        PieceKind::Rook => sliding_attacks(board, coord, &geometry::ROOK_DIRECTIONS, attacks),
        PieceKind::Queen => sliding_attacks(board, coord, &geometry::QUEEN_DIRECTIONS, attacks),
        PieceKind::King => offset_attacks(coord, &geometry::KING_OFFSETS, attacks),
    }
}

fn pawn_attacks(coord: Coord, side: Side, attacks: &mut AttackMap) {
    let forward = side.forward();
    for df in [-1, 1] {
        attacks.insert(coord.offset(forward, df));
    }
}

fn offset_attacks(coord: Coord, offsets: &[Offset], attacks: &mut AttackMap) {
    for &(dr, df) in offsets {
        // off-board targets are dropped by the map itself.
        attacks.insert(coord.offset(dr, df));
    }
}

fn sliding_attacks(board: &Board, coord: Coord, directions: &[Offset], attacks: &mut AttackMap) {
    for &direction in directions {
        for target in geometry::ray(board, coord, direction) {
            attacks.insert(target);
        }
    }
}
