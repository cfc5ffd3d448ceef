// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{convert::TryFrom, fmt};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PieceParseError {
    #[error("invalid char: {0}")]
    InvalidChar(char),
}

/// Returns true if the given rank and file both lie on the board.
pub const fn in_bounds(rank: i32, file: i32) -> bool {
    rank >= 0 && rank < 8 && file >= 0 && file < 8
}

/// A coordinate on the chessboard, given as a rank and a file. Both components are plain integers so that
/// coordinates coming from the outside world can be represented before they are checked; a coordinate is only
/// meaningful for board access if [`Coord::in_bounds`] holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub rank: i32,
    pub file: i32,
}

impl Coord {
    pub const fn new(rank: i32, file: i32) -> Coord {
        Coord { rank, file }
    }

    pub const fn in_bounds(self) -> bool {
        in_bounds(self.rank, self.file)
    }

    /// Returns the coordinate `(dr, df)` away from this one. The result may lie off of the board.
    pub const fn offset(self, dr: i32, df: i32) -> Coord {
        Coord::new(self.rank.saturating_add(dr), self.file.saturating_add(df))
    }

    /// The array indices of this coordinate. Only valid for in-bounds coordinates.
    pub(crate) fn index(self) -> (usize, usize) {
        debug_assert!(self.in_bounds(), "indexing with out-of-bounds coordinate {:?}", self);
        (self.rank as usize, self.file as usize)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_bounds() {
            let file = (b'a' + self.file as u8) as char;
            write!(f, "{}{}", file, self.rank + 1)
        } else {
            write!(f, "({}, {})", self.rank, self.file)
        }
    }
}

/// Iterates over every coordinate on the board, rank by rank, starting at rank 0.
pub fn coords() -> impl DoubleEndedIterator<Item = Coord> {
    (0..64).map(|i| Coord::new(i / 8, i % 8))
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn toggle(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// The rank direction this side's pawns advance in.
    pub const fn forward(self) -> i32 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    /// The rank this side's pawns start on, from which they may advance two squares.
    pub const fn pawn_start_rank(self) -> i32 {
        match self {
            Side::White => 1,
            Side::Black => 6,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };

        write!(f, "{}", c)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(side: Side, kind: PieceKind) -> Piece {
        Piece { side, kind }
    }
}

impl TryFrom<char> for Piece {
    type Error = PieceParseError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        let kind = match value.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return Err(PieceParseError::InvalidChar(value)),
        };

        let side = if value.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };

        Ok(Piece { side, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.side {
            Side::White => write!(f, "{}", self.kind.to_string().to_ascii_uppercase()),
            Side::Black => write!(f, "{}", self.kind),
        }
    }
}

/// A single cell of the chessboard: either empty, or holding exactly one piece.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Square {
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Square::Empty => None,
            Square::Occupied(piece) => Some(piece),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// The side of the piece on this square, if there is one.
    pub const fn side(self) -> Option<Side> {
        match self {
            Square::Empty => None,
            Square::Occupied(piece) => Some(piece.side),
        }
    }
}

impl From<Piece> for Square {
    fn from(piece: Piece) -> Square {
        Square::Occupied(piece)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Square::Empty => write!(f, "."),
            Square::Occupied(piece) => write!(f, "{}", piece),
        }
    }
}

pub fn sides() -> ::std::vec::IntoIter<Side> {
    vec![Side::White, Side::Black].into_iter()
}
