// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{
    convert::TryFrom,
    fmt::{self, Write},
};

use thiserror::Error;

use crate::{
    attacks, check,
    core::{self, *},
    legality,
};

/// A chessboard: 64 squares, each either empty or holding a single piece. Boards are plain values. Every operation
/// that changes the board produces a new Board and leaves the original alone, so a board can be freely copied and
/// handed to hypothetical "what if" queries without fear of the original changing underneath anyone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    /// Squares indexed by rank, then by file. Rank 0 is White's back rank.
    squares: [[Square; 8]; 8],
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The standard starting position.
pub fn standard_initial_board() -> Board {
    Board::starting_position()
}

/// Produces the board that results from moving whatever is on `from` to `to`. See [`Board::apply_move`].
pub fn apply_move(board: &Board, from: Coord, to: Coord) -> Board {
    board.apply_move(from, to)
}

impl Board {
    /// A board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            squares: [[Square::Empty; 8]; 8],
        }
    }

    /// The standard starting position, with White on ranks 0 and 1 and Black on ranks 6 and 7.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][file] = Piece::new(Side::White, kind).into();
            board.squares[1][file] = Piece::new(Side::White, PieceKind::Pawn).into();
            board.squares[6][file] = Piece::new(Side::Black, PieceKind::Pawn).into();
            board.squares[7][file] = Piece::new(Side::Black, kind).into();
        }

        board
    }

    /// Returns a copy of this board with `piece` placed on `coord`, replacing anything already there.
    pub fn with_piece(&self, coord: Coord, piece: Piece) -> Board {
        let mut board = *self;
        let (rank, file) = coord.index();
        board.squares[rank][file] = Square::Occupied(piece);
        board
    }

    /// Moves the contents of `from` onto `to`, returning the new board. The square at `from` becomes empty and
    /// whatever stood on `to` is overwritten. No legality checking happens here; validate the move with
    /// [`Board::is_valid_move`] first.
    ///
    /// Both coordinates must be on the board.
    pub fn apply_move(&self, from: Coord, to: Coord) -> Board {
        assert!(
            from.in_bounds() && to.in_bounds(),
            "invalid move: {} -> {} leaves the board",
            from,
            to
        );

        let mut board = *self;
        let (from_rank, from_file) = from.index();
        let (to_rank, to_file) = to.index();
        let moving = board.squares[from_rank][from_file];
        board.squares[from_rank][from_file] = Square::Empty;
        board.squares[to_rank][to_file] = moving;
        board
    }

    /// Returns the square at `coord`, or `None` if `coord` is off of the board.
    pub fn get(&self, coord: Coord) -> Option<Square> {
        if !coord.in_bounds() {
            return None;
        }

        let (rank, file) = coord.index();
        Some(self.squares[rank][file])
    }

    /// Returns the piece at `coord`, if the coordinate is on the board and the square is occupied.
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.get(coord).and_then(Square::piece)
    }

    /// Returns true if `coord` is on the board and holds no piece.
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Square::Empty))
    }

    /// Iterates over every piece belonging to `side`, along with the square it stands on.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        core::coords().filter_map(move |coord| match self.piece_at(coord) {
            Some(piece) if piece.side == side => Some((coord, piece)),
            _ => None,
        })
    }

    pub fn king(&self, side: Side) -> Option<Coord> {
        self.pieces(side)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(coord, _)| coord)
    }

    pub fn is_valid_move(&self, mov: Move) -> bool {
        legality::is_valid_move(self, mov.from, mov.to)
    }

    pub fn is_check(&self, side: Side) -> bool {
        check::is_king_in_check(self, side)
    }

    pub fn attack_map(&self, side: Side) -> AttackMap {
        attacks::build_attack_map(self, side)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

//
// Piece placement parsing and generation.
//
// Boards are written using the piece placement field of FEN: ranks from 8 down to 1, separated by slashes, with
// upper-case letters for White, lower-case for Black, and digits counting runs of empty squares. None of the other
// FEN fields mean anything here, since a Board carries no side to move, castle rights, or clocks.
//

/// Possible errors that can arise when parsing a piece placement string into a `Board`.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum PlacementParseError {
    #[error("unexpected char: {0}")]
    UnexpectedChar(char),
    #[error("unexpected EOF while reading")]
    UnexpectedEnd,
    #[error("invalid digit")]
    InvalidDigit,
    #[error("rank does not sum to 8")]
    RankDoesNotSumToEight,
    #[error("unknown piece: {0}")]
    UnknownPiece(char),
    #[error("trailing input after rank 1: {0}")]
    TrailingInput(char),
}

impl Board {
    /// Constructs a new board from a piece placement string.
    pub fn from_placement(placement: impl AsRef<str>) -> Result<Board, PlacementParseError> {
        let mut board = Board::empty();
        let iter = &mut placement.as_ref().chars().peekable();
        for rank in (0..8).rev() {
            let mut file = 0;
            while file <= 7 {
                let c = *iter.peek().ok_or(PlacementParseError::UnexpectedEnd)?;
                // digits 1 through 8 indicate empty squares.
                if c.is_ascii_digit() {
                    if !('1'..='8').contains(&c) {
                        return Err(PlacementParseError::InvalidDigit);
                    }

                    file += c as i32 - '0' as i32;
                    if file > 8 {
                        return Err(PlacementParseError::RankDoesNotSumToEight);
                    }

                    iter.next();
                    continue;
                }

                if c == '/' {
                    return Err(PlacementParseError::RankDoesNotSumToEight);
                }

                // if it's not a digit, it represents a piece.
                let piece =
                    Piece::try_from(c).map_err(|_| PlacementParseError::UnknownPiece(c))?;
                board.squares[rank][file as usize] = Square::Occupied(piece);
                iter.next();
                file += 1;
            }

            if rank != 0 {
                match iter.next() {
                    Some('/') => {}
                    Some(c) => return Err(PlacementParseError::UnexpectedChar(c)),
                    None => return Err(PlacementParseError::UnexpectedEnd),
                }
            }
        }

        if let Some(c) = iter.next() {
            return Err(PlacementParseError::TrailingInput(c));
        }

        Ok(board)
    }

    pub fn as_placement(&self) -> String {
        let mut buf = String::new();
        for rank in (0..8).rev() {
            let mut empty_squares = 0;
            for file in 0..8 {
                match self.piece_at(Coord::new(rank, file)) {
                    Some(piece) => {
                        if empty_squares != 0 {
                            write!(&mut buf, "{}", empty_squares).unwrap();
                        }
                        write!(&mut buf, "{}", piece).unwrap();
                        empty_squares = 0;
                    }
                    None => empty_squares += 1,
                }
            }

            if empty_squares != 0 {
                write!(&mut buf, "{}", empty_squares).unwrap();
            }

            if rank != 0 {
                buf.push('/');
            }
        }

        buf
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in (0..8usize).rev() {
            for square in &self.squares[rank] {
                write!(f, " {} ", square)?;
            }

            writeln!(f, "| {}", rank + 1)?;
        }

        for _ in 0..8 {
            write!(f, "---")?;
        }

        writeln!(f)?;
        for file in b'a'..=b'h' {
            write!(f, " {} ", file as char)?;
        }

        writeln!(f)?;
        Ok(())
    }
}
