// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::Coord;

/// A candidate move: a piece on `from` travelling to `to`. A Move says nothing about whether it is legal; ask
/// [`crate::legality::is_valid_move`] for that.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    pub const fn new(from: Coord, to: Coord) -> Move {
        Move { from, to }
    }

    /// Builds a move out of the four raw integers a front-end collects: from-rank, from-file, to-rank, to-file.
    pub const fn from_components(from_rank: i32, from_file: i32, to_rank: i32, to_file: i32) -> Move {
        Move::new(
            Coord::new(from_rank, from_file),
            Coord::new(to_rank, to_file),
        )
    }

    pub const fn source(self) -> Coord {
        self.from
    }

    pub const fn destination(self) -> Coord {
        self.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
