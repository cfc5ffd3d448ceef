// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::ops;

use serde::{Deserialize, Serialize};

use crate::core::{self, Coord};

/// The set of squares threatened by one side. An AttackMap is an 8x8 grid of flags, indexed by rank and then file,
/// in the same layout as the board it was computed from.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttackMap([[bool; 8]; 8]);

impl AttackMap {
    /// Creates a new AttackMap with no squares marked.
    pub const fn empty() -> AttackMap {
        AttackMap([[false; 8]; 8])
    }

    /// Tests whether the given coordinate is marked. Coordinates off of the board are never marked.
    pub fn contains(&self, coord: Coord) -> bool {
        if !coord.in_bounds() {
            return false;
        }

        let (rank, file) = coord.index();
        self.0[rank][file]
    }

    /// Marks a coordinate. Off-board coordinates are ignored.
    pub fn insert(&mut self, coord: Coord) {
        if coord.in_bounds() {
            let (rank, file) = coord.index();
            self.0[rank][file] = true;
        }
    }

    pub fn len(&self) -> usize {
        self.0.iter().flatten().filter(|&&marked| marked).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the marked coordinates, rank by rank, starting at rank 0.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        core::coords().filter(move |&coord| self.contains(coord))
    }

    pub fn union(self, other: AttackMap) -> AttackMap {
        let mut result = self;
        for coord in other.iter() {
            result.insert(coord);
        }

        result
    }

    /// The raw grid, indexed `[rank][file]`.
    pub fn as_grid(&self) -> &[[bool; 8]; 8] {
        &self.0
    }
}

impl ops::BitOr for AttackMap {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for AttackMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                if self.contains(Coord::new(rank, file)) {
                    write!(f, " 1 ")?;
                } else {
                    write!(f, " . ")?;
                }
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
