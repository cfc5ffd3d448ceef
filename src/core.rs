// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Module `core` contains core datatypes and data structures used pervasively throughout `arbiter`.

mod attack_map;
pub mod geometry;
mod r#move;
mod types;

pub use attack_map::AttackMap;
pub use r#move::Move;
pub use types::{
    coords, in_bounds, sides, Coord, Piece, PieceKind, PieceParseError, Side, Square,
};
