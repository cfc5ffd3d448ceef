// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! `arbiter` decides whether chess moves are legal.
//!
//! Given a board and a candidate move, `arbiter` checks the move against the movement rules of the piece making it,
//! accounting for blocking pieces, captures, and (for king moves) whether the king would end up in check. It also
//! computes attack maps, the set of squares one side threatens, which is what check detection is built on. It does
//! not choose moves, keep score, or track whose turn it is.

pub mod attacks;
pub mod board;
pub mod check;
pub mod core;
pub mod legality;
pub mod report;

pub use board::Board;
pub use legality::{is_valid_move, Rules};
