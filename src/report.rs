// Copyright 2017-2022 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Serializable records of what happened to each submitted move. Front-ends print these as text or write them out
//! as JSON, one event per line.

use derive_more::From;
use serde::{Deserialize, Serialize};

use crate::{
    board::Board,
    core::{self, AttackMap, Move, Piece, Side},
    legality::Rules,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEvent {
    pub turn: u32,
    pub kind: TurnEventKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, From)]
pub enum TurnEventKind {
    Applied(AppliedMove),
    Rejected(RejectedMove),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMove {
    pub mov: Move,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub snapshot: Snapshot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedMove {
    pub mov: Move,
    /// The piece on the source square, if there was one.
    pub piece: Option<Piece>,
    pub snapshot: Snapshot,
}

/// The state of the board after a turn, with both sides' attack maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub placement: String,
    pub white_attacks: AttackMap,
    pub black_attacks: AttackMap,
    /// Whether White's king is attacked; absent if White has no king.
    pub white_in_check: Option<bool>,
    pub black_in_check: Option<bool>,
}

impl Snapshot {
    pub fn of(board: &Board) -> Snapshot {
        let white_attacks = board.attack_map(Side::White);
        let black_attacks = board.attack_map(Side::Black);
        let in_check = |side: Side| {
            let theirs = match side {
                Side::White => &black_attacks,
                Side::Black => &white_attacks,
            };
            board.king(side).map(|king| theirs.contains(king))
        };

        Snapshot {
            placement: board.as_placement(),
            white_in_check: in_check(Side::White),
            black_in_check: in_check(Side::Black),
            white_attacks,
            black_attacks,
        }
    }

    pub fn attacks(&self, side: Side) -> &AttackMap {
        match side {
            Side::White => &self.white_attacks,
            Side::Black => &self.black_attacks,
        }
    }

    /// The sides whose kings are under attack.
    pub fn sides_in_check(&self) -> Vec<Side> {
        core::sides()
            .filter(|&side| {
                let flag = match side {
                    Side::White => self.white_in_check,
                    Side::Black => self.black_in_check,
                };
                flag == Some(true)
            })
            .collect()
    }
}

impl TurnEvent {
    pub fn new(turn: u32, kind: impl Into<TurnEventKind>) -> TurnEvent {
        TurnEvent {
            turn,
            kind: kind.into(),
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self.kind, TurnEventKind::Applied(_))
    }

    pub fn snapshot(&self) -> &Snapshot {
        match &self.kind {
            TurnEventKind::Applied(applied) => &applied.snapshot,
            TurnEventKind::Rejected(rejected) => &rejected.snapshot,
        }
    }
}

/// Judges a single submitted move: if it is legal under `rules` it is applied, otherwise the board is left as it
/// was. Returns the board to continue from, along with a record of what happened.
pub fn judge(turn: u32, board: &Board, mov: Move, rules: Rules) -> (Board, TurnEvent) {
    if rules.is_valid_move(board, mov.from, mov.to) {
        // validated moves always have a piece on their source square
        let piece = board
            .piece_at(mov.from)
            .expect("valid move without a piece on its source square");
        let captured = board.piece_at(mov.to);
        let next = board.apply_move(mov.from, mov.to);
        tracing::debug!(turn, %mov, %piece, "applied move");
        let applied = AppliedMove {
            mov,
            piece,
            captured,
            snapshot: Snapshot::of(&next),
        };
        (next, TurnEvent::new(turn, applied))
    } else {
        tracing::debug!(turn, %mov, "rejected move");
        let rejected = RejectedMove {
            mov,
            piece: board.piece_at(mov.from),
            snapshot: Snapshot::of(board),
        };
        (*board, TurnEvent::new(turn, rejected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Coord, PieceKind};

    #[test]
    fn legal_move_is_applied() {
        let board = Board::starting_position();
        let (next, event) = judge(1, &board, Move::from_components(1, 4, 3, 4), Rules::Geometric);
        assert!(event.is_applied());
        assert_eq!(event.turn, 1);
        assert_eq!(next, board.apply_move(Coord::new(1, 4), Coord::new(3, 4)));
        assert_eq!(
            event.snapshot().placement,
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"
        );
        match event.kind {
            TurnEventKind::Applied(applied) => {
                assert_eq!(applied.piece, Piece::new(Side::White, PieceKind::Pawn));
                assert_eq!(applied.captured, None);
            }
            TurnEventKind::Rejected(_) => panic!("move should have been applied"),
        }
    }

    #[test]
    fn illegal_move_leaves_board() {
        let board = Board::starting_position();
        let (next, event) = judge(2, &board, Move::from_components(6, 4, 3, 4), Rules::Geometric);
        assert!(!event.is_applied());
        assert_eq!(next, board);
        match event.kind {
            TurnEventKind::Rejected(rejected) => {
                assert_eq!(rejected.piece, Some(Piece::new(Side::Black, PieceKind::Pawn)));
            }
            TurnEventKind::Applied(_) => panic!("move should have been rejected"),
        }
    }

    #[test]
    fn off_board_move_is_rejected() {
        let board = Board::starting_position();
        let (next, event) = judge(1, &board, Move::from_components(9, 9, 0, 0), Rules::Strict);
        assert!(!event.is_applied());
        assert_eq!(next, board);
    }

    #[test]
    fn capture_is_recorded() {
        let board = Board::from_placement("4k3/8/8/3p4/4P3/8/8/4K3").unwrap();
        let (_, event) = judge(1, &board, Move::from_components(3, 4, 4, 3), Rules::Geometric);
        match event.kind {
            TurnEventKind::Applied(applied) => {
                assert_eq!(
                    applied.captured,
                    Some(Piece::new(Side::Black, PieceKind::Pawn))
                );
            }
            TurnEventKind::Rejected(_) => panic!("capture should have been applied"),
        }
    }

    #[test]
    fn snapshot_check_flags() {
        let board = Board::from_placement("3r4/8/8/8/8/8/8/3K4").unwrap();
        let snapshot = Snapshot::of(&board);
        assert_eq!(snapshot.white_in_check, Some(true));
        assert_eq!(snapshot.black_in_check, None);
        assert_eq!(snapshot.sides_in_check(), vec![Side::White]);
        assert!(snapshot.attacks(Side::Black).contains(Coord::new(0, 3)));
    }

    #[test]
    fn json_shape() {
        let board = Board::starting_position();
        let (_, event) = judge(3, &board, Move::from_components(0, 1, 2, 2), Rules::Geometric);
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["turn"], 3);
        let applied = &value["kind"]["Applied"];
        assert_eq!(applied["mov"]["from"]["rank"], 0);
        assert_eq!(applied["mov"]["to"]["file"], 2);
        assert_eq!(applied["piece"]["kind"], "Knight");
        assert_eq!(applied["snapshot"]["white_in_check"], false);

        let parsed: TurnEvent = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, event);
    }
}
