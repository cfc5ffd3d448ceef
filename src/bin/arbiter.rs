// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

use anyhow::anyhow;
use arbiter::{
    core::{Move, Side},
    report::{self, TurnEvent},
    Board, Rules,
};
use structopt::StructOpt;
use tracing_subscriber::{filter::LevelFilter, EnvFilter, FmtSubscriber};

/// Referee for a game of chess played over stdin. Each turn reads four integers: from-rank, from-file, to-rank,
/// to-file, all counted from zero with White's back rank at rank 0.
#[derive(Debug, StructOpt)]
struct Options {
    /// Number of turns to play before exiting.
    #[structopt(long, default_value = "5")]
    turns: u32,

    /// Reject any move that leaves the mover's own king in check, not just king moves.
    #[structopt(long)]
    strict: bool,

    /// Write one JSON event per turn instead of drawing boards.
    #[structopt(long)]
    json: bool,

    /// Don't draw attack maps after each turn.
    #[structopt(long)]
    no_attack_maps: bool,

    /// Piece placement to start from, in FEN notation. Defaults to the standard starting position.
    #[structopt(long)]
    position: Option<String>,
}

/// Integers read from a line-oriented stream, any number per line.
struct Tokens<R> {
    lines: io::Lines<R>,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Tokens<R> {
        Tokens {
            lines: reader.lines(),
            pending: VecDeque::new(),
        }
    }

    /// The next integer, or `None` at end of input.
    fn next_int(&mut self) -> anyhow::Result<Option<i32>> {
        while self.pending.is_empty() {
            match self.lines.next() {
                Some(line) => self
                    .pending
                    .extend(line?.split_whitespace().map(str::to_owned)),
                None => return Ok(None),
            }
        }

        let token = self.pending.pop_front().unwrap_or_default();
        let value = token
            .parse::<i32>()
            .map_err(|_| anyhow!("invalid number: {:?}", token))?;
        Ok(Some(value))
    }

    /// The next move, or `None` if input ends before four integers arrive.
    fn next_move(&mut self) -> anyhow::Result<Option<Move>> {
        let mut components = [0; 4];
        for component in components.iter_mut() {
            match self.next_int()? {
                Some(value) => *component = value,
                None => return Ok(None),
            }
        }

        let [from_rank, from_file, to_rank, to_file] = components;
        Ok(Some(Move::from_components(
            from_rank, from_file, to_rank, to_file,
        )))
    }
}

fn print_turn(out: &mut impl Write, board: &Board, event: &TurnEvent, attack_maps: bool) -> io::Result<()> {
    if !event.is_applied() {
        writeln!(out, "Invalid move")?;
    }

    writeln!(out, "{}", board)?;
    let snapshot = event.snapshot();
    for side in snapshot.sides_in_check() {
        writeln!(out, "{} is in check", side)?;
    }

    if attack_maps {
        for side in [Side::White, Side::Black] {
            writeln!(out, "{} attacks:", side)?;
            writeln!(out, "{}", snapshot.attacks(side))?;
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(LevelFilter::WARN)
        .with_env_filter(EnvFilter::from_env("ARBITER_LOG"))
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let ops = Options::from_args();
    let rules = if ops.strict {
        Rules::Strict
    } else {
        Rules::Geometric
    };

    let mut board = match &ops.position {
        Some(placement) => Board::from_placement(placement)?,
        None => Board::starting_position(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if !ops.json {
        writeln!(out, "{}", board)?;
    }

    let stdin = io::stdin();
    let mut tokens = Tokens::new(stdin.lock());
    for turn in 1..=ops.turns {
        let mov = match tokens.next_move()? {
            Some(mov) => mov,
            None => {
                tracing::info!(turn, "input ended early");
                break;
            }
        };

        let (next, event) = report::judge(turn, &board, mov, rules);
        board = next;
        if ops.json {
            serde_json::to_writer(&mut out, &event)?;
            writeln!(out)?;
        } else {
            print_turn(&mut out, &board, &event, !ops.no_attack_maps)?;
        }
    }

    Ok(())
}
