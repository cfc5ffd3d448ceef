// Copyright 2021 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use arbiter::attacks;
use arbiter::core::{Coord, Side};
use arbiter::legality;
use arbiter::Board;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const MIDDLEGAME: &str = "r1b1k2r/pp1n1ppp/2p1pn2/q2p4/1bPP4/2N1PN2/PPQB1PPP/R3KB1R";

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("attack-map-startpos", |b| {
        let pos = Board::starting_position();
        b.iter(|| attacks::build_attack_map(black_box(&pos), black_box(Side::White)));
    });

    c.bench_function("attack-map-middlegame", |b| {
        let pos = Board::from_placement(MIDDLEGAME).unwrap();
        b.iter(|| attacks::build_attack_map(black_box(&pos), black_box(Side::Black)));
    });

    c.bench_function("king-move-lookahead", |b| {
        let pos = Board::from_placement(MIDDLEGAME).unwrap();
        b.iter(|| {
            legality::is_valid_move(
                black_box(&pos),
                black_box(Coord::new(0, 4)),
                black_box(Coord::new(1, 4)),
            )
        });
    });

    c.bench_function("middlegame-movegen", |b| {
        let pos = Board::from_placement(MIDDLEGAME).unwrap();
        b.iter(|| {
            let mut moves = Vec::new();
            legality::generate_moves(black_box(Side::White), black_box(&pos), &mut moves);
            moves
        });
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
