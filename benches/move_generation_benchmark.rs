//! Benchmarks for legal move generation and perft counting.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tiered_chess::board::castle_rights::CastleRights;
use tiered_chess::board::color::Color;
use tiered_chess::board::Board;
use tiered_chess::chess_position;
use tiered_chess::move_generator::MoveGenerator;

fn benchmark_positions() -> Vec<(&'static str, Board)> {
    let mut middlegame = chess_position! {
        r..q.rk.
        ppp..ppp
        ..n.....
        ....p...
        ....P...
        ..N..N..
        PPP..PPP
        R..Q.RK.
    };
    middlegame.set_castle_rights(Color::White, CastleRights::none());

    vec![
        ("starting", Board::starting_position()),
        (
            "tactical",
            chess_position! {
                ....r..k
                ....q...
                ........
                ........
                ........
                ........
                .....PPP
                R.....K.
            },
        ),
        ("middlegame", middlegame),
        (
            "endgame",
            chess_position! {
                ........
                ........
                ........
                ........
                ........
                ........
                K.......
                .......k
            },
        ),
    ]
}

fn benchmark_generate_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("Legal Move Generation");
    group.sample_size(20);
    let move_generator = MoveGenerator::new();

    for (name, mut board) in benchmark_positions() {
        for color in Color::ALL.iter().copied() {
            group.bench_with_input(
                BenchmarkId::new(name, format!("{:?}", color)),
                &color,
                |b, &color| {
                    b.iter(|| {
                        black_box(move_generator.generate_moves(black_box(&mut board), color))
                    })
                },
            );
        }
    }

    group.finish();
}

fn benchmark_count_positions(c: &mut Criterion) {
    let move_generator = MoveGenerator::new();
    c.bench_function("count all possible positions to depth 3", |b| {
        b.iter(|| move_generator.count_positions(3, &mut Board::starting_position()))
    });
}

criterion_group!(benches, benchmark_generate_moves, benchmark_count_positions);
criterion_main!(benches);
