//! Benchmarks one move decision per difficulty tier.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tiered_chess::board::color::Color;
use tiered_chess::board::Board;
use tiered_chess::chess_position;
use tiered_chess::game::Difficulty;
use tiered_chess::searcher::Searcher;

fn middlegame() -> Board {
    chess_position! {
        r..q.rk.
        ppp..ppp
        ..n..n..
        ..b.p...
        ..B.P...
        ..N..N..
        PPP..PPP
        R..Q.RK.
    }
}

fn benchmark_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("Search");
    group.sample_size(10);

    for difficulty in Difficulty::ALL.iter().copied() {
        let positions = [
            ("starting", Board::starting_position()),
            ("middlegame", middlegame()),
        ];
        for (name, position) in &positions {
            let mut board = position.clone();
            let mut searcher = Searcher::new(Some(1));
            group.bench_with_input(
                BenchmarkId::new(difficulty.to_string(), name),
                &difficulty,
                |b, &difficulty| b.iter(|| searcher.search(&mut board, Color::White, difficulty)),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, benchmark_tiers);
criterion_main!(benches);
