use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_rules::move_generation::legal_move_generator::{all_legal_moves, evaluate_terminal_status};
use chess_rules::move_generation::perft::perft_legal;
use chess_rules::utils::random_playout::{random_playout, PlayoutConfig};
use chess_rules::GameState;

const START_NODES: &[u64] = &[20, 400, 8902, 197_281];

fn max_depth() -> usize {
    match std::env::var("CHESS_RULES_BENCH_DEPTH") {
        Ok(value) => value
            .parse::<usize>()
            .unwrap_or(3)
            .clamp(1, START_NODES.len()),
        Err(_) => 3,
    }
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_startpos");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    let game = GameState::new_game();
    for (depth_idx, expected_nodes) in START_NODES.iter().take(max_depth()).enumerate() {
        let depth = (depth_idx + 1) as u8;

        // Correctness guard before benchmarking.
        let warmup = perft_legal(&game, depth).expect("perft should run");
        assert_eq!(warmup.nodes as u64, *expected_nodes, "node mismatch at depth {depth}");

        group.throughput(Throughput::Elements(*expected_nodes));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("d{depth}")),
            expected_nodes,
            |b, expected| {
                b.iter(|| {
                    let count = perft_legal(black_box(&game), black_box(depth))
                        .expect("perft benchmark run should succeed");
                    assert_eq!(count.nodes as u64, *expected);
                    black_box(count.nodes)
                });
            },
        );
    }

    group.finish();
}

fn bench_midgame_queries(c: &mut Criterion) {
    let start = GameState::new_game();
    let report = random_playout(
        &start,
        &PlayoutConfig {
            max_plies: 30,
            seed: 42,
        },
        |_, _, _, _| {},
    )
    .expect("playout should run");
    let position = report.final_state;

    c.bench_function("all_legal_moves_midgame", |b| {
        b.iter(|| black_box(all_legal_moves(black_box(&position)).len()))
    });
    c.bench_function("evaluate_terminal_status_midgame", |b| {
        b.iter(|| black_box(evaluate_terminal_status(black_box(&position))))
    });
}

criterion_group!(legal_move_benches, bench_perft, bench_midgame_queries);
criterion_main!(legal_move_benches);
