use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_arbiter::game_state::chess_rules::STARTING_POSITION_DIAGRAM;
use chess_arbiter::game_state::chess_types::{Color, GameState};
use chess_arbiter::move_generation::legal_move_generator::LegalMoveGenerator;
use chess_arbiter::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    diagram: &'static str,
    side_to_move: Color,
    expected_nodes: &'static [u64],
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        diagram: STARTING_POSITION_DIAGRAM,
        side_to_move: Color::White,
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_2",
        diagram: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        side_to_move: Color::White,
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "position_3",
        diagram: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        side_to_move: Color::White,
        expected_nodes: &[14, 191, 2812],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        diagram: STARTING_POSITION_DIAGRAM,
        side_to_move: Color::White,
        expected_nodes: &[20, 400, 8902, 197_281],
    },
    BenchCase {
        name: "position_2",
        diagram: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        side_to_move: Color::White,
        expected_nodes: &[48, 2039, 97_862],
    },
    BenchCase {
        name: "position_3",
        diagram: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
        side_to_move: Color::White,
        expected_nodes: &[14, 191, 2812, 43_238],
    },
];

fn selected_cases() -> &'static [BenchCase] {
    match std::env::var("ARBITER_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_perft(c: &mut Criterion) {
    let suite_name = match std::env::var("ARBITER_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    };

    let mut group = c.benchmark_group(format!("perft_{suite_name}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in selected_cases() {
        let game = GameState::from_diagram(case.diagram, case.side_to_move)
            .expect("benchmark diagram should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&LegalMoveGenerator, &game, depth).expect("perft should run");
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(&LegalMoveGenerator, black_box(&game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
