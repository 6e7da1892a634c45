use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chess_arbiter::game::chess_game::ChessGame;
use chess_arbiter::game::game_config::GameConfig;
use chess_arbiter::game::result_log::MemoryResultLog;
use chess_arbiter::utils::random_playout::{play_random_game, PlayoutConfig};

const SEEDS: &[u64] = &[1, 2, 3];
const MAX_PLIES: u16 = 80;

fn bench_random_playouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_playout");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);
    group.throughput(Throughput::Elements(u64::from(MAX_PLIES)));

    for &seed in SEEDS {
        let config = PlayoutConfig {
            max_plies: MAX_PLIES,
            seed,
        };
        let id = BenchmarkId::from_parameter(seed);
        group.bench_with_input(id, &config, |b, config| {
            b.iter(|| {
                let mut game = ChessGame::new(GameConfig::default(), MemoryResultLog::new());
                let result = play_random_game(&mut game, black_box(*config))
                    .expect("random playout should not hit an engine error");
                black_box(result.plies)
            });
        });
    }

    group.finish();
}

criterion_group!(playout_benches, bench_random_playouts);
criterion_main!(playout_benches);
