use criterion::{criterion_group, criterion_main, Criterion};
use slam_elo_processor::{
    model::{elo_model::EloModel, structures::elo_config::EloConfig},
    utils::test_utils::generate_events
};

fn player_keys(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("player {}", i)).collect()
}

fn process_matches(count_players: usize, count_matches: usize, config: EloConfig) {
    let keys = player_keys(count_players);
    let key_refs = keys.iter().map(String::as_str).collect::<Vec<_>>();
    let events = generate_events(count_matches.try_into().unwrap(), &key_refs);

    let mut model = EloModel::new(config);
    model.process(&events);
}

fn group_call(c: &mut Criterion) {
    let decay = EloConfig {
        gs_bonus_k: 2.0,
        decay_per_365d: 36.5,
        ..EloConfig::default()
    };

    let mut group = c.benchmark_group("match-processing");
    group.sample_size(25);
    group.bench_function("process: p=128,m=1000", |b| {
        b.iter(|| process_matches(128, 1_000, EloConfig::default()))
    });
    group.bench_function("process: p=128,m=10000", |b| {
        b.iter(|| process_matches(128, 10_000, EloConfig::default()))
    });
    group.bench_function("process+decay: p=128,m=10000", |b| b.iter(|| process_matches(128, 10_000, decay)));
    group.finish();
}

criterion_group!(benches, group_call);
criterion_main!(benches);
