mod common;

use approx::assert_abs_diff_eq;
use chrono::{Duration, NaiveDate};
use slam_elo_processor::{
    model::{
        elo_model::{compute_elo_timeseries, EloModel},
        structures::elo_config::EloConfig
    },
    utils::test_utils::{generate_event, generate_events}
};

use crate::common::init_test_env;

const PLAYERS: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];

fn day(n: i64) -> Option<NaiveDate> {
    Some(NaiveDate::from_ymd_opt(2000, 1, 17).unwrap() + Duration::days(n))
}

#[test]
fn test_two_match_scenario() {
    init_test_env();
    let events = vec![
        generate_event("t1", day(1), Some(1), "R128", "A", "B"),
        generate_event("t2", day(2), Some(1), "R128", "B", "A"),
    ];

    let timeseries = compute_elo_timeseries(&events, EloConfig::default());

    assert_eq!(timeseries.len(), 2);
    assert_eq!(timeseries[0].exp_winner, 0.5);
    assert_eq!(timeseries[0].winner_elo_post, 1516.0);
    assert_eq!(timeseries[0].loser_elo_post, 1484.0);

    let second = &timeseries[1];
    assert_eq!(second.winner_key, "B");
    assert_eq!(second.winner_elo_pre, 1484.0);
    assert_eq!(second.loser_elo_pre, 1516.0);
    assert_abs_diff_eq!(second.exp_winner, 0.4541, epsilon = 1e-4);
    assert_abs_diff_eq!(second.winner_elo_post, 1501.47, epsilon = 1e-2);
    assert_abs_diff_eq!(second.loser_elo_post, 1498.53, epsilon = 1e-2);
}

#[test]
fn test_expectations_sum_to_one() {
    init_test_env();
    let config = EloConfig {
        gs_bonus_k: 3.0,
        decay_per_365d: 20.0,
        ..EloConfig::default()
    };

    let timeseries = compute_elo_timeseries(&generate_events(500, &PLAYERS), config);

    for snapshot in &timeseries {
        assert_eq!(snapshot.exp_winner + snapshot.exp_loser, 1.0);
    }
}

#[test]
fn test_zero_sum_without_decay() {
    init_test_env();
    let config = EloConfig {
        gs_bonus_k: 4.0,
        ..EloConfig::default()
    };

    let timeseries = compute_elo_timeseries(&generate_events(500, &PLAYERS), config);

    for snapshot in &timeseries {
        assert_abs_diff_eq!(snapshot.winner_delta() + snapshot.loser_delta(), 0.0, epsilon = 1e-9);
        assert!(snapshot.winner_delta() > 0.0);
        assert!(snapshot.loser_delta() < 0.0);
    }
}

#[test]
fn test_pre_rating_matches_previous_post_rating() {
    init_test_env();
    let timeseries = compute_elo_timeseries(&generate_events(300, &PLAYERS), EloConfig::default());

    let mut last_post = std::collections::HashMap::new();
    for snapshot in &timeseries {
        let expected_winner = *last_post.get(&snapshot.winner_key).unwrap_or(&1500.0);
        let expected_loser = *last_post.get(&snapshot.loser_key).unwrap_or(&1500.0);

        assert_eq!(snapshot.winner_elo_pre, expected_winner);
        assert_eq!(snapshot.loser_elo_pre, expected_loser);

        last_post.insert(snapshot.winner_key.clone(), snapshot.winner_elo_post);
        last_post.insert(snapshot.loser_key.clone(), snapshot.loser_elo_post);
    }
}

#[test]
fn test_larger_base_k_moves_ratings_further() {
    init_test_env();
    let event = generate_event("t1", day(0), Some(1), "R64", "a", "b");

    let mut previous = 0.0;
    for base_k in [8.0, 16.0, 32.0, 64.0] {
        let mut model = EloModel::new(EloConfig {
            base_k,
            ..EloConfig::default()
        });
        // Give the winner an edge so the expectation is not trivially 0.5
        model.rating_store.commit("a", 1650.0);

        let delta = model.process_match(&event).winner_delta().abs();
        assert!(delta > previous);
        previous = delta;
    }
}

#[test]
fn test_replay_is_bit_identical() {
    init_test_env();
    let config = EloConfig {
        gs_bonus_k: 2.5,
        decay_per_365d: 36.5,
        ..EloConfig::default()
    };
    let events = generate_events(400, &PLAYERS);

    let first = compute_elo_timeseries(&events, config);
    let second = compute_elo_timeseries(&events, config);

    assert_eq!(first, second);
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.winner_elo_post.to_bits(), b.winner_elo_post.to_bits());
        assert_eq!(a.loser_elo_post.to_bits(), b.loser_elo_post.to_bits());
    }
}

#[test]
fn test_input_order_does_not_matter_when_keys_differ() {
    init_test_env();
    let events = generate_events(100, &PLAYERS);
    let mut reversed = events.clone();
    reversed.reverse();

    let forward = compute_elo_timeseries(&events, EloConfig::default());
    let backward = compute_elo_timeseries(&reversed, EloConfig::default());

    assert_eq!(forward, backward);
}

#[test]
fn test_decay_scenario() {
    init_test_env();
    let config = EloConfig {
        decay_per_365d: 36.5,
        ..EloConfig::default()
    };
    let events = vec![
        generate_event("t1", day(0), Some(1), "R128", "a", "b"),
        generate_event("t2", day(100), Some(1), "R128", "c", "a"),
    ];

    let timeseries = compute_elo_timeseries(&events, config);

    // 1516 after the first match, 10 points lost to 100 idle days
    assert_eq!(timeseries[1].loser_elo_pre, 1506.0);
    assert_eq!(timeseries[1].winner_elo_pre, 1500.0);
}

#[test]
fn test_decay_breaks_zero_sum() {
    init_test_env();
    let config = EloConfig {
        decay_per_365d: 36.5,
        ..EloConfig::default()
    };
    let events = vec![
        generate_event("t1", day(0), Some(1), "R128", "a", "b"),
        generate_event("t2", day(365), Some(1), "R128", "a", "b"),
    ];

    let mut model = EloModel::new(config);
    model.process(&events);

    let total: f64 = model.rating_store.iter().map(|r| r.rating).sum();
    assert_abs_diff_eq!(total, 3000.0 - 2.0 * 36.5, epsilon = 1e-9);
}

#[test]
fn test_undated_matches_are_processed_last() {
    init_test_env();
    let config = EloConfig {
        decay_per_365d: 36.5,
        ..EloConfig::default()
    };
    let events = vec![
        generate_event("t0", None, Some(1), "F", "b", "a"),
        generate_event("t1", day(0), Some(1), "F", "a", "b"),
    ];

    let mut model = EloModel::new(config);
    model.process(&events);

    let timeseries = model.timeseries();
    assert_eq!(timeseries[0].tourney_id, "t1");
    assert_eq!(timeseries[1].tourney_id, "t0");
    assert_eq!(timeseries[1].tourney_date, None);
    // No decay for the undated match, ratings still updated
    assert_eq!(timeseries[1].winner_elo_pre, 1484.0);
    assert!(timeseries[1].winner_elo_post > 1484.0);
    assert_eq!(model.rating_store.last_active("b"), day(0));
}

#[test]
fn test_round_bonus_in_timeseries() {
    init_test_env();
    let config = EloConfig {
        gs_bonus_k: 2.0,
        ..EloConfig::default()
    };
    let events = vec![
        generate_event("t1", day(0), Some(1), "R128", "a", "b"),
        generate_event("t1", day(0), Some(2), "QF", "c", "d"),
        generate_event("t1", day(0), Some(3), "RR", "e", "f"),
        generate_event("t1", day(0), Some(4), "F", "g", "h"),
    ];

    let k_used = compute_elo_timeseries(&events, config)
        .iter()
        .map(|s| s.k_used)
        .collect::<Vec<_>>();

    assert_eq!(k_used, vec![32.0, 42.0, 32.0, 48.0]);
}

#[test]
fn test_leaderboard_after_processing() {
    init_test_env();
    let events = vec![
        generate_event("t1", day(0), Some(1), "SF", "a", "b"),
        generate_event("t1", day(0), Some(2), "SF", "c", "d"),
        generate_event("t1", day(2), Some(3), "F", "a", "c"),
    ];

    let mut model = EloModel::new(EloConfig::default());
    model.process(&events);
    let leaderboard = model.leaderboard();

    assert_eq!(leaderboard.len(), 4);
    assert_eq!(leaderboard[0].key, "a");
    assert_eq!(leaderboard[0].rank, 1);
    assert_eq!(leaderboard[0].matches_played, 2);
    assert_eq!(leaderboard[0].first_active, day(0));
    assert_eq!(leaderboard[0].last_active, day(2));
    assert_eq!(leaderboard[3].rank, 4);
}
