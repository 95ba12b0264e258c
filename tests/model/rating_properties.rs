#[path = "../common/mod.rs"]
mod common;

use approx::assert_abs_diff_eq;
use tennis_glicko::{
    model::{
        deviation::deviation_from_sets,
        error::RatingError,
        scale::{to_rating, to_score},
        structures::match_type::MatchType::{Doubles, Singles},
        update_user_score,
        weight::match_weight,
        TennisModel
    },
    utils::test_utils::{generate_match_record, generate_match_records, generate_player_histories}
};

fn is_two_decimals(value: f64) -> bool {
    ((value * 100.0).round() - value * 100.0).abs() < 1e-6
}

#[test]
fn test_scale_round_trip() {
    common::init_test_env();

    for i in 0..=3000 {
        let score = 2.0 + i as f64 * 0.001;
        assert_abs_diff_eq!(to_score(to_rating(score)), score, epsilon = 1e-9);
    }
}

#[test]
fn test_deviation_bounds() {
    assert_abs_diff_eq!(deviation_from_sets(0), 350.0);
    assert_abs_diff_eq!(deviation_from_sets(10_000), 60.0);

    let deviations: Vec<f64> = (0..100).map(deviation_from_sets).collect();
    assert!(deviations.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn test_random_matches_stay_in_range() {
    common::init_test_env();
    let model = TennisModel::default();

    for record in generate_match_records(500, 7) {
        let update = model.update(&record).unwrap();

        assert!(
            (2.0..=5.0).contains(&update.updated_score),
            "score {} out of range for {:?}",
            update.updated_score,
            record
        );
        assert!(is_two_decimals(update.updated_score));
        assert!(update.weight > 0.0);
        assert!((30.0..=350.0).contains(&update.deviation));
    }
}

#[test]
fn test_wins_never_lower_the_score() {
    let model = TennisModel::default();

    for record in generate_match_records(300, 11) {
        let update = model.update(&record).unwrap();
        let clamped_start = record.user_score.clamp(2.0, 5.0);

        if record.user_win {
            assert!(update.updated_score >= clamped_start - 0.005, "{:?}", record);
        } else {
            assert!(update.updated_score <= clamped_start + 0.005, "{:?}", record);
        }
    }
}

#[test]
fn test_deterministic() {
    let model = TennisModel::default();

    for record in generate_match_records(100, 3) {
        let first = model.update(&record).unwrap();
        let second = model.update(&record).unwrap();

        assert_eq!(first.updated_score.to_bits(), second.updated_score.to_bits());
        assert_eq!(first, second);
    }
}

#[test]
fn test_set_score_formats() {
    assert!(match_weight(Singles, "6-4").is_ok());
    assert!(match_weight(Singles, "7:5").is_ok());
    assert!(match_weight(Singles, "10 7").is_ok());
    assert_eq!(
        match_weight(Singles, "64"),
        Err(RatingError::InvalidSetScore("64".to_string()))
    );
}

#[test]
fn test_doubles_weight_ratio() {
    for score in ["6-4", "6-1", "10-8", "3:6"] {
        let singles = match_weight(Singles, score).unwrap();
        let doubles = match_weight(Doubles, score).unwrap();
        assert_abs_diff_eq!(doubles / singles, 0.85, epsilon = 1e-12);
    }
}

#[test]
fn test_female_win_against_stronger_opponent() {
    let record = generate_match_record(3.5, 3.8, true, true, 5, "6-4", Singles);
    let updated = update_user_score(&record).unwrap();

    assert_abs_diff_eq!(updated, 4.29);
    assert!(updated > record.user_score);
}

#[test]
fn test_doubles_tiebreak_gains_less_than_singles_set() {
    let doubles = generate_match_record(3.5, 3.6, false, true, 12, "10-7", Doubles);
    let singles = generate_match_record(3.5, 3.6, false, true, 12, "6-3", Singles);

    let doubles_change = update_user_score(&doubles).unwrap() - 3.5;
    let singles_change = update_user_score(&singles).unwrap() - 3.5;

    assert!(doubles_change > 0.0);
    assert!(doubles_change < singles_change);
}

#[test]
fn test_loss_to_weaker_opponent() {
    let weaker = generate_match_record(3.5, 2.5, false, false, 12, "4-6", Singles);
    let similar = generate_match_record(3.5, 3.5, false, false, 12, "4-6", Singles);

    let weaker_change = update_user_score(&weaker).unwrap() - 3.5;
    let similar_change = update_user_score(&similar).unwrap() - 3.5;

    assert!(weaker_change < similar_change);
    assert!(similar_change < 0.0);
}

#[test]
fn test_replay_matches_manual_fold() {
    let model = TennisModel::default();

    for history in generate_player_histories(20, 15, 99) {
        let summary = model.replay(history.initial_score, &history.matches).unwrap();

        let mut score = history.initial_score;
        for record in &history.matches {
            score = update_user_score(&record.with_user_score(score)).unwrap();
        }

        assert_eq!(summary.final_score, score);
        assert_eq!(summary.updates.len(), history.matches.len());
    }
}

#[test]
fn test_replay_many_matches_sequential() {
    let model = TennisModel::default();
    let histories = generate_player_histories(40, 10, 5);

    let parallel = model.replay_many(&histories);

    for (history, (player, result)) in histories.iter().zip(parallel) {
        assert_eq!(&history.player, &player);
        assert_eq!(
            result.unwrap(),
            model.replay(history.initial_score, &history.matches).unwrap()
        );
    }
}
