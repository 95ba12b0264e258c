use crate::model::structures::{match_record::MatchRecord, match_type::MatchType, rating_update::PlayerHistory};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub fn generate_match_record(
    user_score: f64,
    opp_score: f64,
    user_is_female: bool,
    user_win: bool,
    user_season_sets: u32,
    set_score: &str,
    match_type: MatchType
) -> MatchRecord {
    MatchRecord {
        user_score,
        opp_score,
        user_is_female,
        user_win,
        user_season_sets,
        set_score: set_score.to_string(),
        match_type
    }
}

/// A plausible set score for the given result: a regular set most of the
/// time, a match tiebreak otherwise.
pub fn generate_set_score(rng: &mut ChaCha8Rng, user_win: bool) -> String {
    let (winner, loser) = if rng.random_bool(0.2) {
        let loser = rng.random_range(0..=8);
        (10, loser)
    } else {
        let loser = rng.random_range(0..=5);
        (6, loser)
    };

    let separator = ["-", ":", " "][rng.random_range(0..3)];
    if user_win {
        format!("{winner}{separator}{loser}")
    } else {
        format!("{loser}{separator}{winner}")
    }
}

/// Generates `n` random but valid match records from a fixed seed.
pub fn generate_match_records(n: usize, seed: u64) -> Vec<MatchRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..n)
        .map(|i| {
            let user_win = rng.random_bool(0.5);
            let match_type = if rng.random_bool(0.3) {
                MatchType::Doubles
            } else {
                MatchType::Singles
            };

            MatchRecord {
                user_score: rng.random_range(2.0..=5.0),
                opp_score: rng.random_range(2.0..=5.0),
                user_is_female: rng.random_bool(0.5),
                user_win,
                user_season_sets: i as u32,
                set_score: generate_set_score(&mut rng, user_win),
                match_type
            }
        })
        .collect()
}

pub fn generate_player_histories(players: usize, matches_per_player: usize, seed: u64) -> Vec<PlayerHistory> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..players)
        .map(|i| PlayerHistory {
            player: format!("player-{i}"),
            initial_score: rng.random_range(2.0..=5.0),
            matches: generate_match_records(matches_per_player, seed.wrapping_add(i as u64))
        })
        .collect()
}
