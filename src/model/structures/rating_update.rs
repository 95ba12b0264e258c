use serde::{Deserialize, Serialize};

use super::{match_record::MatchRecord, match_type::MatchType};

/// The outcome of rating a single match.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RatingUpdate {
    pub original_score: f64,
    pub updated_score: f64,
    /// `updated_score - original_score`, rounded to two decimals
    pub score_change: f64,
    pub weight: f64,
    /// Post-update deviation on the internal rating scale. Informational only,
    /// it is never fed back into a later update.
    pub deviation: f64,
    pub volatility: f64,
    pub match_details: MatchDetails
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MatchDetails {
    pub opponent_score: f64,
    pub user_win: bool,
    pub set_score: String,
    pub match_type: MatchType,
    pub season_sets_played: u32,
    pub is_female_player: bool
}

impl From<&MatchRecord> for MatchDetails {
    fn from(record: &MatchRecord) -> Self {
        MatchDetails {
            opponent_score: record.opp_score,
            user_win: record.user_win,
            set_score: record.set_score.clone(),
            match_type: record.match_type,
            season_sets_played: record.user_season_sets,
            is_female_player: record.user_is_female
        }
    }
}

/// A player's ordered matches for a season replay.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PlayerHistory {
    pub player: String,
    pub initial_score: f64,
    pub matches: Vec<MatchRecord>
}

/// Result of folding a sequence of matches, each starting from the score the
/// previous one produced.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SeasonSummary {
    pub initial_score: f64,
    pub final_score: f64,
    pub total_change: f64,
    pub updates: Vec<RatingUpdate>
}
