use serde::{Deserialize, Serialize};

use super::match_type::MatchType;

/// A single rated set, as reported by the caller.
///
/// For doubles, `user_score` and `opp_score` are the averages of each team.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub user_score: f64,
    pub opp_score: f64,
    pub user_is_female: bool,
    pub user_win: bool,
    pub user_season_sets: u32,
    pub set_score: String,
    pub match_type: MatchType
}

impl MatchRecord {
    /// The same match, rated from a different starting score.
    pub fn with_user_score(&self, user_score: f64) -> Self {
        Self {
            user_score,
            ..self.clone()
        }
    }

    /// 1.0 for a win, 0.0 for a loss
    pub fn result(&self) -> f64 {
        if self.user_win {
            1.0
        } else {
            0.0
        }
    }
}
