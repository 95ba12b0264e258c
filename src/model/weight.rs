use crate::model::{
    constants::{DOUBLES_WEIGHT, MARGIN_BONUS_CAP, MARGIN_FREE_GAMES, MARGIN_STEP, MATCH_TIEBREAK_WEIGHT},
    error::Result,
    structures::{match_type::MatchType, set_score::SetScore}
};

/// Computes how much a single match counts towards a rating update.
///
/// - Doubles results say less about individual skill: x0.85
/// - Match tiebreaks (10+ points) are a shorter format: x0.60
/// - Decisive scorelines earn a bonus of 5% per game beyond a 2 game gap, up to 20%
pub fn match_weight(match_type: MatchType, set_score: &str) -> Result<f64> {
    let score: SetScore = set_score.parse()?;

    Ok(weight_for_score(match_type, &score))
}

pub fn weight_for_score(match_type: MatchType, score: &SetScore) -> f64 {
    let mut weight = 1.0;
    if match_type == MatchType::Doubles {
        weight *= DOUBLES_WEIGHT;
    }

    if score.is_match_tiebreak() {
        weight *= MATCH_TIEBREAK_WEIGHT;
    }

    weight * margin_multiplier(score)
}

fn margin_multiplier(score: &SetScore) -> f64 {
    let bonus = (score.margin() as f64 - MARGIN_FREE_GAMES) * MARGIN_STEP;

    1.0 + bonus.clamp(0.0, MARGIN_BONUS_CAP)
}
