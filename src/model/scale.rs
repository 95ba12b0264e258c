use crate::model::constants::{
    GLICKO2_CENTER, GLICKO2_SCALE, RATING_BASE, RATING_PER_SCORE_POINT, SCORE_CEILING, SCORE_FLOOR
};

/// Maps a score on the 2.0 - 5.0 scale to the internal rating scale.
pub fn to_rating(score: f64) -> f64 {
    RATING_BASE + (score - SCORE_FLOOR) * RATING_PER_SCORE_POINT
}

/// Inverse of [`to_rating`].
pub fn to_score(rating: f64) -> f64 {
    SCORE_FLOOR + (rating - RATING_BASE) / RATING_PER_SCORE_POINT
}

/// Converts a rating and deviation to the Glicko-2 (mu, phi) scale.
pub fn to_mu_phi(rating: f64, deviation: f64) -> (f64, f64) {
    ((rating - GLICKO2_CENTER) / GLICKO2_SCALE, deviation / GLICKO2_SCALE)
}

/// Inverse of [`to_mu_phi`].
pub fn from_mu_phi(mu: f64, phi: f64) -> (f64, f64) {
    (mu * GLICKO2_SCALE + GLICKO2_CENTER, phi * GLICKO2_SCALE)
}

pub fn round_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Rounds to two decimals first, then clamps into the score range.
pub fn finalize_score(score: f64) -> f64 {
    round_hundredths(score).clamp(SCORE_FLOOR, SCORE_CEILING)
}
