use crate::model::{
    constants::{FEMALE_EXPECTATION_OFFSET, SCORE_FLOOR},
    scale::{to_mu_phi, to_rating}
};

/// The mu used only when estimating the probability of winning.
///
/// Female players are rated against an expectation computed from their
/// score lowered by half a point (never below the score floor). The rating
/// that actually gets updated is untouched; only the expected outcome moves.
/// Returns `None` when no adjustment applies.
pub fn expectation_mu(score: f64, deviation: f64, is_female: bool) -> Option<f64> {
    if !is_female {
        return None;
    }

    let adjusted = (score - FEMALE_EXPECTATION_OFFSET).max(SCORE_FLOOR);
    let (mu, _) = to_mu_phi(to_rating(adjusted), deviation);

    Some(mu)
}
