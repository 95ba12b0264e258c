use serde::Serialize;

use crate::model::{
    deviation::deviation_from_sets,
    scale::{to_mu_phi, to_rating}
};

/// A player's Glicko-2 parameters on the internal rating scale.
///
/// Built fresh for every update and thrown away afterwards: the deviation is
/// estimated from season sets and the volatility always starts at the default.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct RatingState {
    pub rating: f64,
    pub deviation: f64,
    pub volatility: f64
}

impl RatingState {
    pub fn new(rating: f64, deviation: f64, volatility: f64) -> Self {
        Self {
            rating,
            deviation,
            volatility
        }
    }

    pub fn from_score(score: f64, season_sets: u32, volatility: f64) -> Self {
        Self::new(to_rating(score), deviation_from_sets(season_sets), volatility)
    }

    /// Glicko-2 scale (mu, phi)
    pub fn mu_phi(&self) -> (f64, f64) {
        to_mu_phi(self.rating, self.deviation)
    }
}
