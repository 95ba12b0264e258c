use std::f64::consts::PI;

use tracing::{debug, warn};

use crate::model::{
    constants::{CONVERGENCE_TOLERANCE, DEFAULT_TAU, DEVIATION_MAX, DEVIATION_MIN, MAX_ITERATIONS, VARIANCE_EPSILON},
    error::{RatingError, Result},
    scale::{from_mu_phi, to_mu_phi},
    structures::{rating_state::RatingState, weighted_outcome::WeightedGameOutcome}
};

/// Discount applied to a rating difference based on the opponent's uncertainty.
pub fn g(phi: f64) -> f64 {
    1.0 / (1.0 + 3.0 * phi.powi(2) / PI.powi(2)).sqrt()
}

/// Modeled probability that a player at `mu` beats an opponent at (`mu_j`, `phi_j`).
pub fn expected_score(mu: f64, mu_j: f64, phi_j: f64) -> f64 {
    1.0 / (1.0 + (-g(phi_j) * (mu - mu_j)).exp())
}

/// Single-period Glicko-2 update where one weighted game makes up the whole
/// rating period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glicko2Engine {
    /// System constant constraining the change in volatility
    pub tau: f64,
    pub tolerance: f64,
    /// Cap on both the bracketing search and the Illinois iterations
    pub max_iterations: usize
}

impl Default for Glicko2Engine {
    fn default() -> Self {
        Self {
            tau: DEFAULT_TAU,
            tolerance: CONVERGENCE_TOLERANCE,
            max_iterations: MAX_ITERATIONS
        }
    }
}

impl Glicko2Engine {
    pub fn new(tau: f64, tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tau,
            tolerance,
            max_iterations
        }
    }

    /// # Weighted Glicko-2 update
    ///
    /// Steps 3 to 8 of Glickman's paper for a single opponent, with the
    /// match weight standing in for the number of games.
    ///
    /// `expectation_mu`, when provided, replaces the player's mu in the
    /// expected score only. The mu that gets updated is always the player's
    /// own.
    pub fn rate(
        &self,
        player: &RatingState,
        outcome: &WeightedGameOutcome,
        expectation_mu: Option<f64>
    ) -> Result<RatingState> {
        let (mu, phi) = player.mu_phi();
        let (mu_j, phi_j) = to_mu_phi(outcome.opponent_rating, outcome.opponent_deviation);
        let weight = outcome.weight;

        let g_j = g(phi_j);
        let e = expected_score(expectation_mu.unwrap_or(mu), mu_j, phi_j);

        // Estimated variance and improvement, both scaled by the weight
        let v = 1.0 / (weight * g_j.powi(2) * e * (1.0 - e) + VARIANCE_EPSILON);
        let delta = v * weight * g_j * (outcome.result - e);

        let new_volatility = self.volatility(phi, player.volatility, v, delta)?;

        let phi_star = (phi.powi(2) + new_volatility.powi(2)).sqrt();
        let phi_prime = 1.0 / (1.0 / phi_star.powi(2) + 1.0 / v).sqrt();
        let mu_prime = mu + phi_prime.powi(2) * weight * g_j * (outcome.result - e);

        let (rating, deviation) = from_mu_phi(mu_prime, phi_prime);

        debug!(
            expected = e,
            variance = v,
            delta,
            volatility = new_volatility,
            rating,
            deviation,
            "Glicko-2 update"
        );

        Ok(RatingState::new(
            rating,
            deviation.clamp(DEVIATION_MIN, DEVIATION_MAX),
            new_volatility
        ))
    }

    /// Step 5: solves for the new volatility with the Illinois variant of
    /// regula falsi.
    fn volatility(&self, phi: f64, sigma: f64, v: f64, delta: f64) -> Result<f64> {
        let a = sigma.powi(2).ln();
        let tau = self.tau;
        let f = |x: f64| {
            let ex = x.exp();
            let num = ex * (delta.powi(2) - phi.powi(2) - v - ex);
            let den = 2.0 * (phi.powi(2) + v + ex).powi(2);

            num / den - (x - a) / tau.powi(2)
        };

        let mut lower = a;
        let mut upper = if delta.powi(2) > phi.powi(2) + v {
            (delta.powi(2) - phi.powi(2) - v).ln()
        } else {
            let mut k = 1;
            while f(a - k as f64 * tau) < 0.0 {
                if k >= self.max_iterations {
                    warn!(k, "Volatility bracket search hit the iteration cap");
                    return Err(RatingError::VolatilityNotConverged { iterations: k });
                }
                k += 1;
            }
            a - k as f64 * tau
        };

        let mut f_lower = f(lower);
        let mut f_upper = f(upper);
        if !f_lower.is_finite() || !f_upper.is_finite() {
            return Err(RatingError::VolatilityNotConverged { iterations: 0 });
        }

        let mut iterations = 0;
        while (upper - lower).abs() > self.tolerance {
            if iterations >= self.max_iterations {
                warn!(iterations, "Volatility root-find hit the iteration cap");
                return Err(RatingError::VolatilityNotConverged { iterations });
            }
            iterations += 1;

            let c = lower + (lower - upper) * f_lower / (f_upper - f_lower);
            let f_c = f(c);
            if !c.is_finite() || !f_c.is_finite() {
                return Err(RatingError::VolatilityNotConverged { iterations });
            }

            if f_c * f_upper < 0.0 {
                lower = upper;
                f_lower = f_upper;
            } else {
                f_lower /= 2.0;
            }

            upper = c;
            f_upper = f_c;
        }

        Ok((lower / 2.0).exp())
    }
}
