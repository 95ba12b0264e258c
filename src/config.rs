use serde::{Deserialize, Serialize};
use std::{env, str::FromStr};
use tracing::warn;

use crate::model::{
    constants::{CONVERGENCE_TOLERANCE, DEFAULT_TAU, DEFAULT_VOLATILITY, MAX_ITERATIONS, OPPONENT_DEVIATION},
    glicko2::Glicko2Engine
};

/// Tunable parameters of the rating model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Glicko-2 system constant constraining volatility change
    pub tau: f64,
    /// Convergence tolerance of the volatility root-find
    pub tolerance: f64,
    /// Maximum number of root-find steps before giving up
    pub max_iterations: usize,
    /// Volatility every update starts from
    pub volatility: f64,
    /// Deviation assumed for every opponent
    pub opponent_deviation: f64
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            tau: DEFAULT_TAU,
            tolerance: CONVERGENCE_TOLERANCE,
            max_iterations: MAX_ITERATIONS,
            volatility: DEFAULT_VOLATILITY,
            opponent_deviation: OPPONENT_DEVIATION
        }
    }
}

impl ModelConfig {
    /// Creates a configuration from `TENNIS_GLICKO_*` environment variables
    /// (a `.env` file is honored). Missing or unparsable values fall back to
    /// the defaults.
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let defaults = Self::default();
        Self {
            tau: env_or("TENNIS_GLICKO_TAU", defaults.tau),
            tolerance: env_or("TENNIS_GLICKO_TOLERANCE", defaults.tolerance),
            max_iterations: env_or("TENNIS_GLICKO_MAX_ITERATIONS", defaults.max_iterations),
            volatility: env_or("TENNIS_GLICKO_VOLATILITY", defaults.volatility),
            opponent_deviation: env_or("TENNIS_GLICKO_OPPONENT_RD", defaults.opponent_deviation)
        }
    }

    pub fn engine(&self) -> Glicko2Engine {
        Glicko2Engine::new(self.tau, self.tolerance, self.max_iterations)
    }
}

fn env_or<T: FromStr + Copy>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!(key, value = %value, "Ignoring unparsable environment value, using the default");
            default
        }),
        Err(_) => default
    }
}
