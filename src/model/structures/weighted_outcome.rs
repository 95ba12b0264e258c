use serde::Serialize;

/// One match as seen by the Glicko-2 engine: a single-game rating period
/// against one opponent, scaled by `weight` instead of a game count.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct WeightedGameOutcome {
    /// 1.0 = win, 0.0 = loss
    pub result: f64,
    pub weight: f64,
    pub opponent_rating: f64,
    pub opponent_deviation: f64
}
