use crate::model::constants::{DEVIATION_MAX, SEASON_DEVIATION_DECAY_SETS, SEASON_DEVIATION_FLOOR};

/// Approximates a player's rating deviation from the number of sets they
/// have played this season. The more sets played, the more confident the
/// model is in the rating.
///
/// There is no memory of actual results here: two players with the same
/// set count always get the same deviation.
pub fn deviation_from_sets(season_sets: u32) -> f64 {
    let rd = DEVIATION_MAX * (-(season_sets as f64) / SEASON_DEVIATION_DECAY_SETS).exp();

    rd.clamp(SEASON_DEVIATION_FLOOR, DEVIATION_MAX)
}
