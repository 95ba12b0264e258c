use std::str::FromStr;

use serde::Serialize;

use crate::model::{
    constants::{MATCH_TIEBREAK_POINTS, SET_SCORE_SEPARATORS},
    error::RatingError
};

/// Games (or points, for a match tiebreak) won by each side in the rated set.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetScore {
    pub first: u32,
    pub second: u32
}

impl SetScore {
    pub fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }

    /// A set played to 10 or more points is a match tiebreak rather than a full set.
    pub fn is_match_tiebreak(&self) -> bool {
        self.first.max(self.second) >= MATCH_TIEBREAK_POINTS
    }

    pub fn margin(&self) -> u32 {
        self.first.abs_diff(self.second)
    }
}

impl FromStr for SetScore {
    type Err = RatingError;

    /// Separators are tried in priority order; the first one present in the
    /// text is the only one used to split it.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || RatingError::InvalidSetScore(text.to_string());

        let separator = SET_SCORE_SEPARATORS
            .iter()
            .find(|sep| text.contains(**sep))
            .ok_or_else(invalid)?;

        let parts: Vec<&str> = text.split(*separator).collect();
        let [first, second] = parts.as_slice() else {
            return Err(invalid());
        };

        let first = first.trim().parse::<u32>().map_err(|_| invalid())?;
        let second = second.trim().parse::<u32>().map_err(|_| invalid())?;

        Ok(SetScore::new(first, second))
    }
}
