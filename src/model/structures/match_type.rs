use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};

use crate::model::error::RatingError;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[serde(try_from = "String", into = "String")]
#[strum(ascii_case_insensitive)]
pub enum MatchType {
    #[strum(to_string = "singles", serialize = "单打")]
    Singles,
    #[strum(to_string = "doubles", serialize = "双打")]
    Doubles
}

impl MatchType {
    /// Parses a match type label, trimming surrounding whitespace.
    pub fn parse(label: &str) -> Result<Self, RatingError> {
        MatchType::from_str(label.trim()).map_err(|_| RatingError::InvalidMatchType(label.to_string()))
    }
}

impl TryFrom<String> for MatchType {
    type Error = RatingError;

    fn try_from(v: String) -> Result<Self, Self::Error> {
        MatchType::parse(&v)
    }
}

impl From<MatchType> for String {
    fn from(v: MatchType) -> Self {
        v.to_string()
    }
}
