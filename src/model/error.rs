use thiserror::Error;

pub type Result<T> = std::result::Result<T, RatingError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RatingError {
    #[error("Invalid set score '{0}', expected a format like '6-4', '7:5' or '10 7'")]
    InvalidSetScore(String),

    #[error("Invalid match type '{0}', expected singles or doubles")]
    InvalidMatchType(String),

    #[error("Volatility did not converge after {iterations} iterations")]
    VolatilityNotConverged { iterations: usize },

    #[error("Match {index} could not be rated: {source}")]
    Match {
        index: usize,
        #[source]
        source: Box<RatingError>
    }
}

impl RatingError {
    /// True when the error was caused by caller-supplied match data rather than by the
    /// numerical engine.
    pub fn is_client_error(&self) -> bool {
        match self {
            RatingError::InvalidSetScore(_) | RatingError::InvalidMatchType(_) => true,
            RatingError::VolatilityNotConverged { .. } => false,
            RatingError::Match { source, .. } => source.is_client_error()
        }
    }
}
