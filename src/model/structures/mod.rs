pub mod match_record;
pub mod match_type;
pub mod rating_state;
pub mod rating_update;
pub mod set_score;
pub mod weighted_outcome;
