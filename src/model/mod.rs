pub mod constants;
pub mod deviation;
pub mod error;
pub mod expectation;
pub mod glicko2;
pub mod scale;
pub mod structures;
pub mod tennis_model;
pub mod weight;

pub use tennis_model::{update_user_score, TennisModel};
