pub mod args;
pub mod config;
pub mod model;
pub mod utils;
