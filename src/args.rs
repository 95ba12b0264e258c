use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::model::structures::{match_record::MatchRecord, match_type::MatchType};

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "Tennis Glicko",
    long_about = "Updates 2.0 - 5.0 tennis skill scores with a weighted, stateless Glicko-2 model"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        global = true,
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Rate a single match and print the rating update as JSON
    Update(UpdateArgs),

    /// Rate a player's matches in order, feeding each new score into the next match.
    ///
    /// The file holds `{ "initial_score": 3.5, "matches": [ ... ] }`.
    Replay {
        /// Path to the JSON season file
        file: PathBuf
    },

    /// Replay many players in parallel.
    ///
    /// The file holds `[{ "player": "...", "initial_score": 3.5, "matches": [ ... ] }]`.
    Batch {
        /// Path to the JSON batch file
        file: PathBuf
    },

    /// Print the supported match types, score range and model configuration
    Info
}

#[derive(clap::Args, Clone, Debug)]
pub struct UpdateArgs {
    /// The player's current score (2.0 - 5.0). For doubles, the team average
    #[arg(long)]
    pub user_score: f64,

    /// The opponent's score (2.0 - 5.0). For doubles, the opposing team average
    #[arg(long)]
    pub opp_score: f64,

    /// The player is female (only shifts the expected outcome)
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub female: bool,

    /// The player won the set
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub win: bool,

    /// Sets the player has played this season
    #[arg(long, default_value_t = 0)]
    pub season_sets: u32,

    /// Set score, e.g. 6-4, 7:5 or "10 7"
    #[arg(long)]
    pub set_score: String,

    /// singles or doubles
    #[arg(long, default_value = "singles", value_parser = MatchType::parse)]
    pub match_type: MatchType
}

impl UpdateArgs {
    pub fn to_record(&self) -> MatchRecord {
        MatchRecord {
            user_score: self.user_score,
            opp_score: self.opp_score,
            user_is_female: self.female,
            user_win: self.win,
            user_season_sets: self.season_sets,
            set_score: self.set_score.clone(),
            match_type: self.match_type
        }
    }
}
