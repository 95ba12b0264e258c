use clap::Parser;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{fs, path::Path};
use strum::IntoEnumIterator;
use tennis_glicko::{
    args::{Args, Command},
    config::ModelConfig,
    model::{
        constants::{SCORE_CEILING, SCORE_FLOOR},
        error::RatingError,
        structures::{
            match_record::MatchRecord,
            match_type::MatchType,
            rating_update::{PlayerHistory, SeasonSummary}
        },
        TennisModel
    }
};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Rating(#[from] RatingError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error
    },

    #[error("Invalid input JSON: {0}")]
    Json(#[from] serde_json::Error)
}

#[derive(Deserialize)]
struct SeasonInput {
    initial_score: f64,
    matches: Vec<MatchRecord>
}

#[derive(Serialize)]
struct BatchEntry {
    player: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<SeasonSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    let model = TennisModel::new(ModelConfig::from_env());

    if let Err(e) = run(&args.command, &model) {
        error!("{e}");
        if matches!(&e, CliError::Rating(r) if r.is_client_error()) {
            error!("Check the match data and try again");
        }
        std::process::exit(1);
    }
}

fn run(command: &Command, model: &TennisModel) -> Result<(), CliError> {
    let output = match command {
        Command::Update(update) => {
            let result = model.update(&update.to_record())?;
            serde_json::to_string_pretty(&result)?
        }
        Command::Replay { file } => {
            let input: SeasonInput = read_json(file)?;
            info!("Replaying {} matches", input.matches.len());

            let summary = model.replay(input.initial_score, &input.matches)?;
            serde_json::to_string_pretty(&summary)?
        }
        Command::Batch { file } => {
            let histories: Vec<PlayerHistory> = read_json(file)?;
            let entries: Vec<BatchEntry> = model
                .replay_many(&histories)
                .into_iter()
                .map(|(player, result)| match result {
                    Ok(summary) => BatchEntry {
                        player,
                        summary: Some(summary),
                        error: None
                    },
                    Err(e) => BatchEntry {
                        player,
                        summary: None,
                        error: Some(e.to_string())
                    }
                })
                .collect();

            serde_json::to_string_pretty(&entries)?
        }
        Command::Info => {
            let info = json!({
                "supported_match_types": MatchType::iter().map(|t| t.to_string()).collect::<Vec<_>>(),
                "score_range": [SCORE_FLOOR, SCORE_CEILING],
                "config": model.config
            });
            serde_json::to_string_pretty(&info)?
        }
    };

    println!("{output}");
    Ok(())
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, CliError> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source
    })?;

    Ok(serde_json::from_str(&contents)?)
}
