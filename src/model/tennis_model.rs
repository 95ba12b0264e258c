use rayon::prelude::*;
use tracing::{debug, info};

use crate::{
    config::ModelConfig,
    model::{
        error::{RatingError, Result},
        expectation::expectation_mu,
        glicko2::Glicko2Engine,
        scale::{finalize_score, round_hundredths, to_rating, to_score},
        structures::{
            match_record::MatchRecord,
            rating_state::RatingState,
            rating_update::{MatchDetails, PlayerHistory, RatingUpdate, SeasonSummary},
            weighted_outcome::WeightedGameOutcome
        },
        weight::match_weight
    },
    utils::progress_utils::progress_bar
};

/// Rates tennis matches one at a time. Holds no player state: every update
/// is computed from the match record alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TennisModel {
    pub config: ModelConfig,
    engine: Glicko2Engine
}

impl TennisModel {
    pub fn new(config: ModelConfig) -> TennisModel {
        TennisModel {
            config,
            engine: config.engine()
        }
    }

    /// # Match rating
    ///
    /// 1. Map both scores to the internal rating scale and estimate the
    ///    player's deviation from their season set count.
    /// 2. Weight the match by format, tiebreak and scoreline.
    /// 3. For female players, derive the lowered mu used for the expected
    ///    score only.
    /// 4. Run a one-game Glicko-2 rating period and map the new rating back
    ///    to a score, rounded to two decimals and kept within 2.0 - 5.0.
    pub fn update(&self, record: &MatchRecord) -> Result<RatingUpdate> {
        let player =
            RatingState::from_score(record.user_score, record.user_season_sets, self.config.volatility);
        let weight = match_weight(record.match_type, &record.set_score)?;
        let expect_mu = expectation_mu(record.user_score, player.deviation, record.user_is_female);

        let outcome = WeightedGameOutcome {
            result: record.result(),
            weight,
            opponent_rating: to_rating(record.opp_score),
            opponent_deviation: self.config.opponent_deviation
        };

        let rated = self.engine.rate(&player, &outcome, expect_mu)?;
        let updated_score = finalize_score(to_score(rated.rating));

        debug!(
            original = record.user_score,
            updated = updated_score,
            weight,
            "Rated {} match {}",
            record.match_type,
            record.set_score
        );

        Ok(RatingUpdate {
            original_score: record.user_score,
            updated_score,
            score_change: round_hundredths(updated_score - record.user_score),
            weight,
            deviation: rated.deviation,
            volatility: rated.volatility,
            match_details: MatchDetails::from(record)
        })
    }

    /// Rates `matches` in order, each starting from the score the previous
    /// match produced. The `user_score` stored in the records is ignored.
    pub fn replay(&self, initial_score: f64, matches: &[MatchRecord]) -> Result<SeasonSummary> {
        let mut score = initial_score;
        let mut updates = Vec::with_capacity(matches.len());

        for (index, record) in matches.iter().enumerate() {
            let update = self
                .update(&record.with_user_score(score))
                .map_err(|e| RatingError::Match {
                    index,
                    source: Box::new(e)
                })?;

            score = update.updated_score;
            updates.push(update);
        }

        Ok(SeasonSummary {
            initial_score,
            final_score: score,
            total_change: round_hundredths(score - initial_score),
            updates
        })
    }

    /// Replays many independent players in parallel. Results keep the order
    /// of `histories`; a failure only affects its own player.
    pub fn replay_many(&self, histories: &[PlayerHistory]) -> Vec<(String, Result<SeasonSummary>)> {
        info!("Replaying {} player histories", histories.len());

        let bar = progress_bar(histories.len() as u64, "Replaying seasons".to_string());
        let results: Vec<(String, Result<SeasonSummary>)> = histories
            .par_iter()
            .map(|history| {
                let summary = self.replay(history.initial_score, &history.matches);
                if let Some(bar) = &bar {
                    bar.inc(1);
                }

                (history.player.clone(), summary)
            })
            .collect();

        if let Some(bar) = bar {
            bar.finish();
        }

        let failed = results.iter().filter(|(_, r)| r.is_err()).count();
        info!("Replay complete, {} of {} histories failed", failed, results.len());

        results
    }
}

/// Rates a single match with the default configuration and returns only the
/// updated score.
pub fn update_user_score(record: &MatchRecord) -> Result<f64> {
    TennisModel::default()
        .update(record)
        .map(|update| update.updated_score)
}
