//! Aggregation of played sessions into a single report.

use serde::{Deserialize, Serialize};

use crate::core::types::SessionResult;

/// Aggregate over N sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePlayReport {
    pub total_games_played: u32,
    pub successful_games: u32,
    pub failed_games: u32,
    pub average_score: f64,
    pub highest_score: u32,
    pub lowest_score: u32,
    pub game_results: Vec<SessionResult>,
}

impl GamePlayReport {
    pub fn errored_games(&self) -> usize {
        self.game_results
            .iter()
            .filter(|result| result.failure_reason.is_some())
            .count()
    }
}

/// Fold session results, in play order, into a report.
pub fn summarize(results: Vec<SessionResult>) -> GamePlayReport {
    if results.is_empty() {
        return GamePlayReport::default();
    }

    let total = results.len() as u32;
    let successful = results.iter().filter(|result| result.success).count() as u32;
    let score_sum: u64 = results
        .iter()
        .map(|result| u64::from(result.final_score))
        .sum();
    let highest = results
        .iter()
        .map(|result| result.final_score)
        .max()
        .unwrap_or(0);
    let lowest = results
        .iter()
        .map(|result| result.final_score)
        .min()
        .unwrap_or(0);

    GamePlayReport {
        total_games_played: total,
        successful_games: successful,
        failed_games: total - successful,
        average_score: score_sum as f64 / f64::from(total),
        highest_score: highest,
        lowest_score: lowest,
        game_results: results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{SessionOutcome, SessionResult};

    fn result(id: &str, score: u32, outcome: SessionOutcome) -> SessionResult {
        SessionResult {
            session_id: id.to_string(),
            final_score: score,
            turns_played: 10,
            success: outcome == SessionOutcome::Won,
            failure_reason: (outcome == SessionOutcome::Errored).then(|| "boom".to_string()),
            outcome,
        }
    }

    #[test]
    fn empty_results_give_zeroed_report() {
        let report = summarize(Vec::new());
        assert_eq!(report, GamePlayReport::default());
        assert_eq!(report.errored_games(), 0);
    }

    #[test]
    fn single_session_sets_all_scores() {
        let report = summarize(vec![result("g1", 1_230, SessionOutcome::Won)]);
        assert_eq!(report.total_games_played, 1);
        assert_eq!(report.successful_games, 1);
        assert_eq!(report.failed_games, 0);
        assert_eq!(report.average_score, 1_230.0);
        assert_eq!(report.highest_score, 1_230);
        assert_eq!(report.lowest_score, 1_230);
    }

    #[test]
    fn aggregates_mixed_outcomes_in_order() {
        let report = summarize(vec![
            result("g1", 1_100, SessionOutcome::Won),
            result("g2", 300, SessionOutcome::LivesExhausted),
            result("error", 0, SessionOutcome::Errored),
        ]);

        assert_eq!(report.total_games_played, 3);
        assert_eq!(report.successful_games, 1);
        assert_eq!(report.failed_games, 2);
        assert_eq!(report.errored_games(), 1);
        assert!((report.average_score - 466.666).abs() < 0.01);
        assert_eq!(report.highest_score, 1_100);
        assert_eq!(report.lowest_score, 0);
        let ids: Vec<&str> = report
            .game_results
            .iter()
            .map(|result| result.session_id.as_str())
            .collect();
        assert_eq!(ids, vec!["g1", "g2", "error"]);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let report = summarize(vec![result("g1", 10, SessionOutcome::LivesExhausted)]);
        let json = serde_json::to_value(&report).expect("serialize");
        assert_eq!(json["totalGamesPlayed"], 1);
        assert_eq!(json["failedGames"], 1);
        assert_eq!(json["gameResults"][0]["gameId"], "g1");
    }
}
