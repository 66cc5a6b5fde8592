//! Stable exit codes for player CLI commands.

use crate::core::summary::GamePlayReport;

/// Command succeeded and every played session was won.
pub const OK: i32 = 0;
/// Command failed due to invalid usage/config or other errors.
pub const INVALID: i32 = 1;
/// At least one session ran out of lives and none errored.
pub const LOST: i32 = 2;
/// At least one session could not be played to completion.
pub const ERRORED: i32 = 3;

/// Exit code summarizing a finished `player play`.
pub fn for_report(report: &GamePlayReport) -> i32 {
    if report.errored_games() > 0 {
        ERRORED
    } else if report.successful_games < report.total_games_played {
        LOST
    } else {
        OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::summary::summarize;
    use crate::core::types::{SessionOutcome, SessionResult};
    use crate::test_support::session;

    #[test]
    fn errors_outrank_losses() {
        let won = SessionResult::finished(&session("g1", 3, 0), SessionOutcome::Won);
        let lost = SessionResult::finished(&session("g2", 0, 0), SessionOutcome::LivesExhausted);
        let errored = SessionResult::errored("error", 0, 0, "boom");

        assert_eq!(for_report(&summarize(vec![won.clone()])), OK);
        assert_eq!(for_report(&summarize(vec![won.clone(), lost.clone()])), LOST);
        assert_eq!(for_report(&summarize(vec![won, lost, errored])), ERRORED);
        assert_eq!(for_report(&GamePlayReport::default()), OK);
    }
}
