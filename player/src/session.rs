//! Session orchestration for one game (start, turn loop, terminal result).

use tracing::{debug, error, info, instrument, warn};

use crate::core::policy::Policy;
use crate::core::recovery::{AttemptWindow, StallTracker};
use crate::core::selector::{select_best, select_fallback};
use crate::core::state_update::{apply_purchase, apply_solve};
use crate::core::types::{
    SessionOutcome, SessionResult, SolveOutcome, Task, UNSTARTED_SESSION_ID,
};
use crate::io::gateway::{Gateway, GatewayError};
use crate::resupply::try_restore_life;

/// Something that happened during one pass of the turn loop.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnEvent {
    /// A life item was bought and the session view adopted it.
    Resupplied { lives: u32, gold: u32 },
    /// No safe task was offered this turn.
    Stalled { consecutive_skips: u32 },
    /// A task was chosen; `fallback` marks a forced pick after a stall streak.
    Selected { task: Task, fallback: bool },
    Solved {
        task_id: String,
        outcome: SolveOutcome,
    },
    /// The solve call failed; the session view is unchanged.
    SolveFailed {
        task_id: String,
        error: GatewayError,
    },
}

/// Play one session until it is won, out of lives, or cannot continue.
pub fn play_one_session<G: Gateway + ?Sized>(gateway: &G, policy: &Policy) -> SessionResult {
    play_session_with(gateway, policy, |_| {})
}

/// Play one session, reporting every turn event to `on_turn`.
///
/// Never fails: start and task-listing failures end the session as
/// [`SessionOutcome::Errored`] with the progress made so far.
#[instrument(skip_all)]
pub fn play_session_with<G, F>(gateway: &G, policy: &Policy, mut on_turn: F) -> SessionResult
where
    G: Gateway + ?Sized,
    F: FnMut(&TurnEvent),
{
    let mut session = match gateway.start_session() {
        Ok(session) => session,
        Err(err) => {
            error!(kind = err.kind(), err = %err, "failed to start game");
            return SessionResult::errored(
                UNSTARTED_SESSION_ID,
                0,
                0,
                format!("failed to start game: {err}"),
            );
        }
    };
    if session.id.trim().is_empty() {
        error!("service returned an empty game id");
        return SessionResult::errored(
            UNSTARTED_SESSION_ID,
            0,
            0,
            "failed to start game: empty game id",
        );
    }
    info!(
        session_id = %session.id,
        lives = session.lives,
        gold = session.gold,
        "game started"
    );

    let mut window = AttemptWindow::default();
    let mut stall = StallTracker::new(policy.max_skips_before_force);

    loop {
        // Out of lives wins over a reached target.
        if session.lives == 0 {
            info!(session_id = %session.id, score = session.score, turn = session.turn, "out of lives");
            return SessionResult::finished(&session, SessionOutcome::LivesExhausted);
        }
        if session.score >= policy.target_score {
            info!(session_id = %session.id, score = session.score, turn = session.turn, "target reached");
            return SessionResult::finished(&session, SessionOutcome::Won);
        }

        if policy.wants_resupply(session.lives, session.gold) {
            let purchase =
                try_restore_life(gateway, &session.id, session.gold, session.lives, policy);
            if let Some(purchase) = purchase {
                let updated = apply_purchase(&session, &purchase);
                if updated.lives > session.lives {
                    session = updated;
                    stall.reset();
                    on_turn(&TurnEvent::Resupplied {
                        lives: session.lives,
                        gold: session.gold,
                    });
                } else {
                    debug!(lives = ?purchase.lives, "purchase did not restore a life");
                }
            }
        }

        let mut tasks = match gateway.list_tasks(&session.id) {
            Ok(tasks) => tasks,
            Err(err) => {
                error!(session_id = %session.id, kind = err.kind(), err = %err, "failed to fetch missions");
                return SessionResult::errored(
                    &session.id,
                    session.score,
                    session.turn,
                    format!("failed to fetch missions: {err}"),
                );
            }
        };
        tasks.retain(|task| !task.id.trim().is_empty());
        window.retain_unattempted(&mut tasks);

        let (task, fallback) = match select_best(&tasks, session.lives) {
            Some(task) => (task.clone(), false),
            None => {
                let consecutive_skips = stall.record_skip();
                debug!(consecutive_skips, offered = tasks.len(), "no safe mission");
                on_turn(&TurnEvent::Stalled { consecutive_skips });
                let forced = if stall.should_force() {
                    select_fallback(&tasks)
                } else {
                    None
                };
                match forced {
                    Some(task) => (task.clone(), true),
                    None => {
                        window.clear();
                        continue;
                    }
                }
            }
        };

        window.record(&task.id);
        stall.reset();
        debug!(
            task_id = %task.id,
            risk = ?task.risk,
            reward = task.reward,
            fallback,
            "mission selected"
        );
        let task_id = task.id.clone();
        on_turn(&TurnEvent::Selected { task, fallback });

        match gateway.solve_task(&session.id, &task_id) {
            Ok(outcome) => {
                session = apply_solve(&session, &outcome);
                window.clear();
                debug!(
                    task_id = %task_id,
                    success = outcome.success,
                    lives = session.lives,
                    gold = session.gold,
                    score = session.score,
                    turn = session.turn,
                    "mission solved"
                );
                on_turn(&TurnEvent::Solved { task_id, outcome });
            }
            Err(err) => {
                warn!(task_id = %task_id, kind = err.kind(), err = %err, "solve failed");
                on_turn(&TurnEvent::SolveFailed {
                    task_id,
                    error: err,
                });
            }
        }
    }
}
