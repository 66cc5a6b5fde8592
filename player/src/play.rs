//! Multi-session play for `player play` and the HTTP endpoint.

use std::thread;

use tracing::{error, info};

use crate::core::policy::Policy;
use crate::core::summary::{GamePlayReport, summarize};
use crate::core::types::{SessionResult, UNSTARTED_SESSION_ID};
use crate::io::gateway::Gateway;
use crate::session::{TurnEvent, play_one_session, play_session_with};

/// Play `games` sessions one after another and summarize them.
///
/// `on_session` receives the 1-based session number and its result as soon as
/// the session ends.
pub fn play_games<G, F>(gateway: &G, games: u32, policy: &Policy, on_session: F) -> GamePlayReport
where
    G: Gateway + ?Sized,
    F: FnMut(u32, &SessionResult),
{
    play_games_with(gateway, games, policy, |_, _| {}, on_session)
}

/// Like [`play_games`], also forwarding every turn event with its session number.
pub fn play_games_with<G, T, F>(
    gateway: &G,
    games: u32,
    policy: &Policy,
    mut on_turn: T,
    mut on_session: F,
) -> GamePlayReport
where
    G: Gateway + ?Sized,
    T: FnMut(u32, &TurnEvent),
    F: FnMut(u32, &SessionResult),
{
    let mut results = Vec::with_capacity(games as usize);
    for number in 1..=games {
        info!(game = number, of = games, "starting session");
        let result = play_session_with(gateway, policy, |event| on_turn(number, event));
        on_session(number, &result);
        results.push(result);
    }
    summarize(results)
}

/// Play `games` independent sessions on scoped threads and summarize them in
/// session order. A session thread that panics is reported as errored.
pub fn play_games_concurrently<G>(gateway: &G, games: u32, policy: &Policy) -> GamePlayReport
where
    G: Gateway + Sync + ?Sized,
{
    info!(games, "starting concurrent sessions");
    let results = thread::scope(|scope| {
        let handles: Vec<_> = (0..games)
            .map(|_| scope.spawn(|| play_one_session(gateway, policy)))
            .collect();
        handles
            .into_iter()
            .enumerate()
            .map(|(index, handle)| match handle.join() {
                Ok(result) => result,
                Err(_) => {
                    error!(game = index + 1, "session thread panicked");
                    SessionResult::errored(UNSTARTED_SESSION_ID, 0, 0, "session thread panicked")
                }
            })
            .collect::<Vec<_>>()
    });
    summarize(results)
}
