//! HTTP route handlers for the play API.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use player::core::summary::GamePlayReport;
use player::io::http::HttpGateway;
use player::play::{play_games, play_games_concurrently};
use serde::Deserialize;
use tracing::{error, info};

use crate::state::AppState;

/// Upper bound on sessions per request.
const MAX_GAMES_PER_REQUEST: u32 = 10;

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/game/play", post(play))
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Deserialize)]
struct PlayParams {
    games: Option<u32>,
    #[serde(default)]
    parallel: bool,
}

fn clamp_games(requested: u32) -> u32 {
    requested.clamp(1, MAX_GAMES_PER_REQUEST)
}

/// POST /api/game/play - play sessions and return the aggregate report.
async fn play(
    State(state): State<AppState>,
    Query(params): Query<PlayParams>,
) -> Result<Json<GamePlayReport>, StatusCode> {
    let games = clamp_games(params.games.unwrap_or(state.config.games));
    let parallel = params.parallel;
    info!(games, parallel, "play requested");

    let config = Arc::clone(&state.config);
    // The blocking HTTP client must be built and dropped off the async runtime.
    let outcome = tokio::task::spawn_blocking(move || {
        let gateway = HttpGateway::new(&config.api)?;
        let report = if parallel {
            play_games_concurrently(&gateway, games, &config.policy)
        } else {
            play_games(&gateway, games, &config.policy, |_, _| {})
        };
        anyhow::Ok(report)
    })
    .await;

    let report = match outcome {
        Ok(Ok(report)) => report,
        Ok(Err(err)) => {
            error!(err = %format!("{err:#}"), "failed to build gateway");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
        Err(err) => {
            error!(err = %err, "play worker panicked");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    info!(
        success = report.successful_games == report.total_games_played,
        highest_score = report.highest_score,
        "play finished"
    );
    Ok(Json(report))
}
