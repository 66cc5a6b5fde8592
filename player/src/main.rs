//! Automated player for a turn-based mission game.
//!
//! `player init` writes a default `player.toml`; `player play` runs sessions
//! against the configured service and prints one line per session plus a
//! summary report.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use player::core::summary::GamePlayReport;
use player::core::types::{SessionOutcome, SessionResult};
use player::exit_codes;
use player::io::config::{DEFAULT_CONFIG_PATH, PlayerConfig, load_config, write_config};
use player::io::http::HttpGateway;
use player::io::report_store::{StoredReport, write_report};
use player::logging;
use player::play::{play_games_concurrently, play_games_with};
use player::session::TurnEvent;

#[derive(Parser)]
#[command(
    name = "player",
    version,
    about = "Plays mission game sessions until the target score or the last life"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write a default config file.
    Init {
        /// Config file to create.
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Play sessions and print a summary report.
    Play {
        /// Config file (defaults are used when it does not exist).
        #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
        /// Number of sessions (overrides `games`).
        #[arg(short, long)]
        games: Option<u32>,
        /// Service root (overrides `api.base_url`).
        #[arg(long)]
        base_url: Option<String>,
        /// Play all sessions at the same time.
        #[arg(long)]
        parallel: bool,
        /// Write the JSON report to this path.
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print every turn (sequential play only).
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { config, force } => cmd_init(&config, force),
        Command::Play {
            config,
            games,
            base_url,
            parallel,
            output,
            verbose,
        } => {
            let mut cfg = load_config(&config)?;
            apply_overrides(&mut cfg, games, base_url);
            cfg.validate()
                .with_context(|| format!("invalid config {}", config.display()))?;
            cmd_play(&cfg, parallel, verbose, output.as_deref())
        }
    }
}

fn cmd_init(path: &Path, force: bool) -> Result<i32> {
    if !force && path.exists() {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_config(path, &PlayerConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(exit_codes::OK)
}

fn apply_overrides(cfg: &mut PlayerConfig, games: Option<u32>, base_url: Option<String>) {
    if let Some(games) = games {
        cfg.games = games;
    }
    if let Some(base_url) = base_url {
        cfg.api.base_url = base_url;
    }
}

fn cmd_play(cfg: &PlayerConfig, parallel: bool, verbose: bool, output: Option<&Path>) -> Result<i32> {
    let gateway = HttpGateway::new(&cfg.api)?;

    let report = if parallel {
        let report = play_games_concurrently(&gateway, cfg.games, &cfg.policy);
        for (index, result) in report.game_results.iter().enumerate() {
            println!("{}", session_line(index as u32 + 1, result));
        }
        report
    } else {
        play_games_with(
            &gateway,
            cfg.games,
            &cfg.policy,
            |number, event| {
                if verbose {
                    println!("{}", turn_line(number, event));
                }
            },
            |number, result| println!("{}", session_line(number, result)),
        )
    };
    println!("{}", report_line(&report));

    if let Some(path) = output {
        write_report(path, &StoredReport::now(report.clone()))
            .with_context(|| format!("write report {}", path.display()))?;
    }
    Ok(exit_codes::for_report(&report))
}

fn session_line(number: u32, result: &SessionResult) -> String {
    let outcome = match result.outcome {
        SessionOutcome::Won => "won",
        SessionOutcome::LivesExhausted => "lost",
        SessionOutcome::Errored => "errored",
    };
    let mut line = format!(
        "game {number} {}: {outcome}, score {}, turns {}",
        result.session_id, result.final_score, result.turns_played
    );
    if let Some(reason) = &result.failure_reason {
        line.push_str(&format!(" ({reason})"));
    }
    line
}

fn turn_line(number: u32, event: &TurnEvent) -> String {
    let detail = match event {
        TurnEvent::Resupplied { lives, gold } => {
            format!("bought a life: lives {lives}, gold {gold}")
        }
        TurnEvent::Stalled { consecutive_skips } => {
            format!("no safe mission ({consecutive_skips} in a row)")
        }
        TurnEvent::Selected { task, fallback } => {
            let risk = task.risk.map_or("unknown", |band| band.label());
            let kind = if *fallback { "fallback" } else { "best" };
            format!("{kind} mission {} ({risk}, reward {})", task.id, task.reward)
        }
        TurnEvent::Solved { task_id, outcome } => {
            let verdict = if outcome.success { "won" } else { "lost" };
            format!("mission {task_id} {verdict}")
        }
        TurnEvent::SolveFailed { task_id, error } => {
            format!("mission {task_id} failed: {error}")
        }
    };
    format!("  game {number}: {detail}")
}

fn report_line(report: &GamePlayReport) -> String {
    format!(
        "played {}: won {}, failed {}, average score {:.1}, highest {}, lowest {}",
        report.total_games_played,
        report.successful_games,
        report.failed_games,
        report.average_score,
        report.highest_score,
        report.lowest_score
    )
}
