//! Persisted play reports (`player play --output`).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::summary::GamePlayReport;
use crate::io::atomic::write_atomic;

/// A report stamped with the time it was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReport {
    /// RFC 3339 timestamp.
    pub generated_at: String,
    #[serde(flatten)]
    pub report: GamePlayReport,
}

impl StoredReport {
    /// Stamp `report` with the current UTC time.
    pub fn now(report: GamePlayReport) -> Self {
        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            report,
        }
    }
}

pub fn load_report(path: &Path) -> Result<StoredReport> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read report {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse report {}", path.display()))
}

/// Atomically write a report to disk (temp file + rename).
pub fn write_report(path: &Path, stored: &StoredReport) -> Result<()> {
    debug!(path = %path.display(), games = stored.report.total_games_played, "writing report");
    let mut buf = serde_json::to_string_pretty(stored).context("serialize report")?;
    buf.push('\n');
    write_atomic(path, &buf)
}
