//! Player configuration stored in `player.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::policy::Policy;
use crate::io::atomic::write_atomic;

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "player.toml";

/// Player configuration (TOML).
///
/// This file is intended to be edited by humans. Missing fields default to the
/// values the game was tuned with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlayerConfig {
    /// Sessions to play per invocation when not overridden.
    pub games: u32,

    pub api: ApiConfig,

    pub policy: Policy,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// Service root, e.g. `https://dragonsofmugloar.com/api/v2`.
    pub base_url: String,

    pub connect_timeout_secs: u64,

    /// Whole-request budget (connect + response) in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dragonsofmugloar.com/api/v2".to_string(),
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            games: 1,
            api: ApiConfig::default(),
            policy: Policy::default(),
        }
    }
}

impl PlayerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.games == 0 {
            return Err(anyhow!("games must be > 0"));
        }
        let base_url = self.api.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(anyhow!("api.base_url must be an http(s) URL"));
        }
        if self.api.connect_timeout_secs == 0 {
            return Err(anyhow!("api.connect_timeout_secs must be > 0"));
        }
        if self.api.request_timeout_secs == 0 {
            return Err(anyhow!("api.request_timeout_secs must be > 0"));
        }
        self.policy.validate().map_err(|err| anyhow!(err))?;
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `PlayerConfig::default()`.
pub fn load_config(path: &Path) -> Result<PlayerConfig> {
    if !path.exists() {
        let cfg = PlayerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PlayerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &PlayerConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, PlayerConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        let cfg = PlayerConfig::default();
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("player.toml");
        fs::write(
            &path,
            "games = 3\n\n[policy]\ntarget_score = 500\n\n[api]\nbase_url = \"http://localhost:8080/api/v2\"\n",
        )
        .expect("write");

        let cfg = load_config(&path).expect("load");

        assert_eq!(cfg.games, 3);
        assert_eq!(cfg.policy.target_score, 500);
        assert_eq!(cfg.policy.max_skips_before_force, 5);
        assert_eq!(cfg.api.base_url, "http://localhost:8080/api/v2");
        assert_eq!(cfg.api.request_timeout_secs, 30);
    }

    #[test]
    fn rejects_invalid_values() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("player.toml");
        fs::write(&path, "[api]\nbase_url = \"ftp://example.test\"\n").expect("write");
        let err = load_config(&path).expect_err("invalid");
        assert!(err.to_string().contains("base_url"));

        let cfg = PlayerConfig {
            policy: Policy {
                life_item_id: " ".to_string(),
                ..Policy::default()
            },
            ..PlayerConfig::default()
        };
        assert!(write_config(&path, &cfg).is_err());
    }
}
