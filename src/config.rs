use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::logic::composer::UnreadOnSend;
use crate::logic::sequencer::SequencerTimings;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_swipe_settle_ms")]
    pub swipe_settle_ms: u64,
    #[serde(default = "default_match_banner_ms")]
    pub match_banner_ms: u64,
    #[serde(default = "default_toast_ms")]
    pub toast_ms: u64,
    #[serde(default)]
    pub unread_on_send: UnreadOnSend,
    #[serde(default = "default_start_route")]
    pub start_route: String,
}

fn default_swipe_settle_ms() -> u64 {
    300
}

fn default_match_banner_ms() -> u64 {
    2000
}

fn default_toast_ms() -> u64 {
    1500
}

fn default_start_route() -> String {
    "/".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vim_mode: false,
            swipe_settle_ms: default_swipe_settle_ms(),
            match_banner_ms: default_match_banner_ms(),
            toast_ms: default_toast_ms(),
            unread_on_send: UnreadOnSend::default(),
            start_route: default_start_route(),
        }
    }
}

impl Config {
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to an empty mapping
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents).context("Failed to parse config")
    }

    /// Read a config file, or fall back to defaults when there is none
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config: {}", path.display()))?;
                Self::from_yaml_str(&contents)
                    .with_context(|| format!("Invalid config: {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn sequencer_timings(&self) -> SequencerTimings {
        SequencerTimings {
            settle: Duration::from_millis(self.swipe_settle_ms),
            banner: Duration::from_millis(self.match_banner_ms),
        }
    }
}
