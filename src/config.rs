//! Match configuration loaded from TOML.

use crate::players::{Exhaustion, PolicyKind};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How a match is set up.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Policy for X, who moves first.
    #[serde(default = "default_first_policy")]
    first_policy: PolicyKind,

    /// Policy for O.
    #[serde(default = "default_second_policy")]
    second_policy: PolicyKind,

    /// Seed for random policies. X uses `seed`, O uses `seed + 1`.
    #[serde(default)]
    seed: Option<u64>,

    /// What an actor does when its policy runs dry mid-game.
    #[serde(default)]
    on_exhaustion: Exhaustion,

    /// Print the board after every accepted move.
    #[serde(default = "default_show_board")]
    show_board: bool,
}

fn default_first_policy() -> PolicyKind {
    PolicyKind::Sequential
}

fn default_second_policy() -> PolicyKind {
    PolicyKind::Random
}

fn default_show_board() -> bool {
    true
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            first_policy: default_first_policy(),
            second_policy: default_second_policy(),
            seed: None,
            on_exhaustion: Exhaustion::default(),
            show_board: default_show_board(),
        }
    }
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Overrides X's policy.
    pub fn with_first_policy(mut self, policy: PolicyKind) -> Self {
        self.first_policy = policy;
        self
    }

    /// Overrides O's policy.
    pub fn with_second_policy(mut self, policy: PolicyKind) -> Self {
        self.second_policy = policy;
        self
    }

    /// Overrides the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the exhaustion behavior.
    pub fn with_on_exhaustion(mut self, exhaustion: Exhaustion) -> Self {
        self.on_exhaustion = exhaustion;
        self
    }

    /// Turns per-move board printing on or off.
    pub fn with_show_board(mut self, show: bool) -> Self {
        self.show_board = show;
        self
    }

    /// Seed for the given player's policy, if seeding is on.
    pub fn seed_for(&self, first: bool) -> Option<u64> {
        self.seed.map(|seed| if first { seed } else { seed.wrapping_add(1) })
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
