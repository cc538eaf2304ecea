//! UCT search configuration parameters.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Errors raised while building or validating a search configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Unknown strategy '{0}' (expected win_rate or value)")]
    UnknownStrategy(String),

    #[error("Unknown retention '{0}' (expected auto, persist or per_turn)")]
    UnknownRetention(String),

    #[error("Calculation time must be a finite, non-negative number of seconds, got {0}")]
    InvalidTime(f64),

    #[error("Exploration constant must be finite and non-negative, got {0}")]
    InvalidExploration(f64),
}

/// How playout outcomes are credited and moves are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Count wins for the decided winner; score = win percentage
    #[default]
    WinRate,
    /// Sum terminal payoffs from `Board::end_value`; score = mean payoff
    Value,
}

impl Strategy {
    /// Retention used when the config does not choose one explicitly.
    pub fn default_retention(self) -> Retention {
        match self {
            Strategy::WinRate => Retention::AcrossTurns,
            Strategy::Value => Retention::PerTurn,
        }
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "win_rate" | "winrate" | "wins" => Ok(Strategy::WinRate),
            "value" | "values" => Ok(Strategy::Value),
            _ => Err(ConfigError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::WinRate => f.write_str("win_rate"),
            Strategy::Value => f.write_str("value"),
        }
    }
}

/// Lifetime of the statistics store relative to `get_play` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retention {
    /// Statistics compound across turns until `reset` is called
    AcrossTurns,
    /// The store is cleared at the start of every `get_play`
    PerTurn,
}

/// Parse a retention setting. `auto` yields `None` (strategy default).
pub fn parse_retention(s: &str) -> Result<Option<Retention>, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "auto" | "" => Ok(None),
        "persist" | "across_turns" => Ok(Some(Retention::AcrossTurns)),
        "per_turn" | "reset" => Ok(Some(Retention::PerTurn)),
        _ => Err(ConfigError::UnknownRetention(s.to_string())),
    }
}

/// Configuration for UCT search.
#[derive(Debug, Clone, PartialEq)]
pub struct UctConfig {
    /// Wall-clock budget for the playout loop of one `get_play` call.
    /// Checked only between playouts; at least one playout always runs.
    pub calculation_time: Duration,

    /// Maximum moves per playout before it is truncated without a result.
    pub max_moves: u32,

    /// Exploration constant C in UCB1.
    /// Increase for more exploratory moves, decrease to prefer moves with
    /// known higher scores.
    pub exploration: f64,

    /// Outcome crediting and scoring strategy.
    pub strategy: Strategy,

    /// Store retention; `None` uses the strategy default.
    pub retention: Option<Retention>,

    /// Fixed RNG seed for reproducible searches; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for UctConfig {
    fn default() -> Self {
        Self {
            calculation_time: Duration::from_secs(30),
            max_moves: 1000,
            exploration: 1.4,
            strategy: Strategy::WinRate,
            retention: None,
            seed: None,
        }
    }
}

impl UctConfig {
    /// Build from the recognised option set `{time, max_moves, C}`.
    pub fn from_options(time_secs: f64, max_moves: u32, c: f64) -> Result<Self, ConfigError> {
        let config = Self {
            calculation_time: seconds(time_secs)?,
            max_moves,
            exploration: c,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Create a fast, seeded config for testing.
    pub fn for_testing() -> Self {
        Self {
            calculation_time: Duration::from_millis(20),
            max_moves: 100,
            exploration: 1.4,
            strategy: Strategy::WinRate,
            retention: None,
            seed: Some(42),
        }
    }

    /// Retention actually applied by the search.
    pub fn effective_retention(&self) -> Retention {
        self.retention
            .unwrap_or_else(|| self.strategy.default_retention())
    }

    /// Check the numeric fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.exploration.is_finite() || self.exploration < 0.0 {
            return Err(ConfigError::InvalidExploration(self.exploration));
        }
        Ok(())
    }

    /// Builder pattern: set calculation time.
    pub fn with_time(mut self, time: Duration) -> Self {
        self.calculation_time = time;
        self
    }

    /// Builder pattern: set per-playout move cap.
    pub fn with_max_moves(mut self, max_moves: u32) -> Self {
        self.max_moves = max_moves;
        self
    }

    /// Builder pattern: set exploration constant.
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration = c;
        self
    }

    /// Builder pattern: set strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builder pattern: set retention explicitly.
    pub fn with_retention(mut self, retention: Retention) -> Self {
        self.retention = Some(retention);
        self
    }

    /// Builder pattern: set RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl TryFrom<&uct_config::SearchConfig> for UctConfig {
    type Error = ConfigError;

    fn try_from(section: &uct_config::SearchConfig) -> Result<Self, Self::Error> {
        let config = Self {
            calculation_time: seconds(section.time)?,
            max_moves: section.max_moves,
            exploration: section.c,
            strategy: section.strategy.parse()?,
            retention: parse_retention(&section.retention)?,
            seed: section.seed,
        };
        config.validate()?;
        Ok(config)
    }
}

fn seconds(secs: f64) -> Result<Duration, ConfigError> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(ConfigError::InvalidTime(secs));
    }
    Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidTime(secs))
}
