//! Configuration struct definitions.
//!
//! All config structs with serde deserialization support and default values.

use crate::defaults;
use serde::Deserialize;

// ============================================================================
// Serde default functions (required for #[serde(default = "...")])
// These call the accessor functions from defaults module
// ============================================================================

fn d_log_level() -> String {
    defaults::log_level().into()
}
fn d_time() -> f64 {
    defaults::time()
}
fn d_max_moves() -> u32 {
    defaults::max_moves()
}
fn d_c() -> f64 {
    defaults::c()
}
fn d_strategy() -> String {
    defaults::strategy().into()
}
fn d_retention() -> String {
    defaults::retention().into()
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Root configuration structure matching config.toml
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CentralConfig {
    #[serde(default)]
    pub common: CommonConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Settings shared by every component
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CommonConfig {
    #[serde(default = "d_log_level")]
    pub log_level: String,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::log_level().into(),
        }
    }
}

/// Search engine settings.
///
/// Strings are kept raw here; the engine parses and validates them when
/// building its own config, so a bad value is reported where it is used.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SearchConfig {
    /// Wall-clock budget per move, in seconds
    #[serde(default = "d_time")]
    pub time: f64,
    /// Per-playout move cap
    #[serde(default = "d_max_moves")]
    pub max_moves: u32,
    /// UCB1 exploration constant
    #[serde(default = "d_c")]
    pub c: f64,
    #[serde(default = "d_strategy")]
    pub strategy: String,
    #[serde(default = "d_retention")]
    pub retention: String,
    /// Fixed RNG seed; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time: defaults::time(),
            max_moves: defaults::max_moves(),
            c: defaults::c(),
            strategy: defaults::strategy().into(),
            retention: defaults::retention().into(),
            seed: None,
        }
    }
}
