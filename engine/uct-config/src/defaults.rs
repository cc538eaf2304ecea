//! Default configuration values loaded from config.defaults.toml.
//!
//! The defaults file is embedded at compile time so every consumer sees
//! identical values without shipping the file alongside the binary.

use once_cell::sync::Lazy;
use serde::Deserialize;

/// The embedded defaults TOML file (loaded at compile time)
const DEFAULTS_TOML: &str = include_str!("../../../config.defaults.toml");

/// Parsed defaults structure (parsed once at first use)
static DEFAULTS: Lazy<DefaultsConfig> = Lazy::new(|| {
    toml::from_str(DEFAULTS_TOML).expect("config.defaults.toml should be valid TOML")
});

// ============================================================================
// Internal structs for parsing config.defaults.toml
// ============================================================================

#[derive(Debug, Deserialize)]
struct DefaultsConfig {
    common: CommonDefaults,
    search: SearchDefaults,
}

#[derive(Debug, Deserialize)]
struct CommonDefaults {
    log_level: String,
}

#[derive(Debug, Deserialize)]
struct SearchDefaults {
    time: f64,
    max_moves: u32,
    c: f64,
    strategy: String,
    retention: String,
}

// ============================================================================
// Public accessor functions
// ============================================================================

// Common
pub fn log_level() -> &'static str {
    &DEFAULTS.common.log_level
}

// Search
pub fn time() -> f64 {
    DEFAULTS.search.time
}
pub fn max_moves() -> u32 {
    DEFAULTS.search.max_moves
}
pub fn c() -> f64 {
    DEFAULTS.search.c
}
pub fn strategy() -> &'static str {
    &DEFAULTS.search.strategy
}
pub fn retention() -> &'static str {
    &DEFAULTS.search.retention
}
