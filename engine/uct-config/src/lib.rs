//! Centralized configuration loading from config.toml.
//!
//! This crate provides the configuration structs and loading logic used by
//! anything that embeds the search engine.
//!
//! # Configuration Priority
//!
//! Settings are loaded with the following priority (highest to lowest):
//! 1. Environment variables (`UCT_<SECTION>_<KEY>`)
//! 2. config.toml file
//! 3. Built-in defaults (config.defaults.toml, embedded at compile time)
//!
//! # Environment Variable Override Pattern
//!
//! ```text
//! UCT_<SECTION>_<KEY>=value
//!
//! Examples:
//!     UCT_COMMON_LOG_LEVEL=debug
//!     UCT_SEARCH_TIME=2.5
//!     UCT_SEARCH_MAX_MOVES=200
//!     UCT_SEARCH_C=0.7
//!     UCT_SEARCH_STRATEGY=value
//!     UCT_SEARCH_RETENTION=per_turn
//!     UCT_SEARCH_SEED=42
//! ```

mod defaults;
mod loader;
mod logging;
mod structs;

pub use defaults::*;
pub use loader::{apply_env_overrides, load_config, load_from_path, CONFIG_SEARCH_PATHS};
pub use logging::{init_tracing, LoggingError};
pub use structs::*;
