//! Environment-driven configuration.
//!
//! # Responsibility
//! - Resolve runtime settings from `EVALTRACK_*` variables, with `.env`
//!   support for local development.
//! - Keep value parsing pure so it stays testable without touching the
//!   process environment.

use std::path::PathBuf;

use once_cell::sync::Lazy;

use crate::logging::default_log_level;

const ENV_DATABASE_PATH: &str = "EVALTRACK_DATABASE_PATH";
const ENV_LOG_DIR: &str = "EVALTRACK_LOG_DIR";
const ENV_LOG_LEVEL: &str = "EVALTRACK_LOG_LEVEL";
const ENV_DEBUG: &str = "EVALTRACK_DEBUG";

const DEFAULT_DATABASE_PATH: &str = "evaltrack.db";

static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenvy::dotenv();
});

/// Resolved runtime settings for the core crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// SQLite database file path.
    pub database_path: PathBuf,
    /// Log directory; file logging is skipped when unset.
    pub log_dir: Option<PathBuf>,
    /// Log level name accepted by `init_logging`.
    pub log_level: String,
    pub debug: bool,
}

impl CoreConfig {
    /// Reads configuration from the process environment.
    ///
    /// Loads `.env` once per process before the first read; real
    /// environment variables win over `.env` entries.
    pub fn from_env() -> Self {
        Lazy::force(&DOTENV_LOADED);
        Self {
            database_path: std::env::var(ENV_DATABASE_PATH)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATABASE_PATH)),
            log_dir: std::env::var(ENV_LOG_DIR).ok().map(PathBuf::from),
            log_level: std::env::var(ENV_LOG_LEVEL)
                .unwrap_or_else(|_| default_log_level().to_string()),
            debug: std::env::var(ENV_DEBUG)
                .map(|value| parse_flag(&value))
                .unwrap_or(false),
        }
    }
}

/// Parses a boolean-ish environment value.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

#[cfg(test)]
mod tests {
    use super::parse_flag;

    #[test]
    fn parse_flag_accepts_truthy_spellings() {
        assert!(parse_flag("1"));
        assert!(parse_flag("true"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("yes"));
    }

    #[test]
    fn parse_flag_rejects_everything_else() {
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("on"));
    }
}
