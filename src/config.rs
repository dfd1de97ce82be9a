//! Runtime configuration read from the environment.
//!
//! Desktop development reads a `.env` file; mobile and web builds ship a
//! bundled `config.env`. Real environment variables always win.

use crate::rotation::{DEFAULT_ANCHOR, Rotation};
use std::env;
use std::path::PathBuf;
use time::Date;
use time::format_description::FormatItem;
use time::macros::format_description;

pub const ANCHOR_VAR: &str = "MENU_ROTATION_ANCHOR";
pub const STORAGE_DIR_VAR: &str = "MENU_STORAGE_DIR";
pub const LOG_VAR: &str = "MENU_LOG";

const DEFAULT_LOG_FILTER: &str = "info";
const ANCHOR_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid MENU_ROTATION_ANCHOR '{value}': expected YYYY-MM-DD ({source})")]
    InvalidAnchor {
        value: String,
        #[source]
        source: time::error::Parse,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub anchor: Date,
    pub storage_dir: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            anchor: DEFAULT_ANCHOR,
            storage_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any variable source; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let anchor = match get(ANCHOR_VAR) {
            Some(value) => parse_anchor(&value)?,
            None => DEFAULT_ANCHOR,
        };

        Ok(Self {
            anchor,
            storage_dir: get(STORAGE_DIR_VAR).map(PathBuf::from),
            log_filter: get(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }

    pub fn rotation(&self) -> Rotation {
        Rotation::new(self.anchor)
    }
}

pub fn parse_anchor(value: &str) -> Result<Date, ConfigError> {
    Date::parse(value, ANCHOR_FORMAT).map_err(|source| ConfigError::InvalidAnchor {
        value: value.to_string(),
        source,
    })
}

/// Applies `KEY=VALUE` lines without overriding variables that are already set.
pub fn apply_env_lines(contents: &str) {
    for (key, value) in parse_env_lines(contents) {
        if env::var(key).is_err() {
            // SAFETY: We're setting env vars at startup before any threads are spawned
            unsafe {
                env::set_var(key, value);
            }
        }
    }
}

/// Parses `KEY=VALUE` lines, skipping blanks and `#` comments.
pub fn parse_env_lines(contents: &str) -> Vec<(&str, &str)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .collect()
}
