//! Boot-time options read from `data-*` attributes on `<body>`.
//!
//! Optional:
//! - `data-config-url`: content document location, default `config.json`
//! - `data-default-tab`: tab shown without a fragment, default `home`
//! - `data-log-level`: `error`..`trace`, default `info`

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;

use crate::consts::{DEFAULT_CONFIG_URL, DEFAULT_TAB};

pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    pub config_url: String,
    pub default_tab: String,
    pub log_level: log::Level,
    /// Raw `data-log-level` value that named no level, for the caller to
    /// report once the logger is installed.
    pub rejected_log_level: Option<String>,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            config_url: DEFAULT_CONFIG_URL.to_owned(),
            default_tab: DEFAULT_TAB.to_owned(),
            log_level: DEFAULT_LOG_LEVEL,
            rejected_log_level: None,
        }
    }
}

impl SiteOptions {
    /// Build options from an attribute lookup (`attr("data-config-url")`).
    ///
    /// Blank values count as absent. An unparseable log level keeps the
    /// default and is kept in `rejected_log_level`.
    pub fn from_attributes(attr: impl Fn(&str) -> Option<String>) -> Self {
        let config_url = non_blank(attr("data-config-url")).unwrap_or_else(|| DEFAULT_CONFIG_URL.to_owned());
        let default_tab = non_blank(attr("data-default-tab")).unwrap_or_else(|| DEFAULT_TAB.to_owned());
        let (log_level, rejected_log_level) = match non_blank(attr("data-log-level")) {
            None => (DEFAULT_LOG_LEVEL, None),
            Some(raw) => match parse_log_level(&raw) {
                Ok(level) => (level, None),
                Err(_) => (DEFAULT_LOG_LEVEL, Some(raw)),
            },
        };
        Self { config_url, default_tab, log_level, rejected_log_level }
    }
}

/// Parse a level name (`error`..`trace`) case-insensitively.
///
/// # Errors
///
/// Returns [`log::ParseLevelError`] for blank or unknown names, `off` included.
pub fn parse_log_level(raw: &str) -> Result<log::Level, log::ParseLevelError> {
    raw.trim().parse()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
