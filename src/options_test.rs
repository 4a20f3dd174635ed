use std::collections::HashMap;

use super::*;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |name| map.get(name).cloned()
}

// =============================================================
// SiteOptions
// =============================================================

#[test]
fn no_attributes_yields_defaults() {
    let opts = SiteOptions::from_attributes(attrs(&[]));
    assert_eq!(opts, SiteOptions::default());
    assert_eq!(opts.config_url, "config.json");
    assert_eq!(opts.default_tab, "home");
    assert_eq!(opts.log_level, log::Level::Info);
}

#[test]
fn attributes_override_defaults() {
    let opts = SiteOptions::from_attributes(attrs(&[
        ("data-config-url", "/content/site.json"),
        ("data-default-tab", "about"),
        ("data-log-level", "debug"),
    ]));
    assert_eq!(opts.config_url, "/content/site.json");
    assert_eq!(opts.default_tab, "about");
    assert_eq!(opts.log_level, log::Level::Debug);
}

#[test]
fn blank_attributes_count_as_absent() {
    let opts = SiteOptions::from_attributes(attrs(&[
        ("data-config-url", "  "),
        ("data-default-tab", ""),
        ("data-log-level", " "),
    ]));
    assert_eq!(opts, SiteOptions::default());
}

#[test]
fn attribute_values_are_trimmed() {
    let opts = SiteOptions::from_attributes(attrs(&[("data-default-tab", " projects ")]));
    assert_eq!(opts.default_tab, "projects");
}

#[test]
fn unknown_log_level_keeps_default() {
    let opts = SiteOptions::from_attributes(attrs(&[("data-log-level", "verbose")]));
    assert_eq!(opts.log_level, DEFAULT_LOG_LEVEL);
    assert_eq!(opts.rejected_log_level.as_deref(), Some("verbose"));
}

#[test]
fn known_log_level_is_not_rejected() {
    let opts = SiteOptions::from_attributes(attrs(&[("data-log-level", " Warn ")]));
    assert_eq!(opts.log_level, log::Level::Warn);
    assert_eq!(opts.rejected_log_level, None);
}

// =============================================================
// parse_log_level
// =============================================================

#[test]
fn parse_log_level_is_case_insensitive() {
    assert_eq!(parse_log_level("WARN").unwrap(), log::Level::Warn);
    assert_eq!(parse_log_level("Trace").unwrap(), log::Level::Trace);
    assert_eq!(parse_log_level(" error ").unwrap(), log::Level::Error);
}

#[test]
fn parse_log_level_rejects_blank_and_unknown() {
    assert!(parse_log_level("").is_err());
    assert!(parse_log_level("off").is_err());
    assert!(parse_log_level("verbose").is_err());
}
