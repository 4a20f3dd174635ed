//! Site content document (`config.json`) and how it is fetched.
//!
//! Every field is optional: a partial document still projects whatever it
//! does carry, and the page skeleton keeps its built-in text for the rest.
//!
//! ERROR HANDLING
//! ==============
//! [`fetch`] distinguishes transport failures, non-success statuses and
//! malformed JSON so the bootstrap can log a precise reason before carrying
//! on without dynamic content.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config request failed: {0}")]
    Network(String),
    #[error("config request returned HTTP {0}")]
    Status(u16),
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config fetch is only available in the browser")]
    Unavailable,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteInfo,
    pub home: HomeSection,
    pub chirag: ChiragSection,
    pub jiggi: JiggiSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub title: Option<String>,
    pub footer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HomeSection {
    pub intro: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChiragSection {
    pub about_me: Option<String>,
    pub my_work: Option<String>,
    pub spiritual_side: Option<String>,
    /// `None` leaves the skeleton's list alone; `Some(vec![])` clears it.
    pub passions: Option<Vec<Passion>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Passion {
    pub name: String,
    pub desc: String,
    pub url: Option<String>,
}

impl Passion {
    /// Link target, ignoring blank URLs.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JiggiSection {
    pub intro: Option<String>,
    pub sections: Option<Vec<StoryCard>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoryCard {
    pub title: String,
    pub text: String,
}

impl SiteConfig {
    /// Parse a `config.json` body.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the body is not a JSON object of the
    /// expected shape.
    pub fn parse(body: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(body)?)
    }
}

/// Fetch and parse the content document at `url`.
///
/// # Errors
///
/// Returns a [`ConfigError`] describing why no document is available.
pub async fn fetch(url: &str) -> Result<SiteConfig, ConfigError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ConfigError::Network(e.to_string()))?;
        let status = resp.status();
        if !(200..300).contains(&status) {
            return Err(ConfigError::Status(status));
        }
        let body = resp.text().await.map_err(|e| ConfigError::Network(e.to_string()))?;
        SiteConfig::parse(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::debug!("skipping config fetch of {url} outside the browser");
        Err(ConfigError::Unavailable)
    }
}
