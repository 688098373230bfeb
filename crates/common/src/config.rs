//! # Site Configuration
//!
//! Parses `site.toml`, embedded at build time. The site never fetches
//! configuration at runtime; callers fall back to [`SiteConfig::default`]
//! when the file is malformed.
//!
//! ## Table of Contents
//! 1. SiteConfig
//! 2. Sections
//! 3. Loading

use serde::Deserialize;
use thiserror::Error;

use crate::nav::DEFAULT_SCROLL_THRESHOLD;
use crate::reveal::RevealMargin;

/// The embedded configuration file.
pub const SITE_TOML: &str = include_str!("../site.toml");

// ============================================================================
// 1. SiteConfig
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub log: LogConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub particles: ParticleConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site.toml is malformed: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown log level `{0}`")]
    LogLevel(String),
}

// ============================================================================
// 2. Sections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LogConfig {
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        self.level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.level.clone()))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub scroll_threshold: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
        }
    }
}

/// Root margins per kind of call site.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub heading_margin: RevealMargin,
    pub card_margin: RevealMargin,
    pub icon_margin: RevealMargin,
    pub footer_margin: RevealMargin,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            heading_margin: RevealMargin::HEADING,
            card_margin: RevealMargin::HEADING,
            icon_margin: RevealMargin::ICON,
            footer_margin: RevealMargin::EDGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub seed: u64,
    pub count: usize,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            seed: 0x5859_564F_58,
            count: 12,
        }
    }
}

// ============================================================================
// 3. Loading
// ============================================================================

impl SiteConfig {
    pub fn parse(source: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(source)?;
        config.log.level()?;
        Ok(config)
    }

    /// Parse the embedded `site.toml`.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::parse(SITE_TOML)
    }

    pub fn log_level(&self) -> log::Level {
        self.log.level().unwrap_or(log::Level::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::embedded().unwrap();
        assert_eq!(config.nav.scroll_threshold, 20.0);
        assert_eq!(config.reveal.heading_margin, RevealMargin(-80));
        assert_eq!(config.reveal.icon_margin, RevealMargin(-40));
        assert_eq!(config.particles.count, 12);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = SiteConfig::parse("[nav]\nscroll_threshold = 64.0\n").unwrap();
        assert_eq!(config.nav.scroll_threshold, 64.0);
        assert_eq!(config.reveal, RevealConfig::default());
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_bad_log_level_is_rejected() {
        let err = SiteConfig::parse("[log]\nlevel = \"loud\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::LogLevel(ref l) if l == "loud"));
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let err = SiteConfig::parse("[nav\nscroll_threshold = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
