use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::debug;

use luach_names::Locale;
use luach_solar::Observer;

/// Top-level Luach configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LuachConfig {
    /// Apply the diaspora calendar (second festival days).
    #[serde(default)]
    pub diaspora: bool,

    /// Output language: "hebrew" or "english".
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Observer location for sun times.
    #[serde(default)]
    pub observer: ObserverToml,
}

fn default_locale() -> String {
    "hebrew".to_string()
}

impl Default for LuachConfig {
    fn default() -> Self {
        Self {
            diaspora: false,
            locale: default_locale(),
            observer: ObserverToml::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObserverToml {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default)]
    pub elevation: f64,
    /// Fixed offset of the observer's wall clock from UTC, in hours.
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: f64,
}

impl Default for ObserverToml {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            elevation: 0.0,
            utc_offset_hours: default_utc_offset_hours(),
        }
    }
}

// Jerusalem.
fn default_latitude() -> f64 {
    31.7683
}
fn default_longitude() -> f64 {
    35.2137
}
fn default_utc_offset_hours() -> f64 {
    2.0
}

impl LuachConfig {
    /// Loads a configuration file, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }

    /// Parsed output locale.
    pub fn locale(&self) -> Result<Locale> {
        match self.locale.as_str() {
            "hebrew" | "he" => Ok(Locale::Hebrew),
            "english" | "en" => Ok(Locale::English),
            other => bail!("unknown locale {other:?}: expected \"hebrew\" or \"english\""),
        }
    }

    /// Observer built from the TOML location block.
    pub fn observer(&self) -> Result<Observer> {
        let o = Observer::new(self.observer.latitude, self.observer.longitude)
            .context("invalid [observer] coordinates")?;
        Ok(o.with_elevation(self.observer.elevation))
    }

    /// Wall-clock offset from UTC in whole seconds.
    pub fn utc_offset_seconds(&self) -> i32 {
        (self.observer.utc_offset_hours * 3600.0).round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_jerusalem() {
        let cfg = LuachConfig::default();
        assert!(!cfg.diaspora);
        assert_eq!(cfg.observer.latitude, 31.7683);
        assert_eq!(cfg.utc_offset_seconds(), 7200);
    }

    #[test]
    fn parses_a_full_file() {
        let cfg: LuachConfig = toml::from_str(
            r#"
            diaspora = true
            locale = "english"

            [observer]
            latitude = 40.7128
            longitude = -74.0060
            elevation = 10.0
            utc_offset_hours = -5.0
            "#,
        )
        .unwrap();
        assert!(cfg.diaspora);
        assert_eq!(cfg.locale().unwrap(), Locale::English);
        assert_eq!(cfg.utc_offset_seconds(), -18_000);
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = toml::from_str::<LuachConfig>("timezone = \"Asia/Jerusalem\"");
        assert!(err.is_err());
    }

    #[test]
    fn default_locale_is_hebrew() {
        let cfg: LuachConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.locale().unwrap(), Locale::Hebrew);
    }
}
