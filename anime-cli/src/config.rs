// ABOUTME: Configuration file loading, validation, and hierarchical merging for anime-list
// ABOUTME: Supports TOML config files with XDG Base Directory specification compliance

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::{display, APP_NAME};

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub image_base_url: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub watchlist_path: Option<PathBuf>,
    #[serde(default)]
    pub cover_width: Option<u32>,
    #[serde(default)]
    pub glyph: Option<char>,
    #[serde(default)]
    pub terminal_columns: Option<usize>,
}

impl Config {
    /// Load configuration from standard XDG-compliant locations
    pub fn load() -> Result<Self> {
        Self::load_from_paths(&Self::get_config_paths())
    }

    /// Load configuration from file paths, lowest precedence first.
    /// Missing files are skipped; unreadable or invalid files are errors.
    pub fn load_from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut config = Config::default();

        for path in paths {
            let path = path.as_ref();
            if !path.exists() {
                continue;
            }
            log::debug!("Loading config from {}", path.display());
            config = config.merge(Self::load_from_file(path)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse TOML config file: {}",
                path.as_ref().display()
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Standard config file paths, lowest precedence first
    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".config").join(APP_NAME).join("config.toml"));
        }

        if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(config_home).join(APP_NAME).join("config.toml"));
        }

        if let Ok(current_dir) = std::env::current_dir() {
            paths.push(current_dir.join(format!("{APP_NAME}.toml")));
        }

        paths
    }

    /// Merge this config with another, giving precedence to the other config
    pub fn merge(self, other: Config) -> Config {
        Config {
            api_url: other.api_url.or(self.api_url),
            image_base_url: other.image_base_url.or(self.image_base_url),
            language: other.language.or(self.language),
            watchlist_path: other.watchlist_path.or(self.watchlist_path),
            cover_width: other.cover_width.or(self.cover_width),
            glyph: other.glyph.or(self.glyph),
            terminal_columns: other.terminal_columns.or(self.terminal_columns),
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        if self.cover_width == Some(0) {
            return Err(anyhow!("cover_width must be greater than zero"));
        }
        if self.terminal_columns == Some(0) {
            return Err(anyhow!("terminal_columns must be greater than zero"));
        }
        if let (Some(columns), Some(width)) = (self.terminal_columns, self.cover_width) {
            if columns <= width as usize + 1 {
                return Err(anyhow!(
                    "terminal_columns ({columns}) leaves no room beside a {width}-column cover"
                ));
            }
        }
        if let Some(glyph) = self.glyph {
            if glyph.is_control() || glyph.is_whitespace() {
                return Err(anyhow!("glyph must be a visible character"));
            }
        }
        for (key, url) in [
            ("api_url", &self.api_url),
            ("image_base_url", &self.image_base_url),
        ] {
            if let Some(url) = url {
                url::Url::parse(url).with_context(|| format!("Invalid {key}: {url}"))?;
            }
        }
        Ok(())
    }

    pub fn cover_width(&self) -> u32 {
        self.cover_width.unwrap_or(display::COVER_WIDTH)
    }

    pub fn glyph(&self) -> char {
        self.glyph.unwrap_or(display::DEFAULT_GLYPH)
    }

    /// Configured watchlist file, or the platform data directory default
    pub fn watchlist_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.watchlist_path {
            return Ok(path.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_NAME).join("watchlist.json"))
            .ok_or_else(|| anyhow!("Could not determine a data directory; set watchlist_path"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api_url.is_none());
        assert_eq!(config.cover_width(), 30);
        assert_eq!(config.glyph(), 'o');
    }

    #[test]
    fn test_merge_configs() {
        let base = Config {
            language: Some("en".to_string()),
            cover_width: Some(20),
            ..Default::default()
        };

        let override_config = Config {
            language: Some("ja".to_string()),
            api_url: Some("https://tmdb.example.com/3".to_string()),
            ..Default::default()
        };

        let merged = base.merge(override_config);
        assert_eq!(merged.language, Some("ja".to_string()));
        assert_eq!(merged.cover_width, Some(20));
        assert_eq!(merged.api_url, Some("https://tmdb.example.com/3".to_string()));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let zero_width = Config {
            cover_width: Some(0),
            ..Default::default()
        };
        assert!(zero_width.validate().is_err());

        let cramped = Config {
            cover_width: Some(30),
            terminal_columns: Some(31),
            ..Default::default()
        };
        assert!(cramped.validate().is_err());

        let blank_glyph = Config {
            glyph: Some(' '),
            ..Default::default()
        };
        assert!(blank_glyph.validate().is_err());

        let bad_url = Config {
            api_url: Some("not a url".to_string()),
            ..Default::default()
        };
        assert!(bad_url.validate().is_err());
    }

    #[test]
    fn test_explicit_watchlist_path() {
        let config = Config {
            watchlist_path: Some(PathBuf::from("/tmp/list.json")),
            ..Default::default()
        };
        assert_eq!(
            config.watchlist_path().unwrap(),
            PathBuf::from("/tmp/list.json")
        );
    }
}
