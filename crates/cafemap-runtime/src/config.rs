use crate::{Error, Result};
use cafemap_types::Coordinates;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the café list comes from. URL wins over path; with neither set the
/// bundled starter list is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Fixed fallback position for sessions without a live location fix
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

impl LocationConfig {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub location: Option<LocationConfig>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .or_else(|| std::env::var_os("HOME").map(PathBuf::from))
            .ok_or_else(|| {
                Error::Config(
                    "Could not determine config path: no HOME or XDG config directory found"
                        .to_string(),
                )
            })?;
        Ok(base.join("cafemap").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.source.url.is_none());
        assert!(config.source.path.is_none());
        assert!(config.location.is_none());
    }

    #[test]
    fn test_config_load_from_file() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            "[source]\nurl = \"https://example.com/sheet.csv\"\n\n\
             [location]\nlatitude = 20.6736\nlongitude = -103.405\n",
        )
        .unwrap();

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(
            loaded.source.url.as_deref(),
            Some("https://example.com/sheet.csv")
        );
        assert_eq!(
            loaded.location.unwrap().coordinates(),
            Coordinates::new(20.6736, -103.405)
        );

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert!(config.source.url.is_none());

        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[source]\npath = \"cafes.csv\"\n").unwrap();

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.source.path.as_deref(), Some(Path::new("cafes.csv")));
        assert!(config.source.url.is_none());
        assert!(config.location.is_none());

        Ok(())
    }
}
