//! SinWave configuration file handling
//!
//! The CLI reads an optional `sinwave.toml`:
//!
//! ```toml
//! [wave]
//! waveColor = "#FF0000"
//! waviness = 1.0
//!
//! [surface]
//! width = 500.0
//! height = 100.0
//! density = 1.0
//!
//! [app]
//! seekbar_max = 100
//! header_height = 200.0
//! title_height = 56.0
//! ```
//!
//! Every section and key is optional.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sinwave_app::AppConfig;
use sinwave_core::Size;
use sinwave_widget::{DisplayMetrics, WaveAttributes};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default config file name
pub const CONFIG_FILE: &str = "sinwave.toml";

/// Contents of `sinwave.toml`
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SinwaveConfig {
    #[serde(default)]
    pub wave: WaveAttributes,
    #[serde(default)]
    pub surface: SurfaceConfig,
    #[serde(default)]
    pub app: AppSection,
}

/// Drawing surface size and density
#[derive(Debug, Deserialize, Serialize)]
pub struct SurfaceConfig {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default = "default_density")]
    pub density: f32,
}

fn default_width() -> f32 {
    500.0
}

fn default_height() -> f32 {
    100.0
}

fn default_density() -> f32 {
    1.0
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            density: default_density(),
        }
    }
}

/// Demo app settings
#[derive(Debug, Deserialize, Serialize)]
pub struct AppSection {
    #[serde(default = "default_seekbar_max")]
    pub seekbar_max: i32,
    #[serde(default = "default_header_height")]
    pub header_height: f32,
    #[serde(default = "default_title_height")]
    pub title_height: f32,
}

fn default_seekbar_max() -> i32 {
    100
}

fn default_header_height() -> f32 {
    200.0
}

fn default_title_height() -> f32 {
    56.0
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            seekbar_max: default_seekbar_max(),
            header_height: default_header_height(),
            title_height: default_title_height(),
        }
    }
}

impl SinwaveConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config: SinwaveConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `path` if given, otherwise `sinwave.toml` in `dir` if it exists,
    /// otherwise defaults
    pub fn resolve(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let default_path = dir.join(CONFIG_FILE);
        if default_path.exists() {
            return Self::load(&default_path);
        }

        debug!("no {} found; using defaults", CONFIG_FILE);
        Ok(Self::default())
    }

    /// Display metrics for the configured density
    pub fn metrics(&self) -> DisplayMetrics {
        DisplayMetrics::new(self.surface.density)
    }

    /// Demo app configuration
    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            attributes: self.wave.clone(),
            metrics: self.metrics(),
            viewport: Size::new(self.surface.width, self.surface.height),
            seekbar_max: self.app.seekbar_max,
            header_height: self.app.header_height,
            title_height: self.app.title_height,
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sinwave_core::Color;

    #[test]
    fn test_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let config = SinwaveConfig::resolve(None, dir.path()).unwrap();

        assert_eq!(config.wave, WaveAttributes::default());
        assert_eq!(config.surface.width, 500.0);
        assert_eq!(config.app.seekbar_max, 100);
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            r##"
[wave]
waveColor = "#0000FF"
waviness = 0.5

[surface]
width = 320.0
density = 2.0
"##,
        )
        .unwrap();

        let config = SinwaveConfig::resolve(None, dir.path()).unwrap();
        assert_eq!(config.wave.wave_color, Color::BLUE);
        assert_eq!(config.wave.waviness, 0.5);
        assert_eq!(config.surface.width, 320.0);
        assert_eq!(config.surface.height, 100.0);
        assert_eq!(config.metrics(), DisplayMetrics::new(2.0));
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[wave]\nwaveColor = \"blue\"\n").unwrap();

        let err = SinwaveConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"), "{err}");
    }

    #[test]
    fn test_app_config() {
        let config = SinwaveConfig::default();
        let app = config.app_config();
        assert_eq!(app.viewport, Size::new(500.0, 100.0));
        assert_eq!(app.title_height, 56.0);
    }
}
