//! Construction-time attributes
//!
//! Attributes come from a declarative UI description and are read once when
//! the widget is created. Keys use the same camelCase names as the layout
//! attributes (`waveColor`, `waviness`); colors are `#RRGGBB` or `#AARRGGBB`
//! strings.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sinwave_core::Color;

use crate::state::{clamp_waviness, DEFAULT_WAVINESS};

/// Style attributes for a wave widget
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WaveAttributes {
    /// Fill color of the wave
    #[serde(with = "hex_color")]
    pub wave_color: Color,
    /// Initial waviness, clamped into `[0, 1]` at load
    #[serde(deserialize_with = "clamped_waviness")]
    pub waviness: f32,
}

impl Default for WaveAttributes {
    fn default() -> Self {
        Self {
            wave_color: Color::RED,
            waviness: DEFAULT_WAVINESS,
        }
    }
}

impl WaveAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wave color
    pub fn wave_color(mut self, color: Color) -> Self {
        self.wave_color = color;
        self
    }

    /// Set the initial waviness (clamped)
    pub fn waviness(mut self, waviness: f32) -> Self {
        self.waviness = clamp_waviness(waviness);
        self
    }
}

fn clamped_waviness<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    f32::deserialize(deserializer).map(clamp_waviness)
}

mod hex_color {
    use super::*;

    pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&color.to_hex_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Color::parse_hex(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let attrs = WaveAttributes::default();
        assert_eq!(attrs.wave_color, Color::RED);
        assert_eq!(attrs.waviness, 1.0);
    }

    #[test]
    fn test_builder_clamps() {
        let attrs = WaveAttributes::new().waviness(4.0).wave_color(Color::BLUE);
        assert_eq!(attrs.waviness, 1.0);
        assert_eq!(attrs.wave_color, Color::BLUE);
    }

    #[test]
    fn test_deserialize_from_toml() {
        let attrs: WaveAttributes = toml::from_str(
            r##"
            waveColor = "#0000FF"
            waviness = 0.25
            "##,
        )
        .unwrap();

        assert_eq!(attrs.wave_color, Color::BLUE);
        assert_eq!(attrs.waviness, 0.25);
    }

    #[test]
    fn test_deserialize_clamps_and_defaults() {
        let attrs: WaveAttributes = toml::from_str("waviness = 3.0").unwrap();
        assert_eq!(attrs.waviness, 1.0);
        assert_eq!(attrs.wave_color, Color::RED);

        let attrs: WaveAttributes = toml::from_str("").unwrap();
        assert_eq!(attrs, WaveAttributes::default());
    }

    #[test]
    fn test_deserialize_rejects_bad_color() {
        let result: Result<WaveAttributes, _> = toml::from_str(r#"waveColor = "red""#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("must start with '#'"), "{err}");
    }

    #[test]
    fn test_serialize_hex() {
        let text = toml::to_string(&WaveAttributes::default()).unwrap();
        assert!(text.contains(r##"waveColor = "#FF0000""##), "{text}");
    }
}
