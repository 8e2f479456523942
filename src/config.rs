use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub const QUALITY_LEVELS: &[&str] = &["auto", "1080p", "720p", "480p"];
pub const CAPTION_TRACKS: &[&str] = &["off", "english", "spanish"];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Honor the extended gamepad/navigation input codes. Off by default;
    /// plain terminals only produce keyboard codes anyway.
    #[serde(default = "default_extended_pad")]
    pub extended_pad: bool,
    #[serde(default = "default_caption_track")]
    pub caption_track: String,
    #[serde(default = "default_quality")]
    pub quality: String,
}

fn default_theme() -> String {
    "midnight".to_string()
}
fn default_extended_pad() -> bool {
    false
}
fn default_caption_track() -> String {
    "off".to_string()
}
fn default_quality() -> String {
    "auto".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            extended_pad: default_extended_pad(),
            caption_track: default_caption_track(),
            quality: default_quality(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tenfoot")
            .join("config.toml")
    }

    /// Reset stale values written by old versions to their defaults.
    /// Call after deserialization.
    pub fn normalize(&mut self) {
        // Old configs stored "hd" before explicit levels existed.
        if self.quality == "hd" {
            self.quality = "1080p".to_string();
        }
        if !QUALITY_LEVELS.contains(&self.quality.as_str()) {
            self.quality = default_quality();
        }
        if !CAPTION_TRACKS.contains(&self.caption_track.as_str()) {
            self.caption_track = default_caption_track();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_in_from_an_empty_file() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.theme, "midnight");
        assert!(!config.extended_pad);
        assert_eq!(config.caption_track, "off");
        assert_eq!(config.quality, "auto");
    }

    #[test]
    fn defaults_fill_in_around_present_fields() {
        let config: Config = toml::from_str("extended_pad = true\nquality = \"720p\"\n").unwrap();
        assert!(config.extended_pad);
        assert_eq!(config.quality, "720p");
        assert_eq!(config.theme, "midnight");
        assert_eq!(config.caption_track, "off");
    }

    #[test]
    fn toml_roundtrip_preserves_fields() {
        let mut config = Config::default();
        config.extended_pad = true;
        config.caption_track = "english".to_string();

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.extended_pad, config.extended_pad);
        assert_eq!(deserialized.caption_track, config.caption_track);
        assert_eq!(deserialized.quality, config.quality);
        assert_eq!(deserialized.theme, config.theme);
    }

    #[test]
    fn save_then_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.quality = "480p".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.quality, "480p");
    }

    #[test]
    fn load_of_a_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(loaded.quality, "auto");
    }

    #[test]
    fn normalize_maps_hd_to_1080p() {
        let mut config = Config::default();
        config.quality = "hd".to_string();
        config.normalize();
        assert_eq!(config.quality, "1080p");
    }

    #[test]
    fn normalize_resets_unknown_values() {
        let mut config = Config::default();
        config.quality = "4320p".to_string();
        config.caption_track = "klingon".to_string();
        config.normalize();
        assert_eq!(config.quality, "auto");
        assert_eq!(config.caption_track, "off");
    }
}
