use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("no theme named '{0}'")]
    NotFound(String),
    #[error("theme file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub dim: String,
    pub accent: String,
    pub border: String,
    pub header_bg: String,
    pub header_fg: String,
    pub menu_bg: String,
    pub menu_title: String,
    pub focus_bg: String,
    pub focus_fg: String,
    pub selected: String,
    pub bar_filled: String,
    pub bar_empty: String,
}

impl Theme {
    pub fn load(name: &str) -> Result<Self, ThemeError> {
        // User themes override the bundled ones
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("tenfoot")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                return Ok(toml::from_str(&content)?);
            }
        }

        let filename = format!("{name}.toml");
        let file = ThemeAssets::get(&filename).ok_or_else(|| ThemeError::NotFound(name.into()))?;
        let content = std::str::from_utf8(file.data.as_ref())
            .map_err(|_| ThemeError::NotFound(name.into()))?;
        Ok(toml::from_str(content)?)
    }

    pub fn available_themes() -> Vec<String> {
        ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("midnight").unwrap_or_else(|_| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#10101a".to_string(),
            fg: "#d8dee9".to_string(),
            dim: "#4c566a".to_string(),
            accent: "#88c0d0".to_string(),
            border: "#3b4252".to_string(),
            header_bg: "#1c1c2a".to_string(),
            header_fg: "#d8dee9".to_string(),
            menu_bg: "#16161f".to_string(),
            menu_title: "#81a1c1".to_string(),
            focus_bg: "#88c0d0".to_string(),
            focus_fg: "#10101a".to_string(),
            selected: "#a3be8c".to_string(),
            bar_filled: "#88c0d0".to_string(),
            bar_empty: "#2e3440".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn dim(&self) -> Color { Self::parse_color(&self.dim) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn menu_bg(&self) -> Color { Self::parse_color(&self.menu_bg) }
    pub fn menu_title(&self) -> Color { Self::parse_color(&self.menu_title) }
    pub fn focus_bg(&self) -> Color { Self::parse_color(&self.focus_bg) }
    pub fn focus_fg(&self) -> Color { Self::parse_color(&self.focus_fg) }
    pub fn selected(&self) -> Color { Self::parse_color(&self.selected) }
    pub fn bar_filled(&self) -> Color { Self::parse_color(&self.bar_filled) }
    pub fn bar_empty(&self) -> Color { Self::parse_color(&self.bar_empty) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_color_handles_hex_and_garbage() {
        assert_eq!(ThemeColors::parse_color("#10101a"), Color::Rgb(16, 16, 26));
        assert_eq!(ThemeColors::parse_color("ffffff"), Color::Rgb(255, 255, 255));
        assert_eq!(ThemeColors::parse_color("#zzz"), Color::White);
        assert_eq!(ThemeColors::parse_color(""), Color::White);
    }

    #[test]
    fn bundled_themes_parse() {
        for name in Theme::available_themes() {
            assert!(Theme::load(&name).is_ok(), "theme {name} failed to load");
        }
    }
}
