// File: crates/boostlog-core/src/theme.rs
// Summary: Light/Dark palettes for chart chrome (grid, zero line, title, text).

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(self) -> Palette {
        palette(self)
    }
}

/// What the user asked for; `System` defers to the host's preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub fn resolve(self, system_prefers_dark: bool) -> ThemeMode {
        match self {
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
            ThemePreference::System if system_prefers_dark => ThemeMode::Dark,
            ThemePreference::System => ThemeMode::Light,
        }
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" | "auto" => Ok(ThemePreference::System),
            other => Err(format!("unknown theme '{other}' (expected light, dark or system)")),
        }
    }
}

/// Static colors for everything that is not a data series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub name: &'static str,
    pub background: Rgba,
    /// Regular grid lines.
    pub grid: Rgba,
    /// Grid line at value zero on axes that emphasize it.
    pub zero_line: Rgba,
    pub title: Rgba,
    pub text: Rgba,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::WHITE,
            grid: Rgba::rgb(75, 75, 75).with_alpha(0.2),
            zero_line: Rgba::rgb(125, 125, 125),
            title: Rgba::BLACK,
            text: Rgba::BLACK,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(15, 23, 42), // slate-900
            grid: Rgba::rgb(125, 125, 125).with_alpha(0.2),
            zero_line: Rgba::rgb(125, 125, 125),
            title: Rgba::WHITE,
            text: Rgba::WHITE.with_alpha(0.7),
        }
    }
}

/// Palette for a theme mode.
pub fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Light => Palette::light(),
        ThemeMode::Dark => Palette::dark(),
    }
}
