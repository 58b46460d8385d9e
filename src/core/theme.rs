//! Farb-Themes und der Theme-Provider-Vertrag.

use crate::shared::options::{
    DARK_COLOR_HIGH, DARK_COLOR_LOW, DARK_COLOR_MID, LIGHT_COLOR_HIGH, LIGHT_COLOR_LOW,
    LIGHT_COLOR_MID,
};
use serde::{Deserialize, Serialize};

/// Verfügbare Farb-Themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dunkles Theme
    #[default]
    Dark,
    /// Helles Theme
    Light,
}

impl Theme {
    /// Das jeweils andere Theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Farben des aktuellen Themes (RGBA).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThemeColors {
    /// Hervorhebung: Kabel, Labels, Handles
    pub color_high: [f32; 4],
    /// Mittlere Farbe: Prozessor-Outlines
    pub color_mid: [f32; 4],
    /// Hintergrund
    pub color_low: [f32; 4],
}

impl ThemeColors {
    /// Farbpalette für ein Theme.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                color_high: DARK_COLOR_HIGH,
                color_mid: DARK_COLOR_MID,
                color_low: DARK_COLOR_LOW,
            },
            Theme::Light => Self {
                color_high: LIGHT_COLOR_HIGH,
                color_mid: LIGHT_COLOR_MID,
                color_low: LIGHT_COLOR_LOW,
            },
        }
    }
}

/// Liefert die Farben des aktuellen Themes.
pub trait ThemeProvider {
    /// Aktuelle Theme-Farben.
    fn theme_colors(&self) -> ThemeColors;
}

impl ThemeProvider for Theme {
    fn theme_colors(&self) -> ThemeColors {
        ThemeColors::for_theme(*self)
    }
}

impl ThemeProvider for ThemeColors {
    fn theme_colors(&self) -> ThemeColors {
        *self
    }
}
