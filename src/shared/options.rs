//! Zentrale Konfiguration für die Kabel-Szene.
//!
//! `CableOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kabel-Geometrie ─────────────────────────────────────────────────

/// Obergrenze der Kurvenstärke (verhindert zu starke Bögen bei langen Kabeln).
pub const CURVE_STRENGTH_MAX: f32 = 30.0;
/// Anzahl der Kurvensegmente pro Kabel (ergibt `CURVE_SEGMENTS + 1` Punkte).
pub const CURVE_SEGMENTS: usize = 50;

// ── Delete-Button & Drag-Handle ─────────────────────────────────────

/// Radius des Delete-Buttons in Welteinheiten.
pub const DELETE_BUTTON_RADIUS: f32 = 2.0;
/// Halbe Kantenlänge des Kreuzes im Delete-Button.
pub const DELETE_CROSS_RADIUS: f32 = 0.8;
/// Radius des Drag-Handles am Ende eines gezogenen Kabels.
pub const DRAG_HANDLE_RADIUS: f32 = 1.5;
/// Segmente für Kreis-Outlines (Delete-Button, Drag-Handle).
pub const CIRCLE_SEGMENTS: usize = 32;

// ── Viewer ─────────────────────────────────────────────────────────

/// Pick-Radius für Connectoren in Welteinheiten.
pub const CONNECTOR_PICK_RADIUS: f32 = 2.5;
/// Radius eines Prozessor-Körpers in Welteinheiten.
pub const PROCESSOR_RADIUS: f32 = 8.0;
/// Pixel pro Welteinheit im Viewer.
pub const VIEWER_PIXELS_PER_UNIT: f32 = 4.0;

// ── Theme-Farben ───────────────────────────────────────────────────

/// Hervorhebungsfarbe im dunklen Theme (RGBA: Hellgrau).
pub const DARK_COLOR_HIGH: [f32; 4] = [0.87, 0.87, 0.87, 1.0];
/// Mittlere Farbe im dunklen Theme.
pub const DARK_COLOR_MID: [f32; 4] = [0.53, 0.53, 0.53, 1.0];
/// Hintergrundfarbe im dunklen Theme.
pub const DARK_COLOR_LOW: [f32; 4] = [0.13, 0.13, 0.13, 1.0];
/// Hervorhebungsfarbe im hellen Theme (RGBA: Dunkelgrau).
pub const LIGHT_COLOR_HIGH: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
/// Mittlere Farbe im hellen Theme.
pub const LIGHT_COLOR_MID: [f32; 4] = [0.6, 0.6, 0.6, 1.0];
/// Hintergrundfarbe im hellen Theme.
pub const LIGHT_COLOR_LOW: [f32; 4] = [0.93, 0.93, 0.93, 1.0];

/// Alle zur Laufzeit änderbaren Optionen der Kabel-Szene.
/// Wird als `patch_cables.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableOptions {
    // ── Geometrie ───────────────────────────────────────────────
    /// Obergrenze der Kurvenstärke
    pub curve_strength_max: f32,

    // ── Delete-Button & Drag-Handle ─────────────────────────────
    /// Radius des Delete-Buttons
    pub delete_button_radius: f32,
    /// Halbe Kantenlänge des Kreuzes
    pub delete_cross_radius: f32,
    /// Radius des Drag-Handles
    pub drag_handle_radius: f32,
    /// Segmente für Kreis-Outlines
    #[serde(default = "default_circle_segments")]
    pub circle_segments: usize,

    // ── Viewer ──────────────────────────────────────────────────
    /// Pick-Radius für Connectoren
    pub connector_pick_radius: f32,
    /// Radius eines Prozessor-Körpers
    pub processor_radius: f32,
    /// Pixel pro Welteinheit
    #[serde(default = "default_pixels_per_unit")]
    pub pixels_per_unit: f32,
}

impl Default for CableOptions {
    fn default() -> Self {
        Self {
            curve_strength_max: CURVE_STRENGTH_MAX,
            delete_button_radius: DELETE_BUTTON_RADIUS,
            delete_cross_radius: DELETE_CROSS_RADIUS,
            drag_handle_radius: DRAG_HANDLE_RADIUS,
            circle_segments: CIRCLE_SEGMENTS,
            connector_pick_radius: CONNECTOR_PICK_RADIUS,
            processor_radius: PROCESSOR_RADIUS,
            pixels_per_unit: VIEWER_PIXELS_PER_UNIT,
        }
    }
}

/// Serde-Default für `circle_segments` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_circle_segments() -> usize {
    CIRCLE_SEGMENTS
}

/// Serde-Default für `pixels_per_unit`.
fn default_pixels_per_unit() -> f32 {
    VIEWER_PIXELS_PER_UNIT
}

impl CableOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("patch-cables"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("patch_cables.toml")
    }

    /// Geometrie-Parameter für die Kabelkurven.
    ///
    /// Die Segmentzahl ist fest (`CURVE_SEGMENTS`): jedes Kabel hat 51 Punkte,
    /// der Delete-Button liegt auf Sample 25.
    pub fn curve_params(&self) -> super::cable_geometry::CurveParams {
        super::cable_geometry::CurveParams {
            strength_max: self.curve_strength_max,
            segments: CURVE_SEGMENTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_roundtrip_keeps_values() {
        let options = CableOptions {
            curve_strength_max: 12.5,
            delete_button_radius: 3.0,
            ..CableOptions::default()
        };

        let text = toml::to_string_pretty(&options).expect("Serialisierung sollte gelingen");
        let parsed: CableOptions = toml::from_str(&text).expect("Parsen sollte gelingen");

        assert_eq!(parsed, options);
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let text = r#"
            curve_strength_max = 30.0
            delete_button_radius = 2.0
            delete_cross_radius = 0.8
            drag_handle_radius = 1.5
            connector_pick_radius = 2.5
            processor_radius = 8.0
        "#;

        let parsed: CableOptions = toml::from_str(text).expect("Alte Datei sollte lesbar sein");
        assert_eq!(parsed.circle_segments, CIRCLE_SEGMENTS);
        assert_eq!(parsed.pixels_per_unit, VIEWER_PIXELS_PER_UNIT);
    }

    #[test]
    fn test_load_from_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("patch_cables_does_not_exist_4711.toml");
        assert_eq!(CableOptions::load_from_file(&path), CableOptions::default());
    }

    #[test]
    fn test_save_and_load_roundtrip_through_file() {
        let path = std::env::temp_dir().join(format!(
            "patch_cables_roundtrip_{}.toml",
            std::process::id()
        ));
        let options = CableOptions {
            curve_strength_max: 18.0,
            connector_pick_radius: 4.0,
            pixels_per_unit: 6.0,
            ..CableOptions::default()
        };

        options
            .save_to_file(&path)
            .expect("Speichern sollte gelingen");
        let loaded = CableOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, options);
    }

    #[test]
    fn test_segment_count_from_old_file_is_ignored() {
        let text = r#"
            curve_strength_max = 12.0
            curve_segments = 10
            delete_button_radius = 2.0
            delete_cross_radius = 0.8
            drag_handle_radius = 1.5
            connector_pick_radius = 2.5
            processor_radius = 8.0
        "#;

        let parsed: CableOptions = toml::from_str(text).expect("Alte Datei sollte lesbar sein");
        let params = parsed.curve_params();

        assert_eq!(params.segments, CURVE_SEGMENTS);
        assert_eq!(params.strength_max, 12.0);
        let points = crate::shared::compute_cable_curve_with(
            glam::Vec2::ZERO,
            glam::Vec2::new(40.0, -60.0),
            &params,
        );
        assert_eq!(points.len(), 51);
    }
}
