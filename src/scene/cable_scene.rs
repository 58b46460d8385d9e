//! Kabel-Szene: gleicht die Kabel-Gruppe mit der Verbindungsliste ab und
//! zeichnet betroffene Kabel bei Zustandsänderungen neu.

use super::group::CableGroup;
use super::objects::Cable;
use crate::core::{StoreState, Theme, ThemeColors, ThemeProvider};
use crate::shared::{compute_cable_curve_with, CableOptions, CurveParams};
use glam::Vec2;
use std::collections::HashSet;

/// Verwaltet die Kabel-Gruppe der Szene.
///
/// Mutiert nie den Store; alle Seiteneffekte bleiben in der eigenen Gruppe.
pub struct CableSceneManager {
    group: CableGroup,
    connect_mode: bool,
    options: CableOptions,
    curve: CurveParams,
}

impl CableSceneManager {
    /// Erstellt eine leere Szene. Farben gelten bis zum ersten `apply_theme`.
    pub fn new(options: CableOptions) -> Self {
        let color = ThemeColors::for_theme(Theme::default()).color_high;
        Self {
            group: CableGroup::new(color),
            connect_mode: false,
            curve: options.curve_params(),
            options,
        }
    }

    /// Die verwaltete Kabel-Gruppe (read-only).
    pub fn group(&self) -> &CableGroup {
        &self.group
    }

    pub(crate) fn group_mut(&mut self) -> &mut CableGroup {
        &mut self.group
    }

    /// Aktive Optionen.
    pub fn options(&self) -> &CableOptions {
        &self.options
    }

    /// Ob der Connect-Modus aktiv ist.
    pub fn is_connect_mode(&self) -> bool {
        self.connect_mode
    }

    /// IDs aller gerenderten Kabel.
    pub fn cable_ids(&self) -> Vec<String> {
        self.group.cable_ids().map(str::to_string).collect()
    }

    /// Kabel zur Verbindungs-ID.
    pub fn cable(&self, id: &str) -> Option<&Cable> {
        self.group.cable(id)
    }

    /// Macht die Kabelmenge identisch zur Menge der lebenden Verbindungen.
    ///
    /// Entfernt verwaiste Kabel und legt fehlende mit leerer Geometrie an.
    /// Idempotent.
    pub fn reconcile(&mut self, state: &StoreState) {
        let live: HashSet<&str> = state
            .connections
            .all_ids
            .iter()
            .map(String::as_str)
            .collect();

        let removed = self.group.retain_cables(|id| live.contains(id));

        let mut created = 0usize;
        for id in &state.connections.all_ids {
            if self.group.cable(id).is_none() {
                let mut cable = Cable::new(id.as_str(), &self.options);
                cable.delete_button.visible = self.connect_mode;
                self.group.insert_cable(cable);
                created += 1;
            }
        }

        if removed > 0 || created > 0 {
            log::debug!(
                "Kabel abgeglichen: {} entfernt, {} erstellt, {} gesamt",
                removed,
                created,
                self.group.len()
            );
        }
    }

    /// Berechnet die Geometrie aller lebenden Verbindungen neu.
    ///
    /// Fehlende Prozessoren, Connectoren oder Kabel werden still übersprungen;
    /// der nächste `reconcile` bereinigt die Kabelmenge.
    pub fn redraw_all(&mut self, state: &StoreState) {
        for id in &state.connections.all_ids {
            let Some((source, destination)) = state.connection_anchors(id) else {
                log::debug!("Kabel {} übersprungen: Endpunkt nicht auflösbar", id);
                continue;
            };
            self.draw_cable(id, source, destination);
        }
    }

    fn draw_cable(&mut self, id: &str, source: Vec2, destination: Vec2) {
        let connect_mode = self.connect_mode;
        let Some(cable) = self.group.cable_mut(id) else {
            log::debug!("Kabel {} übersprungen: noch nicht angelegt", id);
            return;
        };

        let points = compute_cable_curve_with(source, destination, &self.curve);
        cable.set_curve(&points);

        if connect_mode {
            cable.place_delete_button_at_midpoint();
        }
    }

    /// Betritt oder verlässt den Connect-Modus.
    ///
    /// Schaltet alle Delete-Buttons; beim Aktivieren werden sie auf die
    /// Kabelmitte gesetzt.
    pub fn toggle_connect_mode(&mut self, enabled: bool) {
        self.connect_mode = enabled;

        for cable in self.group.cables_mut() {
            cable.delete_button.visible = enabled;
            if enabled {
                cable.place_delete_button_at_midpoint();
            }
        }
        log::debug!("Connect-Modus: {}", enabled);
    }

    /// Übernimmt die Theme-Farben für Kabel-Material und Drag-Handle.
    pub fn apply_theme(&mut self, theme: &dyn ThemeProvider) {
        let color = theme.theme_colors().color_high;
        self.group.set_line_color(color);
        self.group.set_handle_color(color);
    }

    /// Liefert die Verbindung, deren sichtbarer Delete-Button den Punkt enthält.
    pub fn hit_delete_button(&self, point: Vec2) -> Option<&str> {
        if !self.connect_mode {
            return None;
        }
        self.group
            .cables()
            .find(|cable| cable.delete_button.visible && cable.delete_button.contains(point))
            .map(Cable::id)
    }

    /// Baut die Szene explizit ab (alle Kabel und Vorschau-Objekte).
    pub(crate) fn clear(&mut self) {
        self.group.clear();
        self.connect_mode = false;
    }
}
