//! Drag-Interaktion für neue Kabel: Vorschau-Kabel und Drag-Handle.
//!
//! Zustandsmaschine `Idle → Dragging → Idle`. Ungültige Übergänge liefern
//! einen Fehler und verändern die Szene nicht.

use super::group::CableGroup;
use super::objects::{DragHandle, PreviewCable};
use crate::app::ActionDispatcher;
use crate::core::{Connection, StoreAction};
use crate::shared::{compute_cable_curve_with, CableOptions, CurveParams};
use glam::Vec3;

/// Quelle eines gezogenen Kabels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CableSource {
    /// Quell-Prozessor
    pub processor_id: String,
    /// Output-Connector
    pub connector_id: String,
}

/// Zustand der Drag-Interaktion
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    /// Kein Drag aktiv
    #[default]
    Idle,
    /// Kabel wird gezogen
    Dragging {
        /// Quelle des Kabels
        source: CableSource,
        /// Fester Ankerpunkt an der Quelle
        anchor: Vec3,
    },
}

/// Verwaltet ein noch nicht bestätigtes Kabel während eines Drags.
#[derive(Debug)]
pub struct DragController {
    state: DragState,
    /// Bis zum Commit gemerkte Quelle (überlebt `end_drag`)
    recorded_source: Option<CableSource>,
    curve: CurveParams,
    handle_radius: f32,
    circle_segments: usize,
}

impl DragController {
    /// Erstellt einen Controller im Zustand `Idle`.
    pub fn new(options: &CableOptions) -> Self {
        Self {
            state: DragState::Idle,
            recorded_source: None,
            curve: options.curve_params(),
            handle_radius: options.drag_handle_radius,
            circle_segments: options.circle_segments,
        }
    }

    /// Aktueller Zustand.
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Ob gerade gezogen wird.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Gemerkte Quelle für den nächsten Commit.
    pub fn recorded_source(&self) -> Option<&CableSource> {
        self.recorded_source.as_ref()
    }

    /// Startet einen Kabel-Drag an einem Output-Connector.
    pub fn start_drag(
        &mut self,
        group: &mut CableGroup,
        source_processor_id: &str,
        source_connector_id: &str,
        anchor: Vec3,
    ) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.is_dragging(),
            "Kabel-Drag läuft bereits, start_drag für {}/{} abgelehnt",
            source_processor_id,
            source_connector_id
        );

        let source = CableSource {
            processor_id: source_processor_id.to_string(),
            connector_id: source_connector_id.to_string(),
        };
        self.recorded_source = Some(source.clone());
        self.state = DragState::Dragging { source, anchor };

        group.attach_preview(
            PreviewCable::default(),
            DragHandle::new(anchor, self.handle_radius, self.circle_segments),
        );
        log::debug!(
            "Kabel-Drag gestartet an {}/{}",
            source_processor_id,
            source_connector_id
        );
        Ok(())
    }

    /// Zieht das lose Kabelende an `point`.
    pub fn move_drag(&mut self, group: &mut CableGroup, point: Vec3) -> anyhow::Result<()> {
        let DragState::Dragging { anchor, .. } = &self.state else {
            anyhow::bail!("move_drag ohne aktiven Kabel-Drag");
        };

        let points = compute_cable_curve_with(anchor.truncate(), point.truncate(), &self.curve);
        let (Some(preview), Some(handle)) = group.preview_parts_mut() else {
            anyhow::bail!("move_drag: Vorschau-Kabel oder Drag-Handle fehlt in der Gruppe");
        };
        preview.geometry.dispose();
        preview.geometry.set_from_points(&points);
        handle.position = point;
        Ok(())
    }

    /// Beendet den Drag und entfernt Vorschau-Kabel und Handle.
    ///
    /// Erstellt selbst keine Verbindung; die gemerkte Quelle bleibt für
    /// `commit_connection` erhalten.
    pub fn end_drag(&mut self, group: &mut CableGroup) -> anyhow::Result<()> {
        anyhow::ensure!(self.is_dragging(), "end_drag ohne aktiven Kabel-Drag");

        let (preview, _handle) = group.detach_preview();
        if let Some(mut preview) = preview {
            preview.geometry.dispose();
        }
        self.state = DragState::Idle;
        log::debug!("Kabel-Drag beendet");
        Ok(())
    }

    /// Dispatcht eine Connect-Action mit der gemerkten Quelle.
    ///
    /// Gibt `true` zurück, wenn eine Action dispatcht wurde. Ohne gemerkte
    /// Quelle passiert nichts.
    pub fn commit_connection(
        &mut self,
        destination_processor_id: &str,
        destination_connector_id: &str,
        store: &mut dyn ActionDispatcher,
    ) -> bool {
        let Some(source) = self.recorded_source.take() else {
            log::debug!("commit_connection ohne gemerkte Quelle ignoriert");
            return false;
        };

        store.dispatch(StoreAction::ConnectProcessors(Connection::new(
            source.processor_id,
            source.connector_id,
            destination_processor_id,
            destination_connector_id,
        )));
        true
    }
}
