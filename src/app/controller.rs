//! Scene-Controller für die zentrale Verarbeitung von Zustandsänderungen.

use super::{ActionDispatcher, StateChange};
use crate::core::{StoreAction, StoreState, ThemeProvider};
use crate::scene::{CableSceneManager, DragController, ProcessorLayer};
use crate::shared::CableOptions;
use glam::Vec3;

/// Orchestriert Kabel-Szene, Prozessor-Ansichten und Drag-Interaktion.
///
/// Wird einmal beim Start konstruiert und mit `shutdown` explizit abgebaut.
pub struct SceneController {
    cables: CableSceneManager,
    processors: ProcessorLayer,
    drag: DragController,
}

impl SceneController {
    /// Erstellt einen Controller mit Optionen und übernimmt das Start-Theme.
    pub fn new(options: CableOptions, theme: &dyn ThemeProvider) -> Self {
        let drag = DragController::new(&options);
        let mut cables = CableSceneManager::new(options);
        cables.apply_theme(theme);
        Self {
            cables,
            processors: ProcessorLayer::new(),
            drag,
        }
    }

    /// Kabel-Szene (read-only).
    pub fn cables(&self) -> &CableSceneManager {
        &self.cables
    }

    /// Prozessor-Ansichten (read-only).
    pub fn processors(&self) -> &ProcessorLayer {
        &self.processors
    }

    /// Drag-Controller (read-only).
    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Verarbeitet eine Zustandsänderung des Stores.
    ///
    /// Innerhalb einer Notification läuft der Abgleich immer vor dem Neuzeichnen.
    /// Unbekannte Actions werden ignoriert.
    pub fn handle_state_change(&mut self, change: StateChange<'_>) {
        let state = change.state;
        log::trace!("Zustandsänderung: {}", change.action.type_name());

        match change.action {
            StoreAction::ToggleConnectMode => {
                self.set_connect_mode(state.connect_mode_active);
            }
            StoreAction::DeleteProcessor { .. }
            | StoreAction::ConnectProcessors(_)
            | StoreAction::DisconnectProcessors { .. } => {
                self.processors.reconcile(state, state);
                self.cables.reconcile(state);
                self.cables.redraw_all(state);
            }
            StoreAction::DragSelectedProcessor { .. } => {
                self.processors.update_positions(state, true);
                self.cables.redraw_all(state);
            }
            StoreAction::DragAllProcessors { .. } => {
                self.processors.update_positions(state, false);
                self.cables.redraw_all(state);
            }
            StoreAction::CreateProject(_) => {
                self.apply_theme(state);
                self.processors.reconcile(state, state);
                self.processors.update_positions(state, false);
                self.cables.reconcile(state);
                self.cables.redraw_all(state);
            }
            StoreAction::SetTheme { .. } => {
                self.apply_theme(state);
                self.set_connect_mode(state.connect_mode_active);
            }
            StoreAction::AddProcessor { .. } => {
                self.processors.reconcile(state, state);
            }
            StoreAction::SelectProcessor { .. } => {}
        }
    }

    /// Bequemlichkeitsvariante für Host-Schleifen mit besessener Action.
    pub fn handle_action(&mut self, action: &StoreAction, state: &StoreState) {
        self.handle_state_change(StateChange::new(action, state));
    }

    fn set_connect_mode(&mut self, enabled: bool) {
        self.cables.toggle_connect_mode(enabled);
        self.processors.update_connect_mode(enabled);
    }

    fn apply_theme(&mut self, theme: &dyn ThemeProvider) {
        self.cables.apply_theme(theme);
        self.processors.apply_theme(theme);
    }

    /// Startet einen Kabel-Drag (siehe [`DragController::start_drag`]).
    pub fn start_drag(
        &mut self,
        source_processor_id: &str,
        source_connector_id: &str,
        anchor: Vec3,
    ) -> anyhow::Result<()> {
        self.drag.start_drag(
            self.cables.group_mut(),
            source_processor_id,
            source_connector_id,
            anchor,
        )
    }

    /// Bewegt das lose Kabelende (siehe [`DragController::move_drag`]).
    pub fn move_drag(&mut self, point: Vec3) -> anyhow::Result<()> {
        self.drag.move_drag(self.cables.group_mut(), point)
    }

    /// Beendet den Kabel-Drag (siehe [`DragController::end_drag`]).
    pub fn end_drag(&mut self) -> anyhow::Result<()> {
        self.drag.end_drag(self.cables.group_mut())
    }

    /// Dispatcht die Verbindung zur gemerkten Quelle (siehe [`DragController::commit_connection`]).
    pub fn commit_connection(
        &mut self,
        destination_processor_id: &str,
        destination_connector_id: &str,
        store: &mut dyn ActionDispatcher,
    ) -> bool {
        self.drag
            .commit_connection(destination_processor_id, destination_connector_id, store)
    }

    /// Baut die komplette Szene explizit ab.
    pub fn shutdown(&mut self) {
        if self.drag.is_dragging() {
            if let Err(e) = self.end_drag() {
                log::error!("Drag-Abbruch beim Shutdown fehlgeschlagen: {:#}", e);
            }
        }
        self.cables.clear();
        self.processors.clear();
        log::info!("Szene abgebaut");
    }
}
