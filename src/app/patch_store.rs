//! In-Memory Patch-Store: wendet Actions auf den Zustand an und puffert
//! die resultierenden Zustandsänderungen für den Host.

use super::dispatch::ActionDispatcher;
use crate::core::{Connection, StoreAction, StoreState};
use glam::Vec3;
use std::collections::VecDeque;

/// Referenz-Store für Viewer und Tests.
#[derive(Debug, Default)]
pub struct PatchStore {
    state: StoreState,
    pending: VecDeque<StoreAction>,
    next_connection_id: u64,
}

impl PatchStore {
    /// Erstellt einen Store mit Anfangszustand.
    pub fn new(state: StoreState) -> Self {
        Self {
            state,
            pending: VecDeque::new(),
            next_connection_id: 1,
        }
    }

    /// Aktueller Zustand.
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Entnimmt alle seit dem letzten Aufruf angewandten Actions in Reihenfolge.
    pub fn take_notifications(&mut self) -> Vec<StoreAction> {
        self.pending.drain(..).collect()
    }

    /// Wendet eine Action an. Gibt `false` zurück, wenn sie verworfen wurde.
    fn reduce(&mut self, action: &StoreAction) -> bool {
        match action {
            StoreAction::CreateProject(state) => {
                self.state = (**state).clone();
                true
            }
            StoreAction::AddProcessor { id, processor } => {
                if self.state.processors.contains(id) {
                    log::warn!("Prozessor {} existiert bereits", id);
                    return false;
                }
                self.state.processors.insert(id.as_str(), processor.clone());
                log::info!("Prozessor {} ({}) hinzugefügt", id, processor.kind);
                true
            }
            StoreAction::DeleteProcessor { id } => self.delete_processor(id),
            StoreAction::SelectProcessor { id } => {
                if !self.state.processors.contains(id) {
                    log::warn!("Selektion nicht möglich: Prozessor {} existiert nicht", id);
                    return false;
                }
                self.state.selected_id = Some(id.clone());
                true
            }
            StoreAction::DragSelectedProcessor { x, y, z } => {
                let Some(selected) = self.state.selected_id.clone() else {
                    log::debug!("Drag ohne selektierten Prozessor ignoriert");
                    return false;
                };
                let Some(processor) = self.state.processors.get_mut(&selected) else {
                    return false;
                };
                processor.set_position(Vec3::new(*x, *y, *z));
                true
            }
            StoreAction::DragAllProcessors { dx, dy } => {
                for processor in self.state.processors.by_id.values_mut() {
                    let position = processor.position() + Vec3::new(*dx, *dy, 0.0);
                    processor.set_position(position);
                }
                true
            }
            StoreAction::ConnectProcessors(connection) => self.connect(connection),
            StoreAction::DisconnectProcessors { id } => {
                if self.state.connections.remove(id).is_none() {
                    log::warn!("Verbindung {} existiert nicht", id);
                    return false;
                }
                log::info!("Verbindung {} getrennt", id);
                true
            }
            StoreAction::ToggleConnectMode => {
                self.state.connect_mode_active = !self.state.connect_mode_active;
                log::info!("Connect-Modus: {}", self.state.connect_mode_active);
                true
            }
            StoreAction::SetTheme { theme } => {
                self.state.theme = *theme;
                log::info!("Theme: {:?}", theme);
                true
            }
        }
    }

    fn connect(&mut self, connection: &Connection) -> bool {
        if connection.source_processor_id == connection.destination_processor_id {
            log::warn!(
                "Self-Loop nicht erlaubt (Prozessor {})",
                connection.source_processor_id
            );
            return false;
        }

        let source = self.state.processor(&connection.source_processor_id);
        let destination = self.state.processor(&connection.destination_processor_id);
        let (Some(source), Some(destination)) = (source, destination) else {
            log::warn!(
                "Verbindung nicht möglich: Prozessor {} oder {} existiert nicht",
                connection.source_processor_id,
                connection.destination_processor_id
            );
            return false;
        };

        if !source.outputs.contains(&connection.source_connector_id)
            || !destination.inputs.contains(&connection.destination_connector_id)
        {
            log::warn!(
                "Verbindung nicht möglich: Connector {} oder {} existiert nicht",
                connection.source_connector_id,
                connection.destination_connector_id
            );
            return false;
        }

        if self
            .state
            .connections
            .iter()
            .any(|(_, existing)| existing == connection)
        {
            log::warn!(
                "Verbindung {}→{} existiert bereits",
                connection.source_processor_id,
                connection.destination_processor_id
            );
            return false;
        }

        let id = self.generate_connection_id();
        self.state.connections.insert(id.as_str(), connection.clone());
        log::info!(
            "Verbindung {} erstellt: {}/{} → {}/{}",
            id,
            connection.source_processor_id,
            connection.source_connector_id,
            connection.destination_processor_id,
            connection.destination_connector_id
        );
        true
    }

    fn delete_processor(&mut self, id: &str) -> bool {
        if self.state.processors.remove(id).is_none() {
            log::warn!("Prozessor {} existiert nicht", id);
            return false;
        }

        let orphaned: Vec<String> = self
            .state
            .connections
            .iter()
            .filter(|(_, connection)| connection.involves(id))
            .map(|(connection_id, _)| connection_id.to_string())
            .collect();
        for connection_id in &orphaned {
            self.state.connections.remove(connection_id);
        }

        if self.state.selected_id.as_deref() == Some(id) {
            self.state.selected_id = None;
        }
        log::info!(
            "Prozessor {} gelöscht ({} Verbindungen entfernt)",
            id,
            orphaned.len()
        );
        true
    }

    /// Vergibt eine neue, im aktuellen Zustand freie Verbindungs-ID.
    fn generate_connection_id(&mut self) -> String {
        loop {
            let id = format!("conn-{}", self.next_connection_id);
            self.next_connection_id += 1;
            if !self.state.connections.contains(&id) {
                return id;
            }
        }
    }
}

impl ActionDispatcher for PatchStore {
    fn dispatch(&mut self, action: StoreAction) {
        if self.reduce(&action) {
            self.pending.push_back(action);
        }
    }
}
