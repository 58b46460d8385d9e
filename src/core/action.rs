//! Store-Actions: die Taxonomie, die der Store bei jeder Änderung meldet.

use super::{Connection, Processor, StoreState, Theme};

/// Eine an den Store dispatchte Action.
///
/// Nach dem Anwenden meldet der Store dieselbe Action zusammen mit dem
/// neuen Zustand als Zustandsänderung.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    /// Neues Projekt laden (ersetzt den kompletten Zustand)
    CreateProject(Box<StoreState>),
    /// Prozessor hinzufügen
    AddProcessor { id: String, processor: Processor },
    /// Prozessor (und alle seine Verbindungen) löschen
    DeleteProcessor { id: String },
    /// Prozessor selektieren
    SelectProcessor { id: String },
    /// Selektierten Prozessor an Weltposition verschieben
    DragSelectedProcessor { x: f32, y: f32, z: f32 },
    /// Alle Prozessoren um Delta verschieben
    DragAllProcessors { dx: f32, dy: f32 },
    /// Zwei Prozessoren verbinden
    ConnectProcessors(Connection),
    /// Verbindung trennen
    DisconnectProcessors { id: String },
    /// Connect-Modus umschalten
    ToggleConnectMode,
    /// Farb-Theme setzen
    SetTheme { theme: Theme },
}

impl StoreAction {
    /// Action-Typ als Konstante (für Logs).
    pub fn type_name(&self) -> &'static str {
        match self {
            StoreAction::CreateProject(_) => "CREATE_PROJECT",
            StoreAction::AddProcessor { .. } => "ADD_PROCESSOR",
            StoreAction::DeleteProcessor { .. } => "DELETE_PROCESSOR",
            StoreAction::SelectProcessor { .. } => "SELECT_PROCESSOR",
            StoreAction::DragSelectedProcessor { .. } => "DRAG_SELECTED_PROCESSOR",
            StoreAction::DragAllProcessors { .. } => "DRAG_ALL_PROCESSORS",
            StoreAction::ConnectProcessors(_) => "CONNECT_PROCESSORS",
            StoreAction::DisconnectProcessors { .. } => "DISCONNECT_PROCESSORS",
            StoreAction::ToggleConnectMode => "TOGGLE_CONNECT_MODE",
            StoreAction::SetTheme { .. } => "SET_THEME",
        }
    }
}
