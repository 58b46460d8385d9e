//! Eingehende Zustandsänderungs-Notification des Stores.

use crate::core::{StoreAction, StoreState};

/// Eine Zustandsänderung: die angewandte Action plus der neue Zustand.
#[derive(Debug, Clone, Copy)]
pub struct StateChange<'a> {
    /// Die Action, die den Zustand geändert hat
    pub action: &'a StoreAction,
    /// Zustand nach der Änderung
    pub state: &'a StoreState,
}

impl<'a> StateChange<'a> {
    /// Erstellt eine Notification.
    pub fn new(action: &'a StoreAction, state: &'a StoreState) -> Self {
        Self { action, state }
    }
}
