//! Dispatch-Schnittstelle zum Application-Store.

use crate::core::StoreAction;
use std::collections::VecDeque;

/// Nimmt Store-Actions entgegen (ausgehende Richtung Szene → Store).
pub trait ActionDispatcher {
    /// Dispatcht eine Action an den Store.
    fn dispatch(&mut self, action: StoreAction);
}

/// Puffert Actions, bis der Host sie an den Store weiterreicht.
#[derive(Debug, Default)]
pub struct ActionQueue {
    actions: VecDeque<StoreAction>,
}

impl ActionQueue {
    /// Erstellt eine leere Queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl gepufferter Actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Gibt `true` zurück, wenn keine Actions gepuffert sind.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Entnimmt alle Actions in Dispatch-Reihenfolge.
    pub fn drain(&mut self) -> Vec<StoreAction> {
        self.actions.drain(..).collect()
    }
}

impl ActionDispatcher for ActionQueue {
    fn dispatch(&mut self, action: StoreAction) {
        log::trace!("Action gepuffert: {}", action.type_name());
        self.actions.push_back(action);
    }
}
