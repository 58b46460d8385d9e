//! MIDI-Eingangs-Connector: sammelt die Ausgaben aller verbundenen Quellen.

use std::cell::RefCell;
use std::rc::Rc;

/// Zeitgestempeltes MIDI-Ereignis (3 Rohbytes, wird hier nicht interpretiert).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MidiEvent {
    /// Zeitpunkt in Millisekunden
    pub timestamp: f64,
    /// Rohdaten: Status, Data1, Data2
    pub data: [u8; 3],
}

impl MidiEvent {
    /// Erstellt ein Ereignis.
    pub fn new(timestamp: f64, data: [u8; 3]) -> Self {
        Self { timestamp, data }
    }
}

/// Ein Prozessor, der MIDI-Ereignisse ausgibt.
pub trait MidiSource {
    /// Prozessor-ID
    fn id(&self) -> &str;
    /// Prozessor-Typ
    fn kind(&self) -> &str;
    /// Entnimmt die seit dem letzten Aufruf erzeugten Ereignisse.
    fn take_output_data(&mut self) -> Vec<MidiEvent>;
}

/// Gemeinsam genutzte Quelle (Prozessoren gehören dem Netzwerk, nicht dem Connector).
pub type SharedMidiSource = Rc<RefCell<dyn MidiSource>>;

/// Eingang eines Prozessors mit beliebig vielen verbundenen Quellen.
pub struct MidiConnectorIn {
    owner_id: String,
    owner_kind: String,
    sources: Vec<SharedMidiSource>,
}

impl MidiConnectorIn {
    /// Erstellt einen Eingang für den Prozessor `owner_id`.
    pub fn new(owner_id: impl Into<String>, owner_kind: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            owner_kind: owner_kind.into(),
            sources: Vec::new(),
        }
    }

    /// Anzahl verbundener Quellen.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Verbindet eine Quelle mit diesem Eingang.
    pub fn add_connection(&mut self, source: SharedMidiSource) {
        {
            let s = source.borrow();
            log::info!(
                "Connect {} (id {}) to {} (id {})",
                s.kind(),
                s.id(),
                self.owner_kind,
                self.owner_id
            );
        }
        self.sources.push(source);
    }

    /// Trennt eine Quelle. Gibt `false` zurück, wenn sie nicht verbunden war.
    ///
    /// Bei Mehrfachverbindung wird nur der zuletzt hinzugefügte Eintrag entfernt.
    pub fn remove_connection(&mut self, source: &SharedMidiSource) -> bool {
        let Some(index) = self
            .sources
            .iter()
            .rposition(|connected| Rc::ptr_eq(connected, source))
        else {
            return false;
        };

        let removed = self.sources.remove(index);
        let s = removed.borrow();
        log::info!(
            "Disconnect {} (id {}) from {} (id {})",
            s.kind(),
            s.id(),
            self.owner_kind,
            self.owner_id
        );
        true
    }

    /// Sammelt die Ausgaben aller Quellen in Verbindungsreihenfolge.
    pub fn input_data(&self) -> Vec<MidiEvent> {
        let mut events = Vec::new();
        for source in &self.sources {
            events.extend(source.borrow_mut().take_output_data());
        }
        events
    }
}
