//! Repräsentiert eine Kabelverbindung zwischen zwei Prozessoren.

use serde::{Deserialize, Serialize};

/// ID einer Verbindung (opak, vom Store vergeben).
pub type ConnectionId = String;

/// Eine Verbindung von einem Output-Connector zu einem Input-Connector.
///
/// Unveränderlich nach dem Erstellen; wird per Disconnect-Action entfernt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    /// Quell-Prozessor
    #[serde(rename = "sourceProcessorID")]
    pub source_processor_id: String,
    /// Output-Connector am Quell-Prozessor
    #[serde(rename = "sourceConnectorID")]
    pub source_connector_id: String,
    /// Ziel-Prozessor
    #[serde(rename = "destinationProcessorID")]
    pub destination_processor_id: String,
    /// Input-Connector am Ziel-Prozessor
    #[serde(rename = "destinationConnectorID")]
    pub destination_connector_id: String,
}

impl Connection {
    /// Erstellt eine neue Verbindung
    pub fn new(
        source_processor_id: impl Into<String>,
        source_connector_id: impl Into<String>,
        destination_processor_id: impl Into<String>,
        destination_connector_id: impl Into<String>,
    ) -> Self {
        Self {
            source_processor_id: source_processor_id.into(),
            source_connector_id: source_connector_id.into(),
            destination_processor_id: destination_processor_id.into(),
            destination_connector_id: destination_connector_id.into(),
        }
    }

    /// Gibt `true` zurück, wenn der Prozessor an einem der Enden hängt.
    pub fn involves(&self, processor_id: &str) -> bool {
        self.source_processor_id == processor_id || self.destination_processor_id == processor_id
    }
}
