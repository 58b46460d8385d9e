//! Kanonischer Store-Zustand, wie ihn die Szene bei jeder Zustandsänderung erhält.

use super::{
    Connection, ConnectorKind, Processor, Table, Theme, ThemeColors, ThemeProvider,
};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Snapshot des Application-Stores (Prozessoren, Verbindungen, Modi).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    /// Alle Prozessoren
    #[serde(default)]
    pub processors: Table<Processor>,
    /// Alle Verbindungen
    #[serde(default)]
    pub connections: Table<Connection>,
    /// Ob der Connect-Modus aktiv ist
    #[serde(default)]
    pub connect_mode_active: bool,
    /// Aktuell selektierter Prozessor
    #[serde(default, rename = "selectedID")]
    pub selected_id: Option<String>,
    /// Aktuelles Farb-Theme
    #[serde(default)]
    pub theme: Theme,
}

impl StoreState {
    /// Erstellt einen leeren Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Liest einen Zustand aus JSON.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Gibt einen Prozessor zurück.
    pub fn processor(&self, id: &str) -> Option<&Processor> {
        self.processors.get(id)
    }

    /// Gibt eine Verbindung zurück.
    pub fn connection(&self, id: &str) -> Option<&Connection> {
        self.connections.get(id)
    }

    /// Löst beide Ankerpunkte einer Verbindung auf.
    ///
    /// `None`, sobald Verbindung, Prozessor oder Connector fehlt
    /// (z.B. Prozessor gerade gelöscht, Verbindung noch nicht abgeglichen).
    pub fn connection_anchors(&self, connection_id: &str) -> Option<(Vec2, Vec2)> {
        let connection = self.connection(connection_id)?;
        let source = self.processor(&connection.source_processor_id)?;
        let destination = self.processor(&connection.destination_processor_id)?;
        Some((
            source.anchor(ConnectorKind::Output, &connection.source_connector_id)?,
            destination.anchor(ConnectorKind::Input, &connection.destination_connector_id)?,
        ))
    }
}

impl ThemeProvider for StoreState {
    fn theme_colors(&self) -> ThemeColors {
        ThemeColors::for_theme(self.theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Connector;
    use approx::assert_relative_eq;
    use glam::Vec3;

    fn state_with_connection() -> StoreState {
        let mut state = StoreState::new();
        state.processors.insert(
            "p1",
            Processor::new("epg", "A", Vec3::new(0.0, 0.0, 0.0))
                .with_output("out1", Connector::new("out", 1.0, -2.0)),
        );
        state.processors.insert(
            "p2",
            Processor::new("output", "B", Vec3::new(30.0, 40.0, 0.0))
                .with_input("in1", Connector::new("in", -1.0, 2.0)),
        );
        state
            .connections
            .insert("c1", Connection::new("p1", "out1", "p2", "in1"));
        state
    }

    #[test]
    fn test_connection_anchors_resolve_offsets() {
        let state = state_with_connection();
        let (source, destination) = state.connection_anchors("c1").expect("Anker auflösbar");
        assert_relative_eq!(source.x, 1.0);
        assert_relative_eq!(source.y, -2.0);
        assert_relative_eq!(destination.x, 29.0);
        assert_relative_eq!(destination.y, 42.0);
    }

    #[test]
    fn test_connection_anchors_miss_on_deleted_processor() {
        let mut state = state_with_connection();
        state.processors.remove("p2");
        assert!(state.connection_anchors("c1").is_none());
        assert!(state.connection_anchors("unknown").is_none());
    }

    #[test]
    fn test_from_json_reads_store_shape() {
        let state = StoreState::from_json(
            r#"{
                "processors": { "byId": {}, "allIds": [] },
                "connections": {
                    "byId": {
                        "c1": {
                            "sourceProcessorID": "p1",
                            "sourceConnectorID": "out1",
                            "destinationProcessorID": "p2",
                            "destinationConnectorID": "in1"
                        }
                    },
                    "allIds": ["c1"]
                },
                "connectModeActive": true,
                "selectedID": "p1",
                "theme": "light"
            }"#,
        )
        .expect("JSON sollte lesbar sein");

        assert!(state.connect_mode_active);
        assert_eq!(state.selected_id.as_deref(), Some("p1"));
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(
            state.connection("c1").map(|c| c.destination_connector_id.as_str()),
            Some("in1")
        );
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(StoreState::from_json("{ not json").is_err());
    }
}
