//! Prozessoren und ihre Connectoren.

use super::Table;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Art eines Connectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorKind {
    /// Eingang (Ziel eines Kabels)
    Input,
    /// Ausgang (Quelle eines Kabels)
    Output,
}

/// Anschlusspunkt mit lokalem 2D-Offset relativ zum Prozessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    /// Anzeigename
    #[serde(default)]
    pub name: String,
    /// Lokaler X-Offset
    pub x: f32,
    /// Lokaler Y-Offset
    pub y: f32,
}

impl Connector {
    /// Erstellt einen Connector mit Offset.
    pub fn new(name: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }

    /// Lokaler Offset als Vektor.
    pub fn offset(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Ein MIDI-Prozessor im Netzwerk (Sequencer, Output, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Processor {
    /// Prozessor-Typ (z.B. "epg", "output")
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Anzeigename
    #[serde(default)]
    pub name: String,
    /// Weltposition X
    pub position_x: f32,
    /// Weltposition Y
    pub position_y: f32,
    /// Weltposition Z
    #[serde(default)]
    pub position_z: f32,
    /// Eingänge nach ID
    #[serde(default)]
    pub inputs: Table<Connector>,
    /// Ausgänge nach ID
    #[serde(default)]
    pub outputs: Table<Connector>,
}

impl Processor {
    /// Erstellt einen Prozessor ohne Connectoren.
    pub fn new(kind: impl Into<String>, name: impl Into<String>, position: Vec3) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            position_x: position.x,
            position_y: position.y,
            position_z: position.z,
            inputs: Table::new(),
            outputs: Table::new(),
        }
    }

    /// Builder: Eingang hinzufügen.
    pub fn with_input(mut self, id: impl Into<String>, connector: Connector) -> Self {
        self.inputs.insert(id, connector);
        self
    }

    /// Builder: Ausgang hinzufügen.
    pub fn with_output(mut self, id: impl Into<String>, connector: Connector) -> Self {
        self.outputs.insert(id, connector);
        self
    }

    /// Weltposition als Vektor.
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.position_x, self.position_y, self.position_z)
    }

    /// Setzt die Weltposition.
    pub fn set_position(&mut self, position: Vec3) {
        self.position_x = position.x;
        self.position_y = position.y;
        self.position_z = position.z;
    }

    /// Connector-Tabelle nach Art.
    pub fn connectors(&self, kind: ConnectorKind) -> &Table<Connector> {
        match kind {
            ConnectorKind::Input => &self.inputs,
            ConnectorKind::Output => &self.outputs,
        }
    }

    /// Ankerpunkt (2D) eines Connectors: Prozessor-Position + lokaler Offset.
    pub fn anchor(&self, kind: ConnectorKind, connector_id: &str) -> Option<Vec2> {
        let connector = self.connectors(kind).get(connector_id)?;
        Some(Vec2::new(self.position_x, self.position_y) + connector.offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_anchor_adds_connector_offset() {
        let processor = Processor::new("epg", "EPG", Vec3::new(10.0, 20.0, 1.0))
            .with_output("out1", Connector::new("out", 4.0, -6.0));

        let anchor = processor
            .anchor(ConnectorKind::Output, "out1")
            .expect("Output existiert");
        assert_relative_eq!(anchor.x, 14.0);
        assert_relative_eq!(anchor.y, 14.0);
    }

    #[test]
    fn test_anchor_of_unknown_connector_is_none() {
        let processor = Processor::new("epg", "EPG", Vec3::ZERO);
        assert!(processor.anchor(ConnectorKind::Input, "in1").is_none());
    }

    #[test]
    fn test_processor_json_field_names() {
        let processor: Processor = serde_json::from_str(
            r#"{
                "type": "output",
                "positionX": 1.5,
                "positionY": -2.0,
                "inputs": { "byId": { "in1": { "x": 0.0, "y": 5.0 } }, "allIds": ["in1"] }
            }"#,
        )
        .expect("JSON sollte lesbar sein");

        assert_eq!(processor.kind, "output");
        assert_relative_eq!(processor.position_z, 0.0);
        assert!(processor.outputs.is_empty());
        assert!(processor.inputs.contains("in1"));
    }
}
