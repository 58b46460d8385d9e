//! Prozessor-Ansichten: Position, Label und Connector-Marker je Prozessor.

use crate::core::{ConnectorKind, Processor, StoreState, ThemeProvider};
use glam::{Vec2, Vec3};
use indexmap::IndexMap;

/// Connector-Marker einer Prozessor-Ansicht.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorMarker {
    /// Connector-ID
    pub id: String,
    /// Eingang oder Ausgang
    pub kind: ConnectorKind,
    /// Lokaler Offset zum Prozessor
    pub offset: Vec2,
    /// "Active"-Marker, sichtbar im Connect-Modus
    pub active_visible: bool,
}

/// Treffer beim Picken eines Connectors.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorHit {
    /// Prozessor-ID
    pub processor_id: String,
    /// Connector-ID
    pub connector_id: String,
    /// Weltposition des Connectors
    pub anchor: Vec3,
}

/// Szenen-Ansicht eines Prozessors.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessorView {
    id: String,
    /// Weltposition
    pub position: Vec3,
    /// Label (immer in Großbuchstaben)
    pub label: String,
    /// Label-Farbe aus dem Theme
    pub label_color: [f32; 4],
    /// Alle Connector-Marker (erst Eingänge, dann Ausgänge)
    pub connectors: Vec<ConnectorMarker>,
}

impl ProcessorView {
    fn from_processor(id: &str, processor: &Processor, connect_mode: bool) -> Self {
        let markers = move |kind: ConnectorKind| {
            processor
                .connectors(kind)
                .iter()
                .map(move |(connector_id, connector)| ConnectorMarker {
                    id: connector_id.to_string(),
                    kind,
                    offset: connector.offset(),
                    active_visible: connect_mode,
                })
        };

        Self {
            id: id.to_string(),
            position: processor.position(),
            label: String::new(),
            label_color: [1.0; 4],
            connectors: markers(ConnectorKind::Input)
                .chain(markers(ConnectorKind::Output))
                .collect(),
        }
    }

    /// Prozessor-ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Setzt das Label in Großbuchstaben in der Hervorhebungsfarbe.
    pub fn update_label(&mut self, label: &str, theme: &dyn ThemeProvider) {
        self.label = label.to_uppercase();
        self.label_color = theme.theme_colors().color_high;
    }

    /// Übernimmt die Store-Position, aber nur für den selektierten Prozessor.
    pub fn update_position(&mut self, state: &StoreState) {
        if state.selected_id.as_deref() == Some(self.id.as_str()) {
            self.sync_position(state);
        }
    }

    /// Übernimmt die Store-Position unabhängig von der Selektion.
    pub fn sync_position(&mut self, state: &StoreState) {
        if let Some(processor) = state.processor(&self.id) {
            self.position = processor.position();
        }
    }

    /// Schaltet die "Active"-Marker aller Connectoren.
    pub fn update_connect_mode(&mut self, enabled: bool) {
        for marker in &mut self.connectors {
            marker.active_visible = enabled;
        }
    }

    /// Weltposition eines Connector-Markers.
    pub fn marker_position(&self, marker: &ConnectorMarker) -> Vec3 {
        self.position + marker.offset.extend(0.0)
    }
}

/// Alle Prozessor-Ansichten der Szene.
#[derive(Debug, Default)]
pub struct ProcessorLayer {
    views: IndexMap<String, ProcessorView>,
    connect_mode: bool,
}

impl ProcessorLayer {
    /// Erstellt eine leere Ebene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ansicht zur Prozessor-ID.
    pub fn view(&self, id: &str) -> Option<&ProcessorView> {
        self.views.get(id)
    }

    /// Alle Ansichten in Erstellungsreihenfolge.
    pub fn views(&self) -> impl Iterator<Item = &ProcessorView> + '_ {
        self.views.values()
    }

    /// Anzahl der Ansichten.
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Gibt `true` zurück, wenn keine Ansichten vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    /// Gleicht die Ansichten mit der Prozessorliste ab.
    pub fn reconcile(&mut self, state: &StoreState, theme: &dyn ThemeProvider) {
        self.views.retain(|id, _| state.processors.contains(id));

        for (id, processor) in state.processors.iter() {
            if self.views.contains_key(id) {
                continue;
            }
            let mut view = ProcessorView::from_processor(id, processor, self.connect_mode);
            let label = if processor.name.is_empty() {
                &processor.kind
            } else {
                &processor.name
            };
            view.update_label(label, theme);
            log::debug!("Prozessor-Ansicht erstellt: {} ({})", id, view.label);
            self.views.insert(id.to_string(), view);
        }
    }

    /// Aktualisiert Positionen; mit `only_selected` nur den selektierten Prozessor.
    pub fn update_positions(&mut self, state: &StoreState, only_selected: bool) {
        for view in self.views.values_mut() {
            if only_selected {
                view.update_position(state);
            } else {
                view.sync_position(state);
            }
        }
    }

    /// Schaltet die Connector-Marker aller Prozessoren.
    pub fn update_connect_mode(&mut self, enabled: bool) {
        self.connect_mode = enabled;
        for view in self.views.values_mut() {
            view.update_connect_mode(enabled);
        }
    }

    /// Färbt alle Labels neu ein.
    pub fn apply_theme(&mut self, theme: &dyn ThemeProvider) {
        let color = theme.theme_colors().color_high;
        for view in self.views.values_mut() {
            view.label_color = color;
        }
    }

    /// Nächster Connector der Art `kind` innerhalb von `radius` um `point`.
    pub fn pick_connector(
        &self,
        point: Vec2,
        radius: f32,
        kind: ConnectorKind,
    ) -> Option<ConnectorHit> {
        self.views
            .values()
            .flat_map(|view| {
                view.connectors
                    .iter()
                    .filter(move |marker| marker.kind == kind)
                    .map(move |marker| (view, marker, view.marker_position(marker)))
            })
            .map(|(view, marker, anchor)| (view, marker, anchor, anchor.truncate().distance(point)))
            .filter(|(_, _, _, distance)| *distance <= radius)
            .min_by(|a, b| a.3.partial_cmp(&b.3).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(view, marker, anchor, _)| ConnectorHit {
                processor_id: view.id.clone(),
                connector_id: marker.id.clone(),
                anchor,
            })
    }

    /// Prozessor, dessen Körper (Radius `radius`) den Punkt enthält.
    pub fn pick_processor(&self, point: Vec2, radius: f32) -> Option<&str> {
        self.views
            .values()
            .find(|view| view.position.truncate().distance(point) <= radius)
            .map(ProcessorView::id)
    }

    /// Entfernt alle Ansichten.
    pub fn clear(&mut self) {
        self.views.clear();
        self.connect_mode = false;
    }
}
