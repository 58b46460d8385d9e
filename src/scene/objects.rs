//! Render-Objekte der Kabel-Szene: Linien-Geometrie, Materialien, Kreise,
//! Delete-Button, Drag-Handle und Kabel.

use crate::core::ConnectionId;
use crate::shared::cable_geometry::midpoint_index;
use crate::shared::CableOptions;
use glam::{Vec2, Vec3};

/// Material für Linien (nur Farbe).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineMaterial {
    /// Linienfarbe (RGBA)
    pub color: [f32; 4],
}

impl LineMaterial {
    /// Erstellt ein Material mit Farbe.
    pub fn new(color: [f32; 4]) -> Self {
        Self { color }
    }
}

/// Polyline-Geometrie (Positions-Attribut mit 3 Komponenten je Punkt).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineGeometry {
    positions: Vec<Vec3>,
}

impl LineGeometry {
    /// Erstellt eine leere Geometrie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Erstellt eine Geometrie aus 3D-Punkten.
    pub fn from_positions(positions: Vec<Vec3>) -> Self {
        Self { positions }
    }

    /// Ersetzt die Punkte durch eine 2D-Polyline (Z = 0).
    pub fn set_from_points(&mut self, points: &[Vec2]) {
        self.positions.clear();
        self.positions
            .extend(points.iter().map(|point| point.extend(0.0)));
    }

    /// Gibt den Speicher der Geometrie frei.
    pub fn dispose(&mut self) {
        self.positions = Vec::new();
    }

    /// Anzahl der Punkte.
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Alle Punkte.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Mittleres Sample (Index `count / 2`).
    pub fn midpoint(&self) -> Option<Vec3> {
        self.positions.get(midpoint_index(self.count())).copied()
    }
}

/// Kreis-Outline als geschlossene Polyline um den lokalen Ursprung.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleOutline {
    /// Radius in Welteinheiten
    pub radius: f32,
    /// Geschlossener Linienzug (erster == letzter Punkt)
    pub geometry: LineGeometry,
}

impl CircleOutline {
    /// Erstellt eine Outline mit `segments` Segmenten.
    pub fn new(radius: f32, segments: usize) -> Self {
        let segments = segments.max(3);
        let positions = (0..=segments)
            .map(|i| {
                let angle = i as f32 / segments as f32 * std::f32::consts::TAU;
                (Vec2::from_angle(angle) * radius).extend(0.0)
            })
            .collect();
        Self {
            radius,
            geometry: LineGeometry::from_positions(positions),
        }
    }
}

/// Gefüllter Kreis (beim Delete-Button transparent, dient als Trefferfläche).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleFill {
    /// Radius in Welteinheiten
    pub radius: f32,
    /// Deckkraft (0.0 = unsichtbar)
    pub opacity: f32,
}

/// Delete-Button eines Kabels: Kreis + Kreuz, sichtbar nur im Connect-Modus.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteButton {
    /// Position relativ zum Kabel (Kabel liegen im Gruppen-Ursprung)
    pub position: Vec3,
    /// Sichtbarkeit
    pub visible: bool,
    /// Kreis-Outline
    pub outline: CircleOutline,
    /// Transparente Füllung als Trefferfläche
    pub hit_area: CircleFill,
    /// Die zwei Kreuz-Striche
    pub cross: [LineGeometry; 2],
}

impl DeleteButton {
    /// Erstellt einen unsichtbaren Delete-Button im Ursprung.
    pub fn new(radius: f32, cross_radius: f32, segments: usize) -> Self {
        let r = cross_radius;
        Self {
            position: Vec3::ZERO,
            visible: false,
            outline: CircleOutline::new(radius, segments),
            hit_area: CircleFill {
                radius,
                opacity: 0.0,
            },
            cross: [
                LineGeometry::from_positions(vec![Vec3::new(-r, -r, 0.0), Vec3::new(r, r, 0.0)]),
                LineGeometry::from_positions(vec![Vec3::new(-r, r, 0.0), Vec3::new(r, -r, 0.0)]),
            ],
        }
    }

    /// Prüft ob ein Weltpunkt innerhalb der Trefferfläche liegt.
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.truncate().distance(point) <= self.hit_area.radius
    }
}

/// Ein gerendertes Kabel, benannt nach seiner Verbindungs-ID.
#[derive(Debug, Clone, PartialEq)]
pub struct Cable {
    id: ConnectionId,
    /// Kurvengeometrie (leer bis zum ersten Zeichnen)
    pub geometry: LineGeometry,
    /// Delete-Button
    pub delete_button: DeleteButton,
}

impl Cable {
    /// Erstellt ein Kabel mit leerer Geometrie.
    pub fn new(id: impl Into<ConnectionId>, options: &CableOptions) -> Self {
        Self {
            id: id.into(),
            geometry: LineGeometry::new(),
            delete_button: DeleteButton::new(
                options.delete_button_radius,
                options.delete_cross_radius,
                options.circle_segments,
            ),
        }
    }

    /// Verbindungs-ID des Kabels.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Ersetzt die Kurvengeometrie.
    pub fn set_curve(&mut self, points: &[Vec2]) {
        self.geometry.dispose();
        self.geometry.set_from_points(points);
    }

    /// Setzt den Delete-Button auf das mittlere Sample der Kurve.
    ///
    /// Ohne Geometrie bleibt die Position unverändert.
    pub fn place_delete_button_at_midpoint(&mut self) {
        if let Some(mid) = self.geometry.midpoint() {
            self.delete_button.position.x = mid.x;
            self.delete_button.position.y = mid.y;
        }
    }
}

/// Vorschau-Kabel während eines Drags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewCable {
    /// Kurvengeometrie (leer bis zum ersten Move)
    pub geometry: LineGeometry,
}

/// Ziehbarer Marker am losen Ende eines Vorschau-Kabels.
#[derive(Debug, Clone, PartialEq)]
pub struct DragHandle {
    /// Weltposition
    pub position: Vec3,
    /// Kreis-Outline
    pub outline: CircleOutline,
}

impl DragHandle {
    /// Erstellt ein Handle an einer Position.
    pub fn new(position: Vec3, radius: f32, segments: usize) -> Self {
        Self {
            position,
            outline: CircleOutline::new(radius, segments),
        }
    }
}
