//! Reine Geometrie-Funktionen für Patch-Kabel (kubische Bézier-Kurven).
//!
//! Layer-neutral: wird von der Kabel-Szene und vom Drag-Controller genutzt,
//! ohne Zirkel-Abhängigkeiten zu erzeugen.

use super::options::{CURVE_SEGMENTS, CURVE_STRENGTH_MAX};
use glam::Vec2;

/// Parameter für die Kabelkurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    /// Obergrenze der Kurvenstärke
    pub strength_max: f32,
    /// Anzahl Segmente (Punkte = Segmente + 1)
    pub segments: usize,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            strength_max: CURVE_STRENGTH_MAX,
            segments: CURVE_SEGMENTS,
        }
    }
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * p1 + 3.0 * inv * t2 * p2 + t2 * t * p3
}

/// Kurvenstärke: halbe Distanz, gedeckelt auf `max`.
pub fn curve_strength(distance: f32, max: f32) -> f32 {
    (distance / 2.0).min(max)
}

/// Berechnet die Kontrollpunkte eines Kabels.
///
/// Der Source-CP liegt um `s` unterhalb der Quelle, der Destination-CP um `s`
/// oberhalb des Ziels, unabhängig von der Ausrichtung des Kabels.
pub fn cable_control_points(source: Vec2, destination: Vec2, strength_max: f32) -> (Vec2, Vec2) {
    let strength = curve_strength(source.distance(destination), strength_max);
    (
        source - Vec2::new(0.0, strength),
        destination + Vec2::new(0.0, strength),
    )
}

/// Kabelkurve mit Standard-Parametern (51 Punkte, Stärke max. 30).
pub fn compute_cable_curve(source: Vec2, destination: Vec2) -> Vec<Vec2> {
    compute_cable_curve_with(source, destination, &CurveParams::default())
}

/// Kabelkurve als Polyline mit `params.segments + 1` Punkten.
///
/// Erster Punkt == `source`, letzter Punkt == `destination`.
pub fn compute_cable_curve_with(
    source: Vec2,
    destination: Vec2,
    params: &CurveParams,
) -> Vec<Vec2> {
    let segments = params.segments.max(1);
    let (cp1, cp2) = cable_control_points(source, destination, params.strength_max);

    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        points.push(cubic_bezier(source, cp1, cp2, destination, t));
    }
    points
}

/// Index des mittleren Samples einer Polyline mit `count` Punkten.
pub fn midpoint_index(count: usize) -> usize {
    count / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_curve_always_has_51_points() {
        let cases = [
            (Vec2::ZERO, Vec2::ZERO),
            (Vec2::new(-5.0, 3.0), Vec2::new(400.0, -120.0)),
            (Vec2::new(1.0, 1.0), Vec2::new(1.0, 2.0)),
        ];
        for (a, b) in cases {
            assert_eq!(compute_cable_curve(a, b).len(), 51);
        }
    }

    #[test]
    fn test_identical_points_collapse_to_single_point() {
        let p = Vec2::new(7.0, -3.0);
        let points = compute_cable_curve(p, p);
        assert_eq!(points.len(), 51);
        for point in points {
            assert_relative_eq!(point.distance(p), 0.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_short_cable_uses_half_distance_as_strength() {
        let (cp1, cp2) = cable_control_points(Vec2::ZERO, Vec2::new(0.0, 40.0), CURVE_STRENGTH_MAX);
        assert_relative_eq!(cp1.y, -20.0);
        assert_relative_eq!(cp2.y, 60.0);

        let points = compute_cable_curve(Vec2::ZERO, Vec2::new(0.0, 40.0));
        assert_relative_eq!(points[0].x, 0.0);
        assert_relative_eq!(points[0].y, 0.0);
        assert_relative_eq!(points[50].x, 0.0);
        assert_relative_eq!(points[50].y, 40.0);
    }

    #[test]
    fn test_long_cable_strength_is_capped() {
        assert_relative_eq!(curve_strength(100.0, CURVE_STRENGTH_MAX), 30.0);
        let (cp1, cp2) =
            cable_control_points(Vec2::ZERO, Vec2::new(0.0, 100.0), CURVE_STRENGTH_MAX);
        assert_relative_eq!(cp1.y, -30.0);
        assert_relative_eq!(cp2.y, 130.0);
    }

    #[test]
    fn test_horizontal_cable_sags_symmetrically() {
        // Source-CP nach unten, Destination-CP nach oben → Mittelpunkt liegt auf der Sehne
        let points = compute_cable_curve(Vec2::ZERO, Vec2::new(20.0, 0.0));
        let mid = points[midpoint_index(points.len())];
        assert_relative_eq!(mid.x, 10.0, epsilon = 1e-4);
        assert_relative_eq!(mid.y, 0.0, epsilon = 1e-4);
        // erstes Viertel liegt unterhalb, letztes oberhalb
        assert!(points[12].y < 0.0);
        assert!(points[38].y > 0.0);
    }

    #[test]
    fn test_custom_segment_count() {
        let params = CurveParams {
            strength_max: 10.0,
            segments: 8,
        };
        let points = compute_cable_curve_with(Vec2::ZERO, Vec2::new(3.0, 4.0), &params);
        assert_eq!(points.len(), 9);
        assert_eq!(midpoint_index(points.len()), 4);
    }

    #[test]
    fn test_midpoint_index_of_default_curve() {
        assert_eq!(midpoint_index(51), 25);
        assert_eq!(midpoint_index(0), 0);
    }
}
