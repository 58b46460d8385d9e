//! Geteilte Typen und Funktionen für layer-übergreifende Verträge.
//!
//! Enthält Geometrie und Optionen, die von `scene`, `app` und `ui`
//! gemeinsam genutzt werden, um direkte Abhängigkeiten zu vermeiden.

pub mod cable_geometry;
pub mod options;

pub use cable_geometry::{compute_cable_curve, compute_cable_curve_with, CurveParams};
pub use options::CableOptions;
