//! UI-Komponenten des Viewers (egui).

pub mod viewport;

pub use viewport::{color32, CableViewport, ViewportTransform};
