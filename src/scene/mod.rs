//! Szenen-Modell: Kabel, Drag-Vorschau und Prozessor-Ansichten.
//!
//! Die Szene hält nur eine Render-Projektion des Store-Zustands und wird
//! ausschließlich über Zustandsänderungen und Drag-Operationen mutiert.

pub mod cable_scene;
pub mod drag;
pub mod group;
pub mod objects;
pub mod processor_layer;

pub use cable_scene::CableSceneManager;
pub use drag::{CableSource, DragController, DragState};
pub use group::CableGroup;
pub use objects::{
    Cable, CircleFill, CircleOutline, DeleteButton, DragHandle, LineGeometry, LineMaterial,
    PreviewCable,
};
pub use processor_layer::{ConnectorHit, ConnectorMarker, ProcessorLayer, ProcessorView};
