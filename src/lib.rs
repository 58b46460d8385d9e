//! Patch-Cables Library.
//! Kabel-Szene, Drag-Interaktion und Store-Modell eines MIDI-Patch-Editors,
//! als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod midi;
pub mod scene;
pub mod shared;
pub mod ui;

pub use app::{ActionDispatcher, ActionQueue, PatchStore, SceneController, StateChange};
pub use core::{
    Connection, ConnectionId, Connector, ConnectorKind, Processor, StoreAction, StoreState, Theme,
    ThemeColors, ThemeProvider,
};
pub use scene::{CableSceneManager, DragController, DragState};
pub use shared::{compute_cable_curve, CableOptions, CurveParams};
