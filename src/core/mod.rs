//! Core-Domänentypen: Store-Zustand, Prozessoren, Verbindungen, Themes, Actions.

pub mod action;
pub mod connection;
pub mod processor;
pub mod store_state;
pub mod table;
pub mod theme;

pub use action::StoreAction;
pub use connection::{Connection, ConnectionId};
pub use processor::{Connector, ConnectorKind, Processor};
pub use store_state::StoreState;
pub use table::Table;
pub use theme::{Theme, ThemeColors, ThemeProvider};
