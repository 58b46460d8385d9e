//! Application-Layer: Controller, Zustandsänderungen, Dispatch und Referenz-Store.

pub mod controller;
pub mod dispatch;
pub mod events;
pub mod patch_store;

pub use controller::SceneController;
pub use dispatch::{ActionDispatcher, ActionQueue};
pub use events::StateChange;
pub use patch_store::PatchStore;
