//! Messages passed between the UI, App and Network actors.
//!
//! UI -> App: [`UiEvent`]. App -> Network: [`NetworkCommand`].
//! Network -> App: [`NetworkResponse`]. App -> UI: [`RenderState`].

pub mod network;
pub mod render;
pub mod ui_events;

pub use network::{NetworkCommand, NetworkResponse};
pub use render::RenderState;
pub use ui_events::UiEvent;
