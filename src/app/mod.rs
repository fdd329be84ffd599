//! App layer - view state and the request lifecycle controller
//!
//! The App actor receives UI events and network responses, applies them
//! to the [`ViewState`], and emits network commands and render state.

pub mod state;
pub mod actor;
pub mod commands;

pub use state::ViewState;
pub use actor::AppActor;
