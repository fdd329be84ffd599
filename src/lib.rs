//! # Postboard TUI
//!
//! A small terminal client for a JSON posts API.
//!
//! ## Features
//! - List posts from `GET {api_url}`
//! - Create a post with a title/body form via `POST {api_url}`
//! - Loading and error reporting, one request in flight at a time
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (view state controller)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, ViewState};
pub use config::Config;
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{DraftField, Post};
pub use network::{NetworkActor, PostTransport, PostsClient, TransportError};
