//! Network layer - the posts API transport and the actor that drives it
//!
//! The Network actor receives fetch/create commands and sends back their outcomes.

pub mod actor;
pub mod client;
pub mod error;

pub use actor::NetworkActor;
pub use client::{PostTransport, PostsClient};
pub use error::TransportError;
