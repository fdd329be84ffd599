//! Network messages - communication between App and Network layers

use crate::models::Post;
use crate::network::TransportError;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Load the full post list
    FetchPosts { id: u64 },
    /// Submit a draft for creation
    CreatePost { id: u64, draft: Post },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Outcome of a `FetchPosts` command
    PostsLoaded {
        id: u64,
        result: Result<Vec<Post>, TransportError>,
    },
    /// Outcome of a `CreatePost` command
    PostCreated {
        id: u64,
        result: Result<Post, TransportError>,
    },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::PostsLoaded { id, .. } => *id,
            NetworkResponse::PostCreated { id, .. } => *id,
        }
    }

    pub fn is_success(&self) -> bool {
        match self {
            NetworkResponse::PostsLoaded { result, .. } => result.is_ok(),
            NetworkResponse::PostCreated { result, .. } => result.is_ok(),
        }
    }
}
