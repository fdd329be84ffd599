//! Network actor - runs post requests in the Tokio async runtime

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::PostTransport;

/// Network actor that executes commands against a [`PostTransport`]
pub struct NetworkActor<T: PostTransport> {
    transport: Arc<T>,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
    fetch_delay: Duration,
}

impl<T: PostTransport> NetworkActor<T> {
    pub fn new(transport: T, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            transport: Arc::new(transport),
            response_tx,
            active_requests: JoinSet::new(),
            fetch_delay: Duration::ZERO,
        }
    }

    /// Pause after each fetch so the loading state is visible
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchPosts { id }) => {
                            let response_tx = self.response_tx.clone();
                            let transport = Arc::clone(&self.transport);
                            let delay = self.fetch_delay;

                            self.active_requests.spawn(async move {
                                tracing::info!(id, "Fetching posts");
                                let result = transport.fetch_posts().await;
                                if !delay.is_zero() {
                                    tokio::time::sleep(delay).await;
                                }
                                let response = NetworkResponse::PostsLoaded { id, result };
                                tracing::info!(id, ok = response.is_success(), "Fetch completed");
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::CreatePost { id, draft }) => {
                            let response_tx = self.response_tx.clone();
                            let transport = Arc::clone(&self.transport);

                            self.active_requests.spawn(async move {
                                tracing::info!(id, title = %draft.title, "Creating post");
                                let result = transport.create_post(&draft).await;
                                let response = NetworkResponse::PostCreated { id, result };
                                tracing::info!(id, ok = response.is_success(), "Create completed");
                                let _ = response_tx.send(response);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
