use thiserror::Error;

/// Errors surfaced by the hub's handle operations.
#[derive(Debug, Error)]
pub enum HubError {
    /// The hub's control loop is no longer running, so register, unregister,
    /// and broadcast events have nowhere to go.
    #[error("hub control loop is not running")]
    Stopped,
}
