//! The `transport` module is responsible for network communication with
//! clients, primarily via WebSockets.
//!
//! It defines the `Transport` boundary the hub's writer tasks drive, the
//! shape of inbound client messages, and the WebSocket server that accepts
//! connections and registers them with the hub.

use async_trait::async_trait;
use thiserror::Error;

use crate::hub::Payload;

pub mod message;
pub mod websocket;


/// Failure at the transport boundary.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to encode outbound payload: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("websocket error: {0}")]
    Ws(#[from] tungstenite::Error),
}

/// The write side of a client connection, exclusively owned by that client's
/// writer task. The transport picks the wire encoding; the hub treats
/// payloads as opaque.
#[async_trait]
pub trait Transport: Send {
    async fn send(&mut self, payload: &Payload) -> Result<(), TransportError>;
    async fn close(&mut self) -> Result<(), TransportError>;
}
