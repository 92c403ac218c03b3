use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::debug;

use crate::hub::message::Payload;

/// Opaque client identity, assigned by the connection factory before
/// registration. Used only for logging and live-set keys, never for ordering.
pub type ClientId = String;

/// Outcome of a non-blocking enqueue attempt onto a client's outbound queue.
#[derive(Debug, PartialEq, Eq)]
pub enum Enqueue {
    /// The payload was accepted into the queue.
    Delivered,
    /// The queue is full; the client's writer is not draining fast enough.
    Saturated,
    /// The queue's receiver is gone; the writer has already terminated.
    Closed,
}

/// Per-connection state held in the hub's live set: an identity and the send
/// half of the client's bounded outbound queue.
///
/// The hub owns the *only* sender for the queue, so removing a `Client` from
/// the live set and dropping it closes the queue exactly once. The receive
/// half lives in the client's `Writer`, which terminates when the queue
/// closes.
#[derive(Debug)]
pub struct Client {
    pub id: ClientId,
    outbound: mpsc::Sender<Payload>,
}

impl Client {
    /// Creates a client with a bounded outbound queue of the given capacity.
    /// Returns the client alongside the queue's receive half, which is handed
    /// to the client's `Writer`.
    pub fn channel(id: ClientId, capacity: usize) -> (Self, mpsc::Receiver<Payload>) {
        let (outbound, queue) = mpsc::channel(capacity);
        (Self { id, outbound }, queue)
    }

    /// Attempts to enqueue a payload without waiting. The hub branches on the
    /// result to decide between deliver and drop.
    pub fn try_enqueue(&self, payload: Payload) -> Enqueue {
        match self.outbound.try_send(payload) {
            Ok(()) => Enqueue::Delivered,
            Err(TrySendError::Full(_)) => Enqueue::Saturated,
            Err(TrySendError::Closed(_)) => Enqueue::Closed,
        }
    }

    /// Closes the outbound queue by consuming the only sender. The client's
    /// `Writer` observes the closed queue and terminates.
    pub fn close(self) {
        debug!("closing outbound queue for {}", self.id);
    }
}
