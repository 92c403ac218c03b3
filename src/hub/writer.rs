use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::hub::client::ClientId;
use crate::hub::engine::HubHandle;
use crate::hub::message::Payload;
use crate::transport::Transport;

/// Per-client task that drains the client's outbound queue to its transport.
///
/// The writer holds the queue's receive half and exclusive ownership of the
/// transport handle. It terminates when the queue is observed closed, which
/// is how a writer learns its client has been unregistered. A transport send
/// failure terminates the writer early and asks the hub to unregister the
/// client, so the live set does not go stale.
pub struct Writer {
    id: ClientId,
    queue: mpsc::Receiver<Payload>,
    transport: Box<dyn Transport>,
    hub: HubHandle,
}

impl Writer {
    pub fn new(
        id: ClientId,
        queue: mpsc::Receiver<Payload>,
        transport: Box<dyn Transport>,
        hub: HubHandle,
    ) -> Self {
        Self {
            id,
            queue,
            transport,
            hub,
        }
    }

    /// Forwards queued payloads to the transport until the queue closes or a
    /// send fails, then releases the transport.
    pub async fn run(mut self) {
        while let Some(payload) = self.queue.recv().await {
            if let Err(e) = self.transport.send(&payload).await {
                warn!("send to {} failed: {e}", self.id);
                let _ = self.hub.unregister(self.id.clone()).await;
                break;
            }
        }

        if let Err(e) = self.transport.close().await {
            debug!("closing transport for {} failed: {e}", self.id);
        }
        debug!("writer for {} stopped", self.id);
    }
}
