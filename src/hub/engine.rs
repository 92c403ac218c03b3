use std::collections::HashMap;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::config::HubSettings;
use crate::hub::client::{Client, ClientId, Enqueue};
use crate::hub::message::Payload;
use crate::hub::writer::Writer;
use crate::utils::error::HubError;

/// Buffer for the register and unregister queues. Membership events are rare
/// compared to broadcasts, so a small fixed buffer is enough.
const MEMBERSHIP_QUEUE_CAPACITY: usize = 16;

/// A client joining the hub: the client bundle for the live set plus the
/// writer task the hub starts on its behalf.
pub struct Registration {
    pub client: Client,
    pub writer: Writer,
}

/// The broadcast arbiter. A single control loop owns the live client set and
/// processes register, unregister, and broadcast events one at a time in
/// arrival order, so membership changes are linearizable without locks.
///
/// On a broadcast, each live client gets a non-blocking enqueue onto its
/// outbound queue. A client whose queue is full is treated as unresponsive
/// and removed in the same pass (drop, don't block): the publisher never
/// waits on a slow consumer, and no failure is surfaced for the dropped
/// client.
pub struct Hub {
    pub(crate) clients: HashMap<ClientId, Client>,
    register_rx: mpsc::Receiver<Registration>,
    unregister_rx: mpsc::Receiver<ClientId>,
    broadcast_rx: mpsc::Receiver<Payload>,
}

/// Cloneable ports into a running hub. Producers use this to register,
/// unregister, and broadcast; the hub itself is owned by its control loop.
#[derive(Clone)]
pub struct HubHandle {
    register_tx: mpsc::Sender<Registration>,
    unregister_tx: mpsc::Sender<ClientId>,
    broadcast_tx: mpsc::Sender<Payload>,
}

impl Hub {
    /// Creates a hub and the handle producers use to reach it. The hub does
    /// not process events until `run` is driven; `start` does both.
    pub fn new(settings: &HubSettings) -> (Self, HubHandle) {
        let (register_tx, register_rx) = mpsc::channel(MEMBERSHIP_QUEUE_CAPACITY);
        let (unregister_tx, unregister_rx) = mpsc::channel(MEMBERSHIP_QUEUE_CAPACITY);
        let (broadcast_tx, broadcast_rx) = mpsc::channel(settings.broadcast_capacity);

        let hub = Self {
            clients: HashMap::new(),
            register_rx,
            unregister_rx,
            broadcast_rx,
        };
        let handle = HubHandle {
            register_tx,
            unregister_tx,
            broadcast_tx,
        };
        (hub, handle)
    }

    /// Creates a hub and spawns its control loop.
    pub fn start(settings: &HubSettings) -> HubHandle {
        let (hub, handle) = Self::new(settings);
        tokio::spawn(hub.run());
        handle
    }

    /// The control loop. Exits once every `HubHandle` is gone and all queued
    /// events have been processed.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(registration) = self.register_rx.recv() => self.on_register(registration),
                Some(id) = self.unregister_rx.recv() => self.on_unregister(&id),
                Some(payload) = self.broadcast_rx.recv() => self.on_broadcast(payload),
                else => break,
            }
        }
        debug!("hub control loop stopped");
    }

    pub(crate) fn on_register(&mut self, registration: Registration) {
        let Registration { client, writer } = registration;
        info!("registered {} ({} live)", client.id, self.clients.len() + 1);
        self.clients.insert(client.id.clone(), client);
        tokio::spawn(writer.run());
    }

    /// Removes the client and closes its queue. Unregistering an absent
    /// client is a no-op: the connection-close path and the overflow-drop
    /// path may both request removal of the same client.
    pub(crate) fn on_unregister(&mut self, id: &ClientId) {
        match self.clients.remove(id) {
            Some(client) => {
                client.close();
                info!("unregistered {id} ({} live)", self.clients.len());
            }
            None => debug!("unregister for unknown client {id}"),
        }
    }

    pub(crate) fn on_broadcast(&mut self, payload: Payload) {
        debug!("broadcasting to {} clients", self.clients.len());
        let mut dropped: Vec<ClientId> = Vec::new();
        for (id, client) in &self.clients {
            match client.try_enqueue(payload.clone()) {
                Enqueue::Delivered => {}
                Enqueue::Saturated => {
                    warn!("queue for {id} is full, dropping client");
                    dropped.push(id.clone());
                }
                Enqueue::Closed => {
                    warn!("queue for {id} is already closed, dropping client");
                    dropped.push(id.clone());
                }
            }
        }
        for id in dropped {
            if let Some(client) = self.clients.remove(&id) {
                client.close();
            }
        }
    }
}

impl HubHandle {
    /// Submits a client for registration. The hub adds it to the live set
    /// and starts its writer task.
    pub async fn register(&self, client: Client, writer: Writer) -> Result<(), HubError> {
        self.register_tx
            .send(Registration { client, writer })
            .await
            .map_err(|_| HubError::Stopped)
    }

    /// Asks the hub to remove a client and close its queue. Safe to call for
    /// a client that was already removed.
    pub async fn unregister(&self, id: ClientId) -> Result<(), HubError> {
        self.unregister_tx
            .send(id)
            .await
            .map_err(|_| HubError::Stopped)
    }

    /// Submits a payload for delivery to every currently live client. This
    /// suspends only while the hub's broadcast queue is full; once accepted,
    /// delivery is asynchronous and never blocks the publisher again.
    pub async fn broadcast(&self, payload: Payload) -> Result<(), HubError> {
        self.broadcast_tx
            .send(payload)
            .await
            .map_err(|_| HubError::Stopped)
    }
}
