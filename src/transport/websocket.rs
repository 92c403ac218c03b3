use async_trait::async_trait;
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::{WebSocketStream, accept_async};
use tracing::{error, info, warn};
use tungstenite::protocol::Message as WsMessage;

use crate::config::Settings;
use crate::hub::{Client, HubHandle, Payload, Writer};
use crate::transport::message::InboundMessage;
use crate::transport::{Transport, TransportError};

/// The write half of a WebSocket connection. Payloads are JSON-encoded into
/// text frames, the way the rest of the protocol speaks.
pub struct WsTransport {
    sink: SplitSink<WebSocketStream<TcpStream>, WsMessage>,
}

impl WsTransport {
    pub fn new(sink: SplitSink<WebSocketStream<TcpStream>, WsMessage>) -> Self {
        Self { sink }
    }
}

#[async_trait]
impl Transport for WsTransport {
    async fn send(&mut self, payload: &Payload) -> Result<(), TransportError> {
        let text = serde_json::to_string(payload)?;
        self.sink.send(WsMessage::text(text)).await?;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), TransportError> {
        self.sink.close().await?;
        Ok(())
    }
}

/// Accepts WebSocket connections and registers each one with the hub.
pub async fn start_websocket_server(addr: String, hub: HubHandle, settings: Settings) {
    let listener = TcpListener::bind(&addr).await.expect("Can't bind");

    info!("WebSocket server listening on ws://{addr}");

    while let Ok((stream, _)) = listener.accept().await {
        let hub = hub.clone();
        let settings = settings.clone();
        tokio::spawn(handle_connection(stream, hub, settings));
    }
}

/// Per-connection lifecycle: handshake, assign an identity, register with
/// the hub, then drain inbound frames until the peer goes away.
async fn handle_connection(stream: TcpStream, hub: HubHandle, settings: Settings) {
    let ws_stream = match accept_async(stream).await {
        Ok(ws) => ws,
        Err(e) => {
            warn!("WebSocket handshake error: {e}");
            return;
        }
    };

    let client_id = format!("client-{}", uuid::Uuid::new_v4());
    let (ws_sender, ws_receiver) = ws_stream.split();

    let (client, queue) = Client::channel(client_id.clone(), settings.hub.client_queue_capacity);
    let writer = Writer::new(
        client_id.clone(),
        queue,
        Box::new(WsTransport::new(ws_sender)),
        hub.clone(),
    );

    if hub.register(client, writer).await.is_err() {
        error!("hub is not running, dropping connection {client_id}");
        return;
    }
    info!("{client_id} connected");

    read_loop(ws_receiver, &client_id).await;

    info!("{client_id} disconnected");
    let _ = hub.unregister(client_id).await;
}

/// Drains inbound frames, decoding text frames into `InboundMessage`. A
/// frame that fails to decode is logged and skipped; the loop only ends when
/// the stream does.
async fn read_loop(mut ws_receiver: SplitStream<WebSocketStream<TcpStream>>, client_id: &str) {
    while let Some(Ok(msg)) = ws_receiver.next().await {
        if let WsMessage::Text(text) = msg {
            match serde_json::from_str::<InboundMessage>(text.as_str()) {
                Ok(inbound) => {
                    info!(
                        "received from {client_id}: {} (mode={}, target={})",
                        inbound.payload, inbound.mode, inbound.target
                    );
                }
                Err(err) => {
                    warn!("invalid message from {client_id}: {err}");
                }
            }
        }
    }
}
