use serde::Deserialize;

/// An application message decoded from an inbound text frame.
///
/// `mode` and `target` are optional on the wire and default to empty strings
/// when absent. Inbound messages are currently drained and logged only; no
/// dispatch back into the hub happens on this path.
#[derive(Debug, Deserialize)]
pub struct InboundMessage {
    pub payload: String,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub target: String,
}
