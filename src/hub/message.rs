/// The opaque value fanned out to every live client on a broadcast.
///
/// The hub never inspects payloads; the transport decides the wire encoding
/// when a `Writer` hands one over.
pub type Payload = serde_json::Value;
