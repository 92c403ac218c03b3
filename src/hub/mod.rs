//! The `hub` module is the broadcast core of the system.
//!
//! A `Hub` is a single control loop that exclusively owns the set of live
//! clients and serializes all membership changes and broadcast fan-out.
//! Each registered client gets a `Writer` task that drains its bounded
//! outbound queue to the client's transport. Delivery is drop-on-full: a
//! client whose queue is saturated during a broadcast is removed rather than
//! waited on.

pub mod client;
pub mod engine;
pub mod message;
pub mod writer;

pub use client::{Client, ClientId, Enqueue};
pub use engine::{Hub, HubHandle, Registration};
pub use message::Payload;
pub use writer::Writer;
