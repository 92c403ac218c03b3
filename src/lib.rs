//! # fanhub
//!
//! `fanhub` is a minimalist WebSocket broadcast server built with Rust.
//! Every message published to the hub is fanned out to all currently
//! connected clients; a client that cannot keep up is dropped rather than
//! allowed to stall delivery to the others.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct responsibility:
//!
//! - `hub`: The central component that owns the live client set and performs broadcast fan-out.
//! - `transport`: Manages the WebSocket server and the wire encoding of messages.
//! - `config`: Handles loading and managing server configuration.
//! - `utils`: Contains shared utilities, such as error handling and logging.

pub mod config;
pub mod hub;
pub mod transport;
pub mod utils;
