//! memstat server library entry.
//!
//! Wires config, shared state, and the HTTP transport around the
//! `memstat-core` store. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
pub mod transport;
