//! memstat core: metric model, the concurrent in-memory store, and the
//! shared error surface.
//!
//! This crate carries no transport or runtime dependencies. The server crate
//! decodes HTTP requests into [`Metric`] values and renders [`Snapshot`]s;
//! everything in between lives here.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Store operations are infallible; parsing surfaces `MemstatError`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metric;
pub mod render;
pub mod store;
pub mod update;

/// Shared result type.
pub use error::{Result, MemstatError};
pub use metric::{Metric, MetricKind, MetricValue};
pub use store::{MemStorage, MetricStorage, Snapshot};
pub use update::UpdateRequest;
