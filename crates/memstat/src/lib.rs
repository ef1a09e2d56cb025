//! Top-level facade crate for memstat.
//!
//! Re-exports the core store and the server library so users can depend on a single crate.

pub mod core {
    pub use memstat_core::*;
}

pub mod server {
    pub use memstat_server::*;
}
