//! HTTP transport: request decoding, error mapping, panic isolation.

pub mod error;
pub mod http;
pub mod recover;

pub use error::ApiError;
