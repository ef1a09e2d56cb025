//! Panic isolation middleware.
//!
//! A panicking handler is answered with a 500 instead of dropping the
//! connection. The store's lock tolerates poisoning, so other requests keep
//! working.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use axum::{extract::Request, middleware::Next, response::{IntoResponse, Response}};
use futures_util::FutureExt;

use memstat_core::MemstatError;

use crate::transport::ApiError;

pub async fn catch_panic(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    match AssertUnwindSafe(next.run(req)).catch_unwind().await {
        Ok(resp) => resp,
        Err(payload) => {
            tracing::error!(%method, %uri, panic = %panic_message(&*payload), "recovered panic");
            ApiError(MemstatError::Internal("handler panicked".into())).into_response()
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic payload>"
    }
}
