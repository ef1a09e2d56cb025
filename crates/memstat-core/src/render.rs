//! Snapshot rendering for the read endpoint.

use std::fmt::Write;

use crate::error::{MemstatError, Result};
use crate::store::Snapshot;

/// Plain text: one `<name>: <value>` line per metric, in store order.
pub fn render_text(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    for m in snapshot {
        let _ = writeln!(out, "{}: {}", m.name, m.value);
    }
    out
}

/// JSON array of `{"name", "type", "value"}` objects, in store order.
pub fn render_json(snapshot: &Snapshot) -> Result<String> {
    serde_json::to_string(snapshot.as_slice())
        .map_err(|e| MemstatError::Internal(format!("encode snapshot failed: {e}")))
}
