//! Concurrent in-memory metric store.
//!
//! One reader-writer lock guards the whole collection. `add` holds the write
//! half for its entire lookup-merge-insert, so concurrent counter updates
//! can't lose increments; `get` holds the read half while copying.
//!
//! Entries are keyed on `(name, kind)` in an insertion-ordered map, which
//! gives O(1) updates while keeping first-insertion order for snapshots.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::metric::{Metric, MetricKind, MetricValue};

/// Storage seam consumed by the transport layer.
pub trait MetricStorage: Send + Sync {
    /// Merge `metric` into the store (gauge: replace, counter: accumulate).
    fn add(&self, metric: Metric);
    /// Independent copy of every stored metric, in insertion order.
    fn get(&self) -> Snapshot;
}

type MetricKey = (String, MetricKind);

/// Process-wide metric store. Create once and share behind an `Arc`.
#[derive(Debug, Default)]
pub struct MemStorage {
    metrics: RwLock<IndexMap<MetricKey, MetricValue>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Critical sections never leave the map half-updated, so a poisoned lock
    // still guards a consistent collection.
    fn read(&self) -> RwLockReadGuard<'_, IndexMap<MetricKey, MetricValue>> {
        self.metrics.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<MetricKey, MetricValue>> {
        self.metrics.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MetricStorage for MemStorage {
    fn add(&self, metric: Metric) {
        let kind = metric.kind();
        let mut metrics = self.write();
        match metrics.entry((metric.name, kind)) {
            Entry::Occupied(mut e) => e.get_mut().merge(metric.value),
            Entry::Vacant(e) => {
                tracing::debug!(name = %e.key().0, %kind, "new metric");
                e.insert(metric.value);
            }
        }
    }

    fn get(&self) -> Snapshot {
        let metrics = self.read();
        let out = metrics
            .iter()
            .map(|((name, _), value)| Metric::new(name.clone(), *value))
            .collect();
        Snapshot(out)
    }
}

/// Point-in-time copy of the store. Owns its data; later updates never
/// show through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot(Vec<Metric>);

impl Snapshot {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Metric] {
        &self.0
    }

    /// Look up a single entry by name and kind.
    pub fn find(&self, name: &str, kind: MetricKind) -> Option<&Metric> {
        self.0.iter().find(|m| m.name == name && m.kind() == kind)
    }
}

impl IntoIterator for Snapshot {
    type Item = Metric;
    type IntoIter = std::vec::IntoIter<Metric>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Metric;
    type IntoIter = std::slice::Iter<'a, Metric>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
