//! # Hostname Registry
//!
//! The single piece of state shared across all producers in a run: a
//! grow-only, deduplicated set of confirmed hostnames. Passive sources and
//! brute-force probes race to insert; membership check and insert are one
//! atomic step, so a hostname is counted as "new" exactly once no matter
//! how many workers discover it.

use std::collections::BTreeSet;
use std::sync::Mutex;

#[derive(Debug, Default)]
pub struct HostRegistry {
    hosts: Mutex<BTreeSet<String>>,
}

impl HostRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a normalized hostname. Returns `true` iff it was not
    /// already present; a duplicate insert is a no-op.
    pub fn insert(&self, hostname: String) -> bool {
        self.hosts.lock().unwrap().insert(hostname)
    }

    /// All hostnames discovered so far, in strict lexicographic ascending
    /// order with no duplicates.
    pub fn snapshot(&self) -> Vec<String> {
        self.hosts.lock().unwrap().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.hosts.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
