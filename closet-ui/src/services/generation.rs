//! Latest-request-wins sequencing for overlapping lookups
//!
//! Search-as-you-type geocoding and per-date weather fetches can have
//! several requests in flight at once. Each request captures a generation
//! number before it starts; only the request whose generation is still
//! current when it finishes gets to apply its result. Stale responses
//! are dropped without error.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct GenerationCounter {
    current: AtomicU64,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding all earlier ones
    pub fn begin(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether a request started at `generation` is still the latest
    pub fn is_current(&self, generation: u64) -> bool {
        self.current.load(Ordering::SeqCst) == generation
    }
}
