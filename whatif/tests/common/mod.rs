//! Shared helpers for the integration tests.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Counts how many times a callback ran.
#[derive(Clone, Default)]
pub struct CallCount(Arc<AtomicUsize>);

impl CallCount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}
