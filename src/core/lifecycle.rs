use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Tracks whether the view that spawned a request is still mounted.
///
/// Requests are never cancelled, so completions check the guard and drop
/// their result once the owning view has been cleaned up.
#[derive(Debug, Clone)]
pub struct MountGuard {
    mounted: Arc<AtomicBool>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Create a guard that flips when the current reactive owner is disposed.
    pub fn for_current_view() -> Self {
        let guard = Self::new();
        let on_unmount = guard.clone();
        leptos::prelude::on_cleanup(move || on_unmount.unmount());
        guard
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_mount_state() {
        let guard = MountGuard::new();
        let in_flight = guard.clone();
        assert!(in_flight.is_mounted());

        guard.unmount();
        assert!(!in_flight.is_mounted());
    }
}
