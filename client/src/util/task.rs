//! Browser task helpers.
//!
//! TRADE-OFFS
//! ==========
//! Async work only runs in the browser. SSR renders the initial empty state,
//! so outside `hydrate` spawned futures are dropped and sleeps resolve
//! immediately.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::on_cleanup;

/// Run `fut` on the browser event loop.
pub fn spawn<F>(fut: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "hydrate"))]
    drop(fut);
}

/// Timer-backed sleep in the browser; immediate elsewhere.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(feature = "hydrate"))]
    let _ = duration;
}

/// Cleared when the owning component unmounts, so late responses can be
/// dropped instead of written into disposed state.
#[derive(Clone, Debug)]
pub struct AliveFlag(Arc<AtomicBool>);

impl AliveFlag {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// A flag cleared by the current reactive owner's cleanup.
    pub fn for_current_owner() -> Self {
        let flag = Self::new();
        let cleared = flag.clone();
        on_cleanup(move || cleared.clear());
        flag
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for AliveFlag {
    fn default() -> Self {
        Self::new()
    }
}
