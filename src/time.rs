use std::sync::Arc;
use std::sync::OnceLock;
use std::time::Instant;

/// A time source for the animation driver, in milliseconds.
///
/// Injected into [`crate::AnimationDriver`] at construction so non-standard
/// hosts (tests, wasm shims, recorded playback) can supply their own clock.
pub type TimeSource = Arc<dyn Fn() -> f64 + Send + Sync>;

static EPOCH: OnceLock<Instant> = OnceLock::new();

/// The default monotonic time source.
///
/// Anchored to a process-lifetime epoch resolved lazily on first use, so all
/// drivers sharing the default observe the same timeline.
pub fn default_time_source() -> TimeSource {
    Arc::new(|| {
        let epoch = EPOCH.get_or_init(Instant::now);
        epoch.elapsed().as_secs_f64() * 1000.0
    })
}
