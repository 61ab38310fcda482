use std::sync::Arc;

/// An easing function: maps an elapsed-time fraction in `[0, 1]` to an
/// interpolation fraction, controlling animation pacing.
pub type Ease = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// The default easing: `f(t) = 1 + (t - 1)^5`, a quintic ease-out.
pub fn quintic_ease_out(t: f64) -> f64 {
    1.0 + (t - 1.0).powi(5)
}

pub(crate) fn default_ease() -> Ease {
    Arc::new(quintic_ease_out)
}
