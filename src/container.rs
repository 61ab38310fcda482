use std::sync::Arc;

use crate::options::AlignmentRequest;
use crate::types::{NativeBehavior, ScrollAction};

/// A handle to a scrollable element, provided by the host adapter.
///
/// Implementations are expected to be cheap clones of a shared handle (the way
/// DOM element references behave), hence the `&self` setters: offset mutation
/// goes through whatever interior mutability the handle already carries.
///
/// The horizontal accessors are the directionality-aware primitives: `scroll_left`
/// and `set_scroll_left` must read/write the *logical* horizontal offset,
/// normalizing whatever coordinate convention the host uses under right-to-left
/// layouts.
pub trait ScrollContainer: Clone {
    /// Whether this element is connected to a live document (directly or via
    /// its ownership chain). Detached targets make the whole call a no-op.
    fn is_connected(&self) -> bool;

    fn scroll_top(&self) -> f64;
    fn set_scroll_top(&self, top: f64);

    /// Directionality-normalized horizontal offset.
    fn scroll_left(&self) -> f64;
    fn set_scroll_left(&self, left: f64);

    /// Total scrollable width, used for width-relative completion reporting.
    fn scroll_width(&self) -> f64;

    /// Whether this is the root/document-level scrolling element. The animation
    /// driver never animates the root scroller, so it cannot fight native
    /// overscroll or scroll anchoring on the top-level viewport.
    fn is_root_scroller(&self) -> bool {
        false
    }

    /// Native "scroll with configurable behavior" capability.
    ///
    /// Returns `true` if the container handled the move itself; the instant
    /// path then skips the direct offset writes. The default has no such
    /// capability.
    fn scroll_to(&self, top: f64, left: f64, behavior: NativeBehavior) -> bool {
        let _ = (top, left, behavior);
        false
    }
}

/// The injected geometry collaborator.
///
/// Given an attached target and an alignment request, produces the ordered list
/// of per-container destinations (one per scrollable ancestor that needs to
/// move). Must be deterministic for a given layout and return an empty list
/// when nothing needs to scroll. Missing alignment fields in the request
/// default here, not in the resolver (`block: Center`, `inline: Nearest`).
pub type ComputeScrollIntoView<E> =
    Arc<dyn Fn(&E, &AlignmentRequest<E>) -> Vec<ScrollAction<E>> + Send + Sync>;

/// A custom scroll behavior: receives the raw action list and may do anything
/// with it. Its return value is handed back to the caller unmodified.
pub type ScrollBehaviorCallback<E, T> = Arc<dyn Fn(Vec<ScrollAction<E>>) -> T + Send + Sync>;
