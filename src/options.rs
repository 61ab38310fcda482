use std::sync::Arc;

use crate::container::ScrollBehaviorCallback;
use crate::ease::Ease;
use crate::types::{Align, NativeBehavior, ScrollAction, ScrollMode};

/// The canonical alignment request handed to the geometry collaborator.
///
/// Immutable once built. `None` alignment fields mean "use the collaborator's
/// defaults" (`block: Center`, `inline: Nearest`); the resolver only fills
/// them in for the legacy boolean/empty option shapes.
#[derive(Clone, Debug)]
pub struct AlignmentRequest<E> {
    pub block: Option<Align>,
    pub inline: Option<Align>,
    pub scroll_mode: Option<ScrollMode>,
    /// Forwarded opaquely to the geometry collaborator (typically the ancestor
    /// at which to stop walking up the scroll chain).
    pub boundary: Option<E>,
    pub behavior: NativeBehavior,
}

/// Standard (non-custom) scroll options.
///
/// Missing fields are left to the geometry collaborator's defaults, matching
/// the legacy compatibility contract of the original ponyfill.
#[derive(Clone, Debug)]
pub struct StandardBehaviorOptions<E> {
    pub block: Option<Align>,
    pub inline: Option<Align>,
    pub scroll_mode: Option<ScrollMode>,
    pub boundary: Option<E>,
    pub behavior: NativeBehavior,
}

impl<E> Default for StandardBehaviorOptions<E> {
    fn default() -> Self {
        Self {
            block: None,
            inline: None,
            scroll_mode: None,
            boundary: None,
            behavior: NativeBehavior::Auto,
        }
    }
}

impl<E> StandardBehaviorOptions<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn aligned(block: Align, inline: Align) -> Self {
        Self {
            block: Some(block),
            inline: Some(inline),
            ..Self::default()
        }
    }

    /// The `{}` shape: every field unset.
    pub(crate) fn is_empty(&self) -> bool {
        self.block.is_none()
            && self.inline.is_none()
            && self.scroll_mode.is_none()
            && self.boundary.is_none()
            && self.behavior == NativeBehavior::Auto
    }

    pub fn with_block(mut self, block: Align) -> Self {
        self.block = Some(block);
        self
    }

    pub fn with_inline(mut self, inline: Align) -> Self {
        self.inline = Some(inline);
        self
    }

    pub fn with_scroll_mode(mut self, scroll_mode: ScrollMode) -> Self {
        self.scroll_mode = Some(scroll_mode);
        self
    }

    pub fn with_boundary(mut self, boundary: E) -> Self {
        self.boundary = Some(boundary);
        self
    }

    pub fn with_behavior(mut self, behavior: NativeBehavior) -> Self {
        self.behavior = behavior;
        self
    }
}

impl<E: Clone> StandardBehaviorOptions<E> {
    pub(crate) fn request(&self) -> AlignmentRequest<E> {
        AlignmentRequest {
            block: self.block,
            inline: self.inline,
            scroll_mode: self.scroll_mode,
            boundary: self.boundary.clone(),
            behavior: self.behavior,
        }
    }
}

/// Custom-behavior scroll options: alignment fields plus a callback that
/// receives the raw action list. In this mode the resolver skips alignment
/// defaulting entirely.
pub struct CustomBehaviorOptions<E, T> {
    pub block: Option<Align>,
    pub inline: Option<Align>,
    pub scroll_mode: Option<ScrollMode>,
    pub boundary: Option<E>,
    pub behavior: ScrollBehaviorCallback<E, T>,
}

impl<E, T> CustomBehaviorOptions<E, T> {
    pub fn new(
        behavior: impl Fn(Vec<ScrollAction<E>>) -> T + Send + Sync + 'static,
    ) -> Self {
        Self {
            block: None,
            inline: None,
            scroll_mode: None,
            boundary: None,
            behavior: Arc::new(behavior),
        }
    }

    pub fn with_block(mut self, block: Align) -> Self {
        self.block = Some(block);
        self
    }

    pub fn with_inline(mut self, inline: Align) -> Self {
        self.inline = Some(inline);
        self
    }

    pub fn with_scroll_mode(mut self, scroll_mode: ScrollMode) -> Self {
        self.scroll_mode = Some(scroll_mode);
        self
    }

    pub fn with_boundary(mut self, boundary: E) -> Self {
        self.boundary = Some(boundary);
        self
    }
}

impl<E: Clone, T> CustomBehaviorOptions<E, T> {
    pub(crate) fn request(&self) -> AlignmentRequest<E> {
        AlignmentRequest {
            block: self.block,
            inline: self.inline,
            scroll_mode: self.scroll_mode,
            boundary: self.boundary.clone(),
            behavior: NativeBehavior::Auto,
        }
    }
}

impl<E: Clone, T> Clone for CustomBehaviorOptions<E, T> {
    fn clone(&self) -> Self {
        Self {
            block: self.block,
            inline: self.inline,
            scroll_mode: self.scroll_mode,
            boundary: self.boundary.clone(),
            behavior: Arc::clone(&self.behavior),
        }
    }
}

impl<E: std::fmt::Debug, T> std::fmt::Debug for CustomBehaviorOptions<E, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomBehaviorOptions")
            .field("block", &self.block)
            .field("inline", &self.inline)
            .field("scroll_mode", &self.scroll_mode)
            .field("boundary", &self.boundary)
            .finish_non_exhaustive()
    }
}

/// The option shapes accepted by [`crate::Scroller::scroll_into_view`].
///
/// These reproduce the legacy calling conventions of the original ponyfill:
/// a boolean `alignToTop`, a plain options object, or a custom behavior
/// callback. An omitted argument (`None` at the call site) is the fourth shape.
pub enum ScrollIntoViewOptions<E, T = ()> {
    /// Legacy `alignToTop` boolean. `true` aligns to start, `false` to end.
    AlignToTop(bool),
    Standard(StandardBehaviorOptions<E>),
    Custom(CustomBehaviorOptions<E, T>),
}

impl<E, T> From<bool> for ScrollIntoViewOptions<E, T> {
    fn from(align_to_top: bool) -> Self {
        Self::AlignToTop(align_to_top)
    }
}

impl<E, T> From<StandardBehaviorOptions<E>> for ScrollIntoViewOptions<E, T> {
    fn from(options: StandardBehaviorOptions<E>) -> Self {
        Self::Standard(options)
    }
}

impl<E, T> From<CustomBehaviorOptions<E, T>> for ScrollIntoViewOptions<E, T> {
    fn from(options: CustomBehaviorOptions<E, T>) -> Self {
        Self::Custom(options)
    }
}

impl<E: std::fmt::Debug, T> std::fmt::Debug for ScrollIntoViewOptions<E, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlignToTop(v) => f.debug_tuple("AlignToTop").field(v).finish(),
            Self::Standard(o) => f.debug_tuple("Standard").field(o).finish(),
            Self::Custom(o) => f.debug_tuple("Custom").field(o).finish(),
        }
    }
}

/// Behavior selector for [`crate::Scroller::smooth_scroll_into_view`].
pub enum SmoothBehavior<E, T = ()> {
    /// Animate with the driver (the default).
    Smooth,
    /// Fall through to the instant/native path of `scroll_into_view`.
    Native(NativeBehavior),
    /// Fall through to custom mode of `scroll_into_view`.
    Custom(ScrollBehaviorCallback<E, T>),
}

impl<E, T> std::fmt::Debug for SmoothBehavior<E, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Smooth => f.write_str("Smooth"),
            Self::Native(b) => f.debug_tuple("Native").field(b).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// Options for [`crate::Scroller::smooth_scroll_into_view`].
///
/// Smooth mode passes the alignment fields to the geometry collaborator raw
/// (no `Start`/`Nearest` defaulting), so an unset `block` aligns to `Center`
/// downstream, matching the original ponyfill.
pub struct SmoothScrollOptions<E, T = ()> {
    pub block: Option<Align>,
    pub inline: Option<Align>,
    pub scroll_mode: Option<ScrollMode>,
    pub boundary: Option<E>,
    pub behavior: SmoothBehavior<E, T>,
    /// Animation duration in milliseconds; defaults to
    /// [`crate::DEFAULT_DURATION_MS`].
    pub duration_ms: Option<f64>,
    /// Easing function; defaults to [`crate::quintic_ease_out`].
    pub ease: Option<Ease>,
}

impl<E, T> Default for SmoothScrollOptions<E, T> {
    fn default() -> Self {
        Self {
            block: None,
            inline: None,
            scroll_mode: None,
            boundary: None,
            behavior: SmoothBehavior::Smooth,
            duration_ms: None,
            ease: None,
        }
    }
}

impl<E, T> SmoothScrollOptions<E, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_block(mut self, block: Align) -> Self {
        self.block = Some(block);
        self
    }

    pub fn with_inline(mut self, inline: Align) -> Self {
        self.inline = Some(inline);
        self
    }

    pub fn with_scroll_mode(mut self, scroll_mode: ScrollMode) -> Self {
        self.scroll_mode = Some(scroll_mode);
        self
    }

    pub fn with_boundary(mut self, boundary: E) -> Self {
        self.boundary = Some(boundary);
        self
    }

    pub fn with_behavior(mut self, behavior: SmoothBehavior<E, T>) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    pub fn with_ease(mut self, ease: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.ease = Some(Arc::new(ease));
        self
    }
}

impl<E: std::fmt::Debug, T> std::fmt::Debug for SmoothScrollOptions<E, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmoothScrollOptions")
            .field("block", &self.block)
            .field("inline", &self.inline)
            .field("scroll_mode", &self.scroll_mode)
            .field("boundary", &self.boundary)
            .field("behavior", &self.behavior)
            .field("duration_ms", &self.duration_ms)
            .finish_non_exhaustive()
    }
}
