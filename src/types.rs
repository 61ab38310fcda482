/// Requested relative position of the target within a container's viewport,
/// along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    Nearest,
}

/// Whether the geometry collaborator should always scroll, or only when the
/// target is out of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollMode {
    Always,
    IfNeeded,
}

/// Scroll behavior requested from a container's native scroll capability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NativeBehavior {
    #[default]
    Auto,
    Instant,
    Smooth,
}

/// One scroll move produced by the geometry collaborator: a destination offset
/// for a single container, not a delta.
///
/// Created once per call, consumed once by either the instant-apply path or the
/// animation driver.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollAction<E> {
    pub container: E,
    pub top: f64,
    pub left: f64,
}

/// The resolved value handed back for one container once its animation
/// finishes.
///
/// The tuples are `(start, end)` of the animated distance. The second element
/// of `left` is width-relative (`scroll_width - dest_left`), a quirk of
/// right-to-left-aware reporting kept for compatibility with the original
/// ponyfill.
#[derive(Clone, Debug, PartialEq)]
pub struct SmoothScrollRecord<E> {
    pub container: E,
    pub left: (f64, f64),
    pub top: (f64, f64),
}

/// Outcome of [`crate::Scroller::scroll_into_view`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollIntoViewResult<T> {
    /// The target was not attached to a live document; nothing was touched.
    NoOp,
    /// Scroll destinations were applied (possibly zero of them).
    Applied,
    /// A custom behavior callback ran; this is its return value, unmodified.
    Custom(T),
}

impl<T> ScrollIntoViewResult<T> {
    /// Returns the custom callback's value, if this was custom mode.
    pub fn into_custom(self) -> Option<T> {
        match self {
            Self::Custom(v) => Some(v),
            _ => None,
        }
    }
}

/// What a [`crate::Completion`] from `smooth_scroll_into_view` resolves to.
#[derive(Clone, Debug, PartialEq)]
pub enum SmoothScrollResult<E, T = ()> {
    /// Smooth mode ran: one record per animated container, in action order.
    Animated(Vec<SmoothScrollRecord<E>>),
    /// A non-smooth behavior fell through to `scroll_into_view`.
    Passthrough(ScrollIntoViewResult<T>),
}
