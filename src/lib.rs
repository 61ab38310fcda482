//! A headless scroll-into-view engine, inspired by the `scroll-into-view-if-needed`
//! ponyfill family.
//!
//! This crate resolves a scroll request (target + options) into a sequence of
//! per-container scroll moves, and optionally animates those moves over time with
//! an easing function. It deliberately does *not* decide where to scroll: the
//! geometry/alignment computation is an injected collaborator that maps a target
//! and an [`AlignmentRequest`] to an ordered list of [`ScrollAction`]s.
//!
//! It is UI-agnostic. A host adapter is expected to provide:
//! - scroll container handles (anything implementing [`ScrollContainer`])
//! - a frame scheduler ([`RequestFrame`]) that delivers animation frames
//! - optionally a [`TimeSource`] (defaults to a monotonic clock)
//!
//! Entry points live on [`Scroller`]: `scroll_into_view` for native/instant
//! semantics and `smooth_scroll_into_view` for a time-based easing animation
//! whose [`Completion`] resolves once every container has converged.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod completion;
mod container;
mod driver;
mod ease;
mod options;
mod scroller;
mod time;
mod types;


pub use completion::Completion;
pub use container::{ComputeScrollIntoView, ScrollBehaviorCallback, ScrollContainer};
pub use driver::{AnimationDriver, DEFAULT_DURATION_MS, FrameCallback, RequestFrame};
pub use ease::{Ease, quintic_ease_out};
pub use options::{
    AlignmentRequest, CustomBehaviorOptions, ScrollIntoViewOptions, SmoothBehavior,
    SmoothScrollOptions, StandardBehaviorOptions,
};
pub use scroller::Scroller;
pub use time::{TimeSource, default_time_source};
pub use types::{
    Align, NativeBehavior, ScrollAction, ScrollIntoViewResult, ScrollMode, SmoothScrollRecord,
    SmoothScrollResult,
};
