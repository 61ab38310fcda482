use std::sync::{Arc, Mutex, PoisonError};

use crate::completion::Completion;
use crate::container::ScrollContainer;
use crate::ease::{Ease, default_ease};
use crate::time::{TimeSource, default_time_source};
use crate::types::{ScrollAction, SmoothScrollRecord};

/// Default animation duration, in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 600.0;

/// A scheduled frame callback. The host invokes it on its next animation frame.
pub type FrameCallback = Box<dyn FnOnce() + Send>;

/// The host's frame scheduler (the `requestAnimationFrame` seam).
///
/// Each animation task reschedules itself through this independently; tasks are
/// never batched into one tick, so drift between tasks is possible and fine.
pub type RequestFrame = Arc<dyn Fn(FrameCallback) + Send + Sync>;

type JoinResolve<E> = Box<dyn FnOnce(Vec<SmoothScrollRecord<E>>) + Send>;

/// Turns a list of per-container destinations into a single asynchronous
/// completion, animating any container whose current offset differs from its
/// destination.
///
/// Constructed once per host with the frame scheduler and (optionally) a time
/// source; both capabilities are resolved at construction rather than through
/// global state.
pub struct AnimationDriver {
    request_frame: RequestFrame,
    now: TimeSource,
}

impl AnimationDriver {
    /// A driver using the default monotonic time source.
    pub fn new(request_frame: RequestFrame) -> Self {
        Self::with_time_source(request_frame, default_time_source())
    }

    pub fn with_time_source(request_frame: RequestFrame, now: TimeSource) -> Self {
        Self { request_frame, now }
    }

    /// Animates every action whose container is not already at its destination
    /// and is not the root scroller.
    ///
    /// The returned completion resolves to one record per animated container,
    /// in action order, once all of them have converged. An empty task set
    /// resolves immediately with an empty list.
    pub fn animate<E>(
        &self,
        actions: Vec<ScrollAction<E>>,
        duration_ms: f64,
        ease: Option<Ease>,
    ) -> Completion<Vec<SmoothScrollRecord<E>>>
    where
        E: ScrollContainer + Send + 'static,
    {
        let (completion, resolver) = Completion::pending();
        self.animate_with(actions, duration_ms, ease, move |records| {
            resolver.resolve(records)
        });
        completion
    }

    /// Callback flavor of [`AnimationDriver::animate`]; `done` fires exactly
    /// once, from the frame callback that finishes the last task (or
    /// synchronously when nothing needs animating).
    pub(crate) fn animate_with<E>(
        &self,
        actions: Vec<ScrollAction<E>>,
        duration_ms: f64,
        ease: Option<Ease>,
        done: impl FnOnce(Vec<SmoothScrollRecord<E>>) + Send + 'static,
    ) where
        E: ScrollContainer + Send + 'static,
    {
        // A zero duration degenerates to an immediate final frame.
        let duration = duration_ms.max(1.0);
        let ease = ease.unwrap_or_else(default_ease);

        let mut pending = Vec::new();
        for action in actions {
            let start_left = action.container.scroll_left();
            let start_top = action.container.scroll_top();
            if start_left == action.left && start_top == action.top {
                strace!("skipping container already at destination");
                continue;
            }
            if action.container.is_root_scroller() {
                strace!("skipping root scroller");
                continue;
            }
            pending.push((action, start_left, start_top));
        }

        sdebug!(tasks = pending.len(), duration_ms = duration, "animate");

        if pending.is_empty() {
            done(Vec::new());
            return;
        }

        let join = Arc::new(Mutex::new(JoinState {
            slots: (0..pending.len()).map(|_| None).collect(),
            remaining: pending.len(),
            done: Some(Box::new(done)),
        }));

        for (slot, (action, start_left, start_top)) in pending.into_iter().enumerate() {
            let task = AnimationTask {
                container: action.container,
                start_left,
                start_top,
                dest_left: action.left,
                dest_top: action.top,
                start_time: (self.now)(),
                duration,
                ease: Arc::clone(&ease),
                slot,
                join: Arc::clone(&join),
                request_frame: Arc::clone(&self.request_frame),
                now: Arc::clone(&self.now),
            };
            task.step();
        }
    }
}

impl std::fmt::Debug for AnimationDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationDriver").finish_non_exhaustive()
    }
}

/// Aggregation state shared by all tasks of one `animate` call: a join that
/// fires `done` after the last record lands, preserving action order.
struct JoinState<E> {
    slots: Vec<Option<SmoothScrollRecord<E>>>,
    remaining: usize,
    done: Option<JoinResolve<E>>,
}

impl<E> JoinState<E> {
    fn finish(
        &mut self,
        slot: usize,
        record: SmoothScrollRecord<E>,
    ) -> Option<(JoinResolve<E>, Vec<SmoothScrollRecord<E>>)> {
        if self.slots[slot].is_none() {
            self.slots[slot] = Some(record);
            self.remaining = self.remaining.saturating_sub(1);
        }
        if self.remaining > 0 {
            return None;
        }
        let done = self.done.take()?;
        let records = self.slots.drain(..).flatten().collect();
        Some((done, records))
    }
}

/// One container's animation, advanced once per frame until the written
/// offsets equal the destination.
struct AnimationTask<E> {
    container: E,
    start_left: f64,
    start_top: f64,
    dest_left: f64,
    dest_top: f64,
    start_time: f64,
    duration: f64,
    ease: Ease,
    slot: usize,
    join: Arc<Mutex<JoinState<E>>>,
    request_frame: RequestFrame,
    now: TimeSource,
}

impl<E> AnimationTask<E>
where
    E: ScrollContainer + Send + 'static,
{
    fn step(self) {
        let elapsed = (((self.now)() - self.start_time) / self.duration).clamp(0.0, 1.0);
        let value = (self.ease)(elapsed);

        let current_left = self.start_left + (self.dest_left - self.start_left) * value;
        let current_top = self.start_top + (self.dest_top - self.start_top) * value;

        // Ceil so repeated fractional writes still land on the destination
        // instead of stalling one truncated pixel short of it.
        let write_left = current_left.ceil();
        let write_top = current_top.ceil();
        self.container.set_scroll_left(write_left);
        self.container.set_scroll_top(write_top);

        if write_left == self.dest_left.ceil() && write_top == self.dest_top.ceil() {
            self.finish();
        } else {
            let request_frame = Arc::clone(&self.request_frame);
            request_frame(Box::new(move || self.step()));
        }
    }

    fn finish(self) {
        strace!(slot = self.slot, "task converged");
        let record = SmoothScrollRecord {
            left: (
                self.start_left,
                self.container.scroll_width() - self.dest_left,
            ),
            top: (self.start_top, self.dest_top),
            container: self.container,
        };
        let resolved = {
            let mut join = self.join.lock().unwrap_or_else(PoisonError::into_inner);
            join.finish(self.slot, record)
        };
        if let Some((done, records)) = resolved {
            done(records);
        }
    }
}
