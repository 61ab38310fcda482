use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::task::{Context, Poll, Waker};

struct CompletionState<V> {
    value: Option<V>,
    resolved: bool,
    waker: Option<Waker>,
}

/// A pending-or-resolved completion handle.
///
/// This is the only thing a caller ever awaits: the handle is returned
/// immediately and resolved later from inside a frame callback. It implements
/// [`Future`], and additionally exposes [`Completion::is_done`] /
/// [`Completion::try_take`] so tick-driven hosts without an async runtime can
/// poll it from their frame loop.
///
/// The value is handed out once: `try_take` (or a completed poll) consumes it.
pub struct Completion<V> {
    shared: Arc<Mutex<CompletionState<V>>>,
}

impl<V> Completion<V> {
    pub(crate) fn pending() -> (Self, CompletionResolver<V>) {
        let shared = Arc::new(Mutex::new(CompletionState {
            value: None,
            resolved: false,
            waker: None,
        }));
        (
            Self {
                shared: Arc::clone(&shared),
            },
            CompletionResolver { shared },
        )
    }

    /// An already-resolved completion.
    pub fn resolved(value: V) -> Self {
        let (completion, resolver) = Self::pending();
        resolver.resolve(value);
        completion
    }

    /// Whether the completion has resolved and the value has not been taken yet.
    pub fn is_done(&self) -> bool {
        self.lock().value.is_some()
    }

    /// Takes the resolved value, if any.
    pub fn try_take(&self) -> Option<V> {
        self.lock().value.take()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CompletionState<V>> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V> Future for Completion<V> {
    type Output = V;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<V> {
        let mut state = self.lock();
        if let Some(value) = state.value.take() {
            return Poll::Ready(value);
        }
        state.waker = Some(cx.waker().clone());
        Poll::Pending
    }
}

impl<V> std::fmt::Debug for Completion<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completion")
            .field("resolved", &self.lock().resolved)
            .finish_non_exhaustive()
    }
}

/// The write side of a [`Completion`]; consumed by the final frame callback.
pub(crate) struct CompletionResolver<V> {
    shared: Arc<Mutex<CompletionState<V>>>,
}

impl<V> CompletionResolver<V> {
    pub(crate) fn resolve(self, value: V) {
        let waker = {
            let mut state = self.shared.lock().unwrap_or_else(PoisonError::into_inner);
            state.value = Some(value);
            state.resolved = true;
            state.waker.take()
        };
        if let Some(waker) = waker {
            waker.wake();
        }
    }
}
