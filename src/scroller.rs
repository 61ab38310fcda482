use crate::completion::Completion;
use crate::container::{ComputeScrollIntoView, ScrollContainer};
use crate::driver::{AnimationDriver, DEFAULT_DURATION_MS};
use crate::options::{
    CustomBehaviorOptions, ScrollIntoViewOptions, SmoothBehavior, SmoothScrollOptions,
    StandardBehaviorOptions,
};
use crate::types::{
    Align, NativeBehavior, ScrollIntoViewResult, SmoothScrollRecord, SmoothScrollResult,
};

/// The behavior resolver: normalizes the legacy option shapes into a canonical
/// alignment request and dispatches to the instant-apply path, a custom
/// behavior callback, or the animation driver.
///
/// Holds no UI objects: the geometry collaborator is injected at construction,
/// and containers are whatever handle type the host adapter provides.
pub struct Scroller<E> {
    compute: ComputeScrollIntoView<E>,
    driver: Option<AnimationDriver>,
}

impl<E: ScrollContainer> Scroller<E> {
    /// A scroller without an animation driver: `scroll_into_view` works fully,
    /// smooth requests degrade to the instant path.
    pub fn new(compute: ComputeScrollIntoView<E>) -> Self {
        Self {
            compute,
            driver: None,
        }
    }

    pub fn with_driver(mut self, driver: AnimationDriver) -> Self {
        self.driver = Some(driver);
        self
    }

    pub fn driver(&self) -> Option<&AnimationDriver> {
        self.driver.as_ref()
    }

    /// Scrolls `target` into view with native-jump semantics.
    ///
    /// Targets not attached to a live document are a silent no-op (custom mode
    /// still fires its callback, with an empty action list). Never fails: the
    /// only faults that can escape are panics from a caller-supplied callback.
    pub fn scroll_into_view<T>(
        &self,
        target: &E,
        options: Option<ScrollIntoViewOptions<E, T>>,
    ) -> ScrollIntoViewResult<T> {
        let attached = target.is_connected();

        // Legacy compatibility contract: `false` aligns to end, a non-empty
        // options object passes through untouched, and everything else
        // (omitted, `true`, `{}`) aligns to start.
        let standard = match options {
            Some(ScrollIntoViewOptions::Custom(custom)) => {
                sdebug!(attached, mode = "custom", "scroll_into_view");
                let actions = if attached {
                    (self.compute)(target, &custom.request())
                } else {
                    Vec::new()
                };
                return ScrollIntoViewResult::Custom((custom.behavior)(actions));
            }
            Some(ScrollIntoViewOptions::AlignToTop(false)) => {
                StandardBehaviorOptions::aligned(Align::End, Align::Nearest)
            }
            Some(ScrollIntoViewOptions::Standard(o)) if !o.is_empty() => o,
            _ => StandardBehaviorOptions::aligned(Align::Start, Align::Nearest),
        };

        if !attached {
            sdebug!(mode = "standard", "scroll_into_view on detached target");
            return ScrollIntoViewResult::NoOp;
        }

        let request = standard.request();
        let actions = (self.compute)(target, &request);
        sdebug!(mode = "standard", actions = actions.len(), "scroll_into_view");

        for action in actions {
            if action
                .container
                .scroll_to(action.top, action.left, request.behavior)
            {
                continue;
            }
            action.container.set_scroll_top(action.top);
            action.container.set_scroll_left(action.left);
        }
        ScrollIntoViewResult::Applied
    }
}

impl<E> Scroller<E>
where
    E: ScrollContainer + Send + 'static,
{
    /// Scrolls `target` into view, animating with the driver when smooth
    /// behavior is requested (the default).
    ///
    /// Always returns a completion handle: smooth mode resolves to one record
    /// per animated container once all of them converge; a native or custom
    /// `behavior` falls through to [`Scroller::scroll_into_view`] and resolves
    /// immediately with its wrapped result. An unattached target (or an empty
    /// action list) resolves immediately with an empty record set.
    pub fn smooth_scroll_into_view<T: Send + 'static>(
        &self,
        target: &E,
        options: SmoothScrollOptions<E, T>,
    ) -> Completion<SmoothScrollResult<E, T>> {
        let SmoothScrollOptions {
            block,
            inline,
            scroll_mode,
            boundary,
            behavior,
            duration_ms,
            ease,
        } = options;

        let standard = |native: NativeBehavior, boundary: Option<E>| StandardBehaviorOptions {
            block,
            inline,
            scroll_mode,
            boundary,
            behavior: native,
        };

        match behavior {
            SmoothBehavior::Smooth => {
                let Some(driver) = &self.driver else {
                    // No driver configured: degrade to the instant path.
                    let result = self.scroll_into_view::<T>(
                        target,
                        Some(ScrollIntoViewOptions::Standard(standard(
                            NativeBehavior::Auto,
                            boundary,
                        ))),
                    );
                    return Completion::resolved(SmoothScrollResult::Passthrough(result));
                };

                // Smooth mode uses custom-mode semantics for alignment: the
                // caller's fields go to the geometry collaborator raw, so its
                // own defaults (block: Center) apply.
                let request = standard(NativeBehavior::Smooth, boundary).request();
                let actions = if target.is_connected() {
                    (self.compute)(target, &request)
                } else {
                    Vec::new()
                };

                let (completion, resolver) = Completion::pending();
                driver.animate_with(
                    actions,
                    duration_ms.unwrap_or(DEFAULT_DURATION_MS),
                    ease,
                    move |records: Vec<SmoothScrollRecord<E>>| {
                        resolver.resolve(SmoothScrollResult::Animated(records));
                    },
                );
                completion
            }
            SmoothBehavior::Native(native) => {
                let result = self.scroll_into_view::<T>(
                    target,
                    Some(ScrollIntoViewOptions::Standard(standard(native, boundary))),
                );
                Completion::resolved(SmoothScrollResult::Passthrough(result))
            }
            SmoothBehavior::Custom(callback) => {
                let custom = CustomBehaviorOptions {
                    block,
                    inline,
                    scroll_mode,
                    boundary,
                    behavior: callback,
                };
                let result =
                    self.scroll_into_view(target, Some(ScrollIntoViewOptions::Custom(custom)));
                Completion::resolved(SmoothScrollResult::Passthrough(result))
            }
        }
    }
}

impl<E> std::fmt::Debug for Scroller<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scroller")
            .field("driver", &self.driver)
            .finish_non_exhaustive()
    }
}
