// Example: driving the animation driver from a simulated 60fps frame loop.
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use scroll_into_view::{
    AnimationDriver, ComputeScrollIntoView, FrameCallback, ScrollAction, ScrollContainer,
    Scroller, SmoothScrollOptions, SmoothScrollResult,
};

#[derive(Debug, Default)]
struct PaneState {
    top: f64,
    left: f64,
}

#[derive(Clone, Debug)]
struct Pane(Arc<Mutex<PaneState>>);

impl ScrollContainer for Pane {
    fn is_connected(&self) -> bool {
        true
    }

    fn scroll_top(&self) -> f64 {
        self.0.lock().unwrap().top
    }

    fn set_scroll_top(&self, top: f64) {
        self.0.lock().unwrap().top = top;
    }

    fn scroll_left(&self) -> f64 {
        self.0.lock().unwrap().left
    }

    fn set_scroll_left(&self, left: f64) {
        self.0.lock().unwrap().left = left;
    }

    fn scroll_width(&self) -> f64 {
        600.0
    }
}

fn main() {
    // A host shim: a frame queue plus a manually advanced clock.
    let frames: Arc<Mutex<VecDeque<FrameCallback>>> = Arc::default();
    let clock = Arc::new(Mutex::new(0.0f64));

    let request_frame = {
        let frames = Arc::clone(&frames);
        Arc::new(move |cb: FrameCallback| frames.lock().unwrap().push_back(cb))
    };
    let time_source = {
        let clock = Arc::clone(&clock);
        Arc::new(move || *clock.lock().unwrap())
    };

    let pane = Pane(Arc::default());
    let compute: ComputeScrollIntoView<Pane> = Arc::new(|pane: &Pane, _request| {
        vec![ScrollAction {
            container: pane.clone(),
            top: 500.0,
            left: 0.0,
        }]
    });
    let scroller = Scroller::new(compute)
        .with_driver(AnimationDriver::with_time_source(request_frame, time_source));

    let completion = scroller.smooth_scroll_into_view(
        &pane,
        SmoothScrollOptions::<Pane>::new().with_duration_ms(240.0),
    );

    // Simulate a 60fps tick loop until the completion resolves.
    let mut frame = 0u64;
    while !completion.is_done() {
        *clock.lock().unwrap() += 16.0;
        frame += 1;

        let batch: Vec<_> = frames.lock().unwrap().drain(..).collect();
        for cb in batch {
            cb();
        }

        if frame % 3 == 0 {
            println!("t={}ms top={}", frame * 16, pane.scroll_top());
        }
    }

    match completion.try_take() {
        Some(SmoothScrollResult::Animated(records)) => {
            println!(
                "done: top={} animated={} record={:?}",
                pane.scroll_top(),
                records.len(),
                records.first().map(|r| r.top)
            );
        }
        other => println!("unexpected outcome: {other:?}"),
    }
}
