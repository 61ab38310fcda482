// Example: instant scroll-into-view against an in-memory pane.
use std::sync::{Arc, Mutex};

use scroll_into_view::{
    Align, ComputeScrollIntoView, NativeBehavior, ScrollAction, ScrollContainer,
    ScrollIntoViewOptions, Scroller, StandardBehaviorOptions,
};

#[derive(Debug, Default)]
struct PaneState {
    top: f64,
    left: f64,
}

/// A toy scroll container: a 200px-tall pane over a list of 40px rows.
#[derive(Clone, Debug)]
struct Pane {
    state: Arc<Mutex<PaneState>>,
    viewport: f64,
    row_height: f64,
}

impl Pane {
    fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(PaneState::default())),
            viewport: 200.0,
            row_height: 40.0,
        }
    }
}

impl ScrollContainer for Pane {
    fn is_connected(&self) -> bool {
        true
    }

    fn scroll_top(&self) -> f64 {
        self.state.lock().unwrap().top
    }

    fn set_scroll_top(&self, top: f64) {
        self.state.lock().unwrap().top = top;
    }

    fn scroll_left(&self) -> f64 {
        self.state.lock().unwrap().left
    }

    fn set_scroll_left(&self, left: f64) {
        self.state.lock().unwrap().left = left;
    }

    fn scroll_width(&self) -> f64 {
        600.0
    }
}

/// A toy geometry collaborator: aligns a row index to the pane viewport.
fn compute_for_row(row: usize) -> ComputeScrollIntoView<Pane> {
    Arc::new(move |pane: &Pane, request| {
        let row_top = row as f64 * pane.row_height;
        let top = match request.block.unwrap_or(Align::Center) {
            Align::Start => row_top,
            Align::Center => row_top - (pane.viewport - pane.row_height) / 2.0,
            Align::End => row_top - (pane.viewport - pane.row_height),
            Align::Nearest => {
                let current = pane.scroll_top();
                if row_top < current {
                    row_top
                } else if row_top + pane.row_height > current + pane.viewport {
                    row_top - (pane.viewport - pane.row_height)
                } else {
                    return Vec::new();
                }
            }
        };
        vec![ScrollAction {
            container: pane.clone(),
            top: top.max(0.0),
            left: pane.scroll_left(),
        }]
    })
}

fn main() {
    let pane = Pane::new();
    let scroller = Scroller::new(compute_for_row(30));

    // Default shape: block aligns to start.
    scroller.scroll_into_view::<()>(&pane, None);
    println!("default options: top={}", pane.scroll_top());

    // Standard options: align the row to the end of the viewport.
    let options = StandardBehaviorOptions::new()
        .with_block(Align::End)
        .with_behavior(NativeBehavior::Instant);
    scroller.scroll_into_view::<()>(&pane, Some(ScrollIntoViewOptions::Standard(options)));
    println!("block=end: top={}", pane.scroll_top());

    // Legacy boolean: `false` aligns to end too.
    scroller.scroll_into_view::<()>(&pane, Some(false.into()));
    println!("align_to_top=false: top={}", pane.scroll_top());
}
