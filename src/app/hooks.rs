use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, use_window_scroll, use_window_size,
    UseIntersectionObserverOptions, UseIntersectionObserverReturn, UseWindowSizeReturn,
};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::content::Section;
use crate::reveal::{Rect, RevealController, REVEAL_INSET};
use crate::scroll::{ScrollMetrics, ScrollTracker};

/// Reactive view of the page's scroll position. `Copy`, so components take it
/// by value out of context.
#[derive(Debug, Clone, Copy)]
pub struct ScrollTrackerHandle {
    progress: Memo<f64>,
    past_threshold: Memo<bool>,
}

impl ScrollTrackerHandle {
    pub fn progress(&self) -> Memo<f64> {
        self.progress
    }

    pub fn is_past_threshold(&self) -> Memo<bool> {
        self.past_threshold
    }
}

/// Installs the page-wide scroll tracker. Calling it again below an owner that
/// already has one returns the existing handle instead of adding listeners.
///
/// The window listeners belong to the calling owner and are removed when it
/// is disposed.
pub fn provide_scroll_tracker() -> ScrollTrackerHandle {
    if let Some(handle) = use_context::<ScrollTrackerHandle>() {
        return handle;
    }

    let tracker = ScrollTracker::new();
    let (_, y) = use_window_scroll();
    let UseWindowSizeReturn { height, .. } = use_window_size();

    let state = Memo::new(move |_| {
        let document_height = document()
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or_default();
        tracker.measure(ScrollMetrics::new(y.get(), document_height, height.get()))
    });
    // memos only notify when the value changes, so the progress bar and the
    // scroll-to-top button skip the bulk of scroll events
    let handle = ScrollTrackerHandle {
        progress: Memo::new(move |_| state.get().progress()),
        past_threshold: Memo::new(move |_| state.get().is_past_threshold()),
    };
    provide_context(handle);
    handle
}

pub fn use_scroll_tracker() -> ScrollTrackerHandle {
    use_context::<ScrollTrackerHandle>().unwrap_or_else(provide_scroll_tracker)
}

/// Latches to `true` the first time `target` enters the viewport shrunk by
/// [`REVEAL_INSET`] and stays there. The observer is disconnected once the
/// latch fires.
pub fn use_reveal(target: NodeRef<html::Div>, name: &'static str) -> Signal<bool> {
    use_reveal_with_inset(target, name, REVEAL_INSET)
}

pub fn use_reveal_with_inset(
    target: NodeRef<html::Div>,
    name: &'static str,
    inset: f64,
) -> Signal<bool> {
    let controller = StoredValue::new(RevealController::with_inset(inset));
    let revealed = RwSignal::new(false);

    let latch = move |flipped: Option<bool>| {
        if flipped == Some(true) {
            log::debug!("revealed {name}");
            revealed.set(true);
        }
    };

    // regions already on screen at mount reveal without waiting for a scroll
    Effect::new(move |_| {
        let Some(el) = target.get() else {
            return;
        };
        let bounds = el.get_bounding_client_rect();
        let region = Rect::new(bounds.left(), bounds.top(), bounds.width(), bounds.height());
        let viewport = Rect::viewport(
            window_dimension(window().inner_width()),
            window_dimension(window().inner_height()),
        );
        latch(controller.try_update_value(|c| c.observe_geometry(region, viewport)));
    });

    let root_margin = controller.with_value(|c| c.root_margin());
    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let intersecting = entries.iter().any(|entry| entry.is_intersecting());
            latch(controller.try_update_value(|c| c.observe_intersection(intersecting)));
        },
        UseIntersectionObserverOptions::default().root_margin(root_margin),
    );

    Effect::new(move |_| {
        if revealed.get() {
            stop();
        }
    });

    revealed.into()
}

/// Entrance transition classes for a reveal-gated block.
pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed {
        "transition-all duration-700 ease-out opacity-100 translate-y-0"
    } else {
        "transition-all duration-700 ease-out opacity-0 translate-y-5"
    }
}

pub fn scroll_to_section(section: Section) {
    let Some(el) = document().get_element_by_id(section.id()) else {
        log::warn!("no element for section {}", section.id());
        return;
    };
    log::debug!("scrolling to {}", section.id());
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

pub fn scroll_to_top() {
    log::debug!("scrolling to top");
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

fn window_dimension(value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or_default()
}
