use leptos::prelude::*;

use super::hooks::{scroll_to_top, use_scroll_tracker};

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let visible = use_scroll_tracker().is_past_threshold();

    view! {
        <button
            class=move || {
                let visibility = if visible.get() {
                    "opacity-100"
                } else {
                    "opacity-0 pointer-events-none"
                };
                format!(
                    "fixed bottom-8 right-8 bg-blue-600 text-white p-3 rounded-full shadow-lg transition-opacity duration-300 hover:scale-110 {visibility}"
                )
            }
            aria-label="Scroll to top"
            aria-hidden=move || (!visible.get()).to_string()
            on:click=move |_| scroll_to_top()
        >
            "↑"
        </button>
    }
}
