//! Daydesk Frontend App
//!
//! Main application component with two-panel layout: today's todos on the
//! left, the weekly history rollup on the right.

use leptos::prelude::*;

use crate::components::{HistoryPanel, TodayPanel};
use crate::layout;

#[component]
pub fn App() -> impl IntoView {
    // Region category from the hosting window, sampled once at mount
    let region_width = web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(layout::region_for_width)
        .unwrap_or(layout::LARGE);

    view! {
        <div class="app-layout">
            <main class="main-content">
                <TodayPanel region_width=region_width />
            </main>

            <aside class="side-content">
                <HistoryPanel />
            </aside>
        </div>
    }
}
