//! History Panel Component
//!
//! Read-only rollup of the last week's todos, grouped by date. The panel
//! fetches once on mount; it issues no mutations, so there is nothing to
//! re-fetch after.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::HistoryRow;
use crate::grouping::group_by_date;
use crate::models::Todo;

#[component]
pub fn HistoryPanel() -> impl IntoView {
    let (todos, set_todos) = signal(Vec::<Todo>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match commands::list_recent_todos().await {
                Ok(loaded) => set_todos.set(loaded),
                Err(e) => commands::report_op_error("list_recent_todos", &e),
            }
        });
    });

    let groups = Memo::new(move |_| group_by_date(&todos.get()));

    view! {
        <div class="history-panel">
            <h2>"Last 7 Days"</h2>
            <For
                each=move || groups.get()
                key=|group| group.date.clone()
                children=move |group| {
                    let date = group.date.clone();
                    let day_todos = group.todos.clone();
                    view! {
                        <section class="history-day">
                            <h3>{date}</h3>
                            <For
                                each=move || day_todos.clone()
                                key=|todo| todo.id
                                children=move |todo| view! { <HistoryRow todo=todo /> }
                            />
                        </section>
                    }
                }
            />
        </div>
    }
}
