//! History Row Component
//!
//! Display-only row for the history rollup; styling reflects whether the
//! todo was finished.

use leptos::prelude::*;

use crate::models::Todo;

#[component]
pub fn HistoryRow(todo: Todo) -> impl IntoView {
    let class = if todo.done {
        "todo completed"
    } else {
        "todo upcoming"
    };

    view! {
        <div class=class>
            <span class="todo-name">{todo.name.clone()}</span>
        </div>
    }
}
