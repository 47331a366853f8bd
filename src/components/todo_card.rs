//! Todo Card Component
//!
//! A single todo with toggle and delete actions. The card never mutates
//! its own fields: it reports the outcome upward and lets the owning panel
//! re-fetch, so the rendered state always reflects server-confirmed data.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, UpdateTodoArgs};
use crate::models::{Todo, TodoEvent};

/// Icon shown on the toggle button
fn status_icon(done: bool) -> &'static str {
    if done {
        "✓"
    } else {
        "+"
    }
}

/// Container class based on completion state
fn card_class(done: bool) -> &'static str {
    if done {
        "todo completed"
    } else {
        "todo upcoming"
    }
}

#[component]
pub fn TodoCard(todo: Todo, #[prop(into)] on_event: Callback<TodoEvent>) -> impl IntoView {
    let id = todo.id;
    let done = todo.done;
    let name = todo.name.clone();

    let toggle = move |_: web_sys::MouseEvent| {
        let name = name.clone();
        spawn_local(async move {
            let args = UpdateTodoArgs {
                id,
                name: &name,
                done: !done,
            };
            match commands::update_todo(&args).await {
                Ok(updated) => on_event.run(TodoEvent::Updated(updated)),
                Err(e) => commands::report_op_error("update_todo", &e),
            }
        });
    };

    let remove = move |_: web_sys::MouseEvent| {
        spawn_local(async move {
            match commands::delete_todo(id).await {
                Ok(_) => on_event.run(TodoEvent::Deleted(id)),
                Err(e) => commands::report_op_error("delete_todo", &e),
            }
        });
    };

    view! {
        <div class=card_class(done)>
            <button class="toggle-btn" title="Toggle status" on:click=toggle>
                {status_icon(done)}
            </button>
            <span class="todo-name">{todo.name.clone()}</span>
            <button class="delete-btn" title="Delete" on:click=remove>
                "×"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_icon_tracks_completion() {
        assert_eq!(status_icon(true), "✓");
        assert_eq!(status_icon(false), "+");
    }

    #[test]
    fn test_card_class_tracks_completion() {
        assert_eq!(card_class(true), "todo completed");
        assert_eq!(card_class(false), "todo upcoming");
    }
}
