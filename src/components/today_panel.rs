//! Today Panel Component
//!
//! Owns today's authoritative todo list: fetches it from the backend,
//! re-fetches after every mutation, splits it into upcoming/completed for
//! display, and keeps the clock/greeting header ticking.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::clock;
use crate::commands::{self, CreateTodoArgs};
use crate::components::TodoCard;
use crate::layout;
use crate::models::{completed, upcoming, Todo, TodoEvent};

#[component]
pub fn TodayPanel(region_width: &'static str) -> impl IntoView {
    let (todos, set_todos) = signal(Vec::<Todo>::new());
    let (draft, set_draft) = signal(String::new());
    let (clock_text, set_clock_text) = signal(String::new());
    let (greeting_text, set_greeting_text) = signal(String::new());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Fetch sequence guard: a slow response must not clobber the result of
    // a fetch issued after it. Responses carrying a stale sequence number
    // are dropped.
    let fetch_seq = StoredValue::new(0u32);

    let update_clock = move || {
        let now = js_sys::Date::new_0();
        let hour = now.get_hours();
        let minute = now.get_minutes();
        set_clock_text.set(clock::clock_label(hour, minute));
        set_greeting_text.set(clock::greeting(hour).to_string());
    };

    update_clock();
    // Keep the ticker alive for the component's lifetime. The interval is not
    // `Send`/`Sync`, so it can't be captured by `on_cleanup` (which requires
    // both); instead the reactive owner's local arena owns it and drops it
    // (cancelling the interval) when the component is disposed.
    StoredValue::new_local(Interval::new(60_000, update_clock));

    // Reload today's list whenever the trigger is bumped: on mount, after
    // a successful add, and after any card reports a mutation.
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let seq = fetch_seq.get_value() + 1;
        fetch_seq.set_value(seq);
        spawn_local(async move {
            match commands::list_today_todos().await {
                Ok(loaded) => {
                    if fetch_seq.get_value() == seq {
                        set_todos.set(loaded);
                    }
                }
                Err(e) => commands::report_op_error("list_today_todos", &e),
            }
        });
    });

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = draft.get();
        // The input resets immediately, even if the create request fails.
        set_draft.set(String::new());
        if name.trim().is_empty() {
            return;
        }
        spawn_local(async move {
            match commands::create_todo(&CreateTodoArgs { name: &name }).await {
                Ok(_) => set_reload_trigger.update(|v| *v += 1),
                Err(e) => commands::report_op_error("create_todo", &e),
            }
        });
    };

    // Cards never patch the list themselves; any reported mutation means a
    // full re-fetch.
    let on_card_event = Callback::new(move |event: TodoEvent| match event {
        TodoEvent::Updated(_) | TodoEvent::Deleted(_) => {
            set_reload_trigger.update(|v| *v += 1);
        }
    });

    let input_class = format!("add-todo-form col-{}", layout::input_span(region_width));

    view! {
        <div class="today-panel">
            <header class="today-header">
                <h1>{move || greeting_text.get()}</h1>
                <span class="clock">{move || clock_text.get()}</span>
            </header>

            <form class=input_class on:submit=add_todo>
                <input
                    type="text"
                    placeholder="What needs doing today?"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </form>

            <section class="todo-section">
                <h2>"Upcoming"</h2>
                <For
                    each=move || upcoming(&todos.get())
                    key=|todo| todo.id
                    children=move |todo| view! { <TodoCard todo=todo on_event=on_card_event /> }
                />
            </section>

            <section class="todo-section">
                <h2>"Completed"</h2>
                <For
                    each=move || completed(&todos.get())
                    key=|todo| todo.id
                    children=move |todo| view! { <TodoCard todo=todo on_event=on_card_event /> }
                />
            </section>
        </div>
    }
}
