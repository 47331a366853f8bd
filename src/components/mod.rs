//! UI Components
//!
//! Reusable Leptos components.

mod today_panel;
mod todo_card;
mod history_panel;
mod history_row;

pub use today_panel::TodayPanel;
pub use todo_card::TodoCard;
pub use history_panel::HistoryPanel;
pub use history_row::HistoryRow;
