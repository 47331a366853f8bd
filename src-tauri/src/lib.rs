//! Daydesk Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: Tauri command handlers

use std::path::PathBuf;

use tauri::Manager;

mod domain;
mod repository;
mod commands;

use repository::{open_db, TodoRepository};

/// Application state shared across commands
pub struct AppState {
    pub todo_repo: TodoRepository,
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle) -> tauri::Result<PathBuf> {
    let app_dir = app_handle.path().app_data_dir()?;
    std::fs::create_dir_all(&app_dir)?;
    Ok(app_dir.join("daydesk.db"))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle()
                .plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
                    // Focus the existing window when a new instance tries to start
                    if let Some(window) = app.get_webview_window("main") {
                        let _ = window.set_focus();
                    }
                }))?;

            init_tracing();

            let db_path = get_db_path(app.handle())?;
            let conn = open_db(&db_path)?;
            tracing::info!(path = %db_path.display(), "database ready");

            app.manage(AppState {
                todo_repo: TodoRepository::new(conn),
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::create_todo,
            commands::list_today_todos,
            commands::list_recent_todos,
            commands::update_todo,
            commands::delete_todo,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
