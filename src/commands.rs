//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands. Every wrapper surfaces failures
//! as `Err(String)`; callers decide what to do with them (in practice:
//! report through `report_op_error` and keep the last known good state).

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::Todo;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// ========================
// Command Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateTodoArgs<'a> {
    pub name: &'a str,
}

#[derive(Serialize)]
pub struct UpdateTodoArgs<'a> {
    pub id: u32,
    pub name: &'a str,
    pub done: bool,
}

#[derive(Serialize)]
pub struct IdArgs {
    pub id: u32,
}

// ========================
// Todo Commands
// ========================

pub async fn list_today_todos() -> Result<Vec<Todo>, String> {
    let result = invoke("list_today_todos", JsValue::NULL).await.map_err(js_err)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn list_recent_todos() -> Result<Vec<Todo>, String> {
    let result = invoke("list_recent_todos", JsValue::NULL).await.map_err(js_err)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_todo(args: &CreateTodoArgs<'_>) -> Result<Todo, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_todo", js_args).await.map_err(js_err)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_todo(args: &UpdateTodoArgs<'_>) -> Result<Todo, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("update_todo", js_args).await.map_err(js_err)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_todo(id: u32) -> Result<bool, String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let result = invoke("delete_todo", js_args).await.map_err(js_err)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Single reporting seam for failed backend calls. Failures are logged and
/// swallowed; the UI keeps whatever the last successful fetch produced.
pub fn report_op_error(op: &str, err: &str) {
    web_sys::console::error_1(&format!("[{}] {}", op, err).into());
}

fn js_err(e: JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{:?}", e))
}
