//! Shared Dioxus components and D3.js bridge for the tree charts.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for D3.js chart functions via `js_sys::eval()`
//! - `fetch`: the browser `TreeSource` backed by the fetch API
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (pickers, containers, etc.)

pub mod components;
pub mod fetch;
pub mod js_bridge;
pub mod state;
