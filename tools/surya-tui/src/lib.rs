//! Surya TUI: terminal console for SuryaOptiAI solar monitoring.
//!
//! ## Architecture
//!
//! ```text
//!  key event ──▶ App::on_key ──▶ view-local state
//!                     │
//!                     └──▶ NavAction ──▶ Navigator::apply
//!
//!  Navigator::view() ──▶ ui::render ──▶ renderer for that view
//! ```
//!
//! The binary in `main.rs` only sets up the terminal, logging and the event
//! loop; everything testable lives here.

pub mod app;
pub mod ui;

pub use app::{App, AppState, NotificationFocus, StateSnapshot};
