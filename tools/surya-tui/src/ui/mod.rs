//! UI module - TUI rendering components.
//!
//! - `layout.rs`: header, body, navigation bar and footer
//! - `views/`: one renderer per [`View`](surya_core::View)
//! - `widgets/`: reusable pieces (help overlay, panel blocks)
//! - `format.rs`: number and bar formatting helpers

mod format;
mod layout;

pub mod views;
pub mod widgets;

pub use format::{format_idr, format_number, progress_bar};
pub use layout::render;
