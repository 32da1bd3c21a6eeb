//! Per-view renderers.
//!
//! Each renderer receives only the data its view needs: the resolved
//! [`SystemType`](surya_core::SystemType) where the view is parameterised by
//! it, plus the view's local state.

pub mod components;
pub mod dashboard;
pub mod devices;
pub mod energy;
pub mod history;
pub mod notifications;
pub mod selector;
pub mod settings;
