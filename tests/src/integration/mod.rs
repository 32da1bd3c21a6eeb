//! Cross-crate integration tests.

mod flows;
mod logging;
mod rendering;
