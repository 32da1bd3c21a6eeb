//! # SuryaOptiAI Test Suite
//!
//! Unified test crate for flows that cross crate boundaries.
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── src/integration/
//! │   ├── flows.rs      # Key-driven navigation scenarios through App
//! │   ├── rendering.rs  # Full-screen renders driven by the resolved view
//! │   └── logging.rs    # Navigation events reach the log file
//! └── benches/
//!     └── navigation_benchmarks.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p surya-tests
//! cargo test -p surya-tests integration::flows
//! cargo bench -p surya-tests
//! ```

pub mod integration;
