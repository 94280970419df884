//! Rigid Backend
//!
//! This module turns a scanned catalog into the generated declaration document and writes it to disk.
//!
//! The pipeline is:
//! 1. `Catalog` from the scanner → `DeclarationGenerator` → ordered emission units
//! 2. Units rendered at depth zero and concatenated
//! 3. `OutputWriter` writes `<destination>/Rigid.swift`
//!
//! ## Module Organization
//!
//! - `generator.rs` - Section order and the constant group of each category
//! - `templates.rs` - Per-platform companion extensions (UIKit / AppKit)
//! - `output.rs` - Destination directory handling and file write

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod generator;
pub mod output;
pub mod templates;

pub use generator::DeclarationGenerator;
pub use output::OutputWriter;
pub use templates::Platform;
