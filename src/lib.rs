#![forbid(unsafe_code)]
//! Rigid: strongly-typed resource identifiers
//!
//! Rigid scans an iOS/macOS project for images, nibs, storyboards and data models, extracts the identifiers they
//! carry, and generates a single `Rigid.swift` with one raw-value enum per kind of resource plus typed convenience
//! accessors.
//!
//! This crate provides the scanner (`scan`), the emission tree (`emit`), the declaration generator and writer
//! (`backend`), and the command-line front end (`cli`). Symbol naming and categories live in `rigid_core`; markup
//! parsing and attribute search live in `rigid_markup`.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Generated code**: The templates emit force-unwraps (`!`) and `as! T` casts as *string literals* in the
//!   generated Swift. These are output text, not operations performed by the generator.

pub mod backend;
pub mod cli;
pub mod emit;
pub mod scan;
pub mod version;

pub use backend::{DeclarationGenerator, OutputWriter};
pub use emit::EmitConfig;
pub use scan::{Project, ScanError};
pub use version::RIGID_VERSION;
