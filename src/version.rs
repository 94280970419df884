//! Rigid version information.
//!
//! The CLI (`--version`) and the comment header of the generated document both read this constant.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The Rigid version string (for example, `1.0.0`).
pub const RIGID_VERSION: &str = env!("CARGO_PKG_VERSION");
