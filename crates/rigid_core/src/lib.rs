//! Provide the pure building blocks of the Rigid generator: symbol naming, resource records, and categories.
//!
//! Everything discovered in a project ends up as a [`ResourceRecord`] inside the [`CategorySet`] of its
//! [`Category`]. Records carry both the raw value (what the generated code compares against at runtime) and the
//! derived symbol name (what the generated code calls it).
//!
//! ## Notes
//!
//! - This is a “semantic core” crate: **no IO**, no global state, no markup or filesystem types.
//! - All functions here are deterministic and total; nothing in this crate returns an error.

pub mod category;
pub mod naming;
pub mod record;

pub use category::{Catalog, Category, CategorySet};
pub use naming::{assign_unique_names, sanitize_name, strip_qualifiers};
pub use record::{RecordKey, ResourceRecord};
