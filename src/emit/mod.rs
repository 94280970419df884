//! Emission tree for the generated declaration document
//!
//! The document is built as a list of root [`Unit`]s and rendered once. Each unit knows how to render itself at a
//! given indentation depth; block units hand their children `depth + indent_width`.
//!
//! ## Module Organization
//!
//! - `config.rs` - `EmitConfig` (indent width, platform condition, file name)
//! - `writer.rs` - `EmitWriter`, the indentation-aware string builder every unit renders into
//! - `unit.rs` - the `Unit` enum plus lines, comment headers and conditionals
//! - `method.rs` - member declarations and their arguments
//! - `group.rs` - constant groups (raw-value enums) and extensions

mod config;
mod group;
mod method;
mod unit;
mod writer;

pub use config::{DEFAULT_DESCRIPTION, DEFAULT_FILE_NAME, DEFAULT_PLATFORM_CONDITION, EmitConfig};
pub use group::{ConstantGroup, Extension, Member};
pub use method::{Argument, Method, MethodKind};
pub use unit::{CommentHeader, Conditional, Line, Unit};
pub use writer::EmitWriter;

/// Render root units at depth zero and concatenate them in order.
pub fn render_document(units: &[Unit], config: &EmitConfig) -> String {
    units.iter().map(|unit| unit.render(0, config)).collect()
}
