//! Markup documents and declarative attribute search for the Rigid generator.
//!
//! Interface-layout and data-model files are XML. This crate parses them leniently into a small element tree
//! ([`Document`]) and finds attribute values through a table of declarative patterns ([`PatternTable`]), so callers
//! never write per-category traversal code.
//!
//! ## Notes
//! - This crate knows nothing about resource categories or symbol names; callers supply the category key type and a
//!   transform that turns matched values into whatever they collect.
//! - A document that fails to parse yields no results; it is never fatal.
//!
//! ## Examples
//! ```rust
//! use rigid_markup::{Document, PatternTable, SearchPattern, search};
//!
//! let doc = Document::parse(br#"<document><scene><viewController storyboardIdentifier="Home"/></scene></document>"#)
//!     .unwrap();
//! let patterns = PatternTable::new().with("screens", SearchPattern::any("storyboardIdentifier"));
//! let results = search(&doc, &patterns, |_, value| value.to_string());
//! assert!(results.get(&"screens").unwrap().contains("Home"));
//! ```

pub mod document;
pub mod error;
pub mod search;

pub use document::{Document, Element};
pub use error::MarkupError;
pub use search::{ElementMatch, PatternTable, SearchPattern, SearchResults, search, search_file};
