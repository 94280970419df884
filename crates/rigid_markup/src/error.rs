//! Errors raised while loading a markup document.
//!
//! None of these abort a scan: callers treat a failed document as one that contributes no identifiers.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum MarkupError {
    #[error("cannot read '{}'", path.display())]
    #[diagnostic(code(rigid::markup::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("markup is not valid UTF-8")]
    #[diagnostic(code(rigid::markup::encoding))]
    Encoding(#[from] std::str::Utf8Error),

    #[error("malformed markup at byte {position}")]
    #[diagnostic(code(rigid::markup::syntax))]
    Syntax {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("malformed attribute on <{element}>")]
    #[diagnostic(code(rigid::markup::attribute))]
    Attribute {
        element: String,
        #[source]
        source: quick_xml::events::attributes::AttrError,
    },

    #[error("markup has no root element")]
    #[diagnostic(
        code(rigid::markup::empty),
        help("the file is empty or contains only text, comments, or declarations")
    )]
    NoRootElement,
}
