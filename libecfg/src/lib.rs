//! Enlightenment e.cfg parser implementation.
//!
//! e.cfg is the brace-delimited text form of Enlightenment's configuration
//! store: nested `struct` and `list` groups holding typed `value` lines.
//!
//! # Parsing Pipeline
//!
//! The parser operates in two phases:
//!
//! 1. **Scanner**: Converts source text into tokens, unquoting strings and
//!    checking the shape of numeric literals.
//!
//! 2. **Group Parser**: Recursively parses the token stream into a
//!    [`Struct`] tree, enforcing group order and literal types.
//!
//! The tree renders back to e.cfg text, to JSON, or to an XML dump of the
//! parse.

mod decimal;
mod document;
mod encode;
mod error;
mod json;
mod parser;
mod scanner;
mod tree;
mod value;
mod xml;

pub use decimal::{Decimal, ParseDecimalError};
pub use document::ECfg;
pub use encode::{encode, encode_json, encode_text, encode_xml, Format};
pub use error::{DecodeError, Location, ParseContext, ParseError, Result, DEFAULT_MAX_DEPTH};
pub use tree::{List, Struct};
pub use value::{Decoded, UnknownValueType, Value, ValueType};

use log::debug;

/// Parse an e.cfg document from a string.
///
/// # Example
///
/// ```
/// use libecfg::parse;
///
/// let root = parse(r#"group "Root" struct { }"#).unwrap();
/// assert_eq!(root.name, "Root");
/// ```
pub fn parse(input: &str) -> Result<Struct> {
    parse_with_context(input, &ParseContext::default())
}

/// Parse an e.cfg document from a string with a filename for error messages.
pub fn parse_with_filename(input: &str, filename: Option<&str>) -> Result<Struct> {
    parse_with_context(input, &ParseContext::new(filename))
}

/// Parse an e.cfg document with an explicit context.
pub fn parse_with_context(input: &str, ctx: &ParseContext) -> Result<Struct> {
    // Phase 1: Scan source into tokens
    let scanned = scanner::scan(input, ctx)?;
    debug!(
        "scanned {} tokens from {}",
        scanned.tokens.len(),
        ctx.filename.as_deref().unwrap_or("<input>")
    );

    // Phase 2: Parse tokens into a tree
    let root = parser::parse_document(&scanned, ctx)?;
    debug!("parsed {}", root);
    Ok(root)
}
