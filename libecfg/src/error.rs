//! Error types for e.cfg parsing and value decoding.

use std::fmt;

use thiserror::Error;

use crate::value::ValueType;

/// Result type for e.cfg parsing operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Default limit on `group` nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Parse context carrying the source name and nesting limit.
#[derive(Clone, Debug)]
pub struct ParseContext {
    pub filename: Option<String>,
    pub max_depth: usize,
}

impl ParseContext {
    /// Create a new parse context.
    pub fn new(filename: Option<&str>) -> Self {
        Self {
            filename: filename.map(String::from),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Replace the nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Build a location for an error at the given source position.
    pub fn at(&self, offset: usize, line: usize, column: usize) -> Location {
        Location {
            offset,
            line,
            column,
            filename: self.filename.clone(),
        }
    }
}

impl Default for ParseContext {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Position of an error in the source text.
///
/// `line` and `column` are zero-based and count characters; they are shown
/// one-based.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    pub filename: Option<String>,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)?;
        if let Some(name) = &self.filename {
            write!(f, " of <{}>", name)?;
        }
        Ok(())
    }
}

/// Error type for e.cfg parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input has no tokens at all.
    #[error("Empty document at {0}")]
    Empty(Location),

    /// Character that starts no token.
    #[error("Unexpected character \"{0}\" at {1}")]
    UnexpectedChar(char, Location),

    /// Quoted string without its closing quote on the same line.
    #[error("Unterminated string at {0}")]
    UnterminatedString(Location),

    /// Malformed numeric literal.
    #[error("Invalid number \"{0}\" at {1}")]
    InvalidNumber(String, Location),

    /// Token other than the one the grammar requires.
    #[error("Expected {expected} but found {found} at {at}")]
    Expected {
        expected: String,
        found: String,
        at: Location,
    },

    /// Input ended inside a block.
    #[error("Unexpected end of input, expected {expected} at {at}")]
    UnexpectedEnd { expected: String, at: Location },

    /// Type keyword outside the closed set.
    #[error("Unknown value type \"{0}\" at {1}")]
    UnknownType(String, Location),

    /// Literal whose shape does not match its declared type.
    #[error("Invalid {ty} literal {found} at {at}")]
    BadLiteral {
        ty: ValueType,
        found: String,
        at: Location,
    },

    /// A nested group declared after the block's values.
    #[error("Unexpected {found} after values in {block} at {at}")]
    OutOfOrder {
        found: &'static str,
        block: &'static str,
        at: Location,
    },

    /// Text left over after the root struct.
    #[error("Unexpected extra content at {0}")]
    ExtraContent(Location),

    /// Groups nested past the configured limit.
    #[error("Nesting deeper than {limit} levels at {at}")]
    TooDeep { limit: usize, at: Location },
}

impl ParseError {
    /// Where in the source the error was detected.
    pub fn location(&self) -> &Location {
        match self {
            ParseError::Empty(at)
            | ParseError::UnexpectedChar(_, at)
            | ParseError::UnterminatedString(at)
            | ParseError::InvalidNumber(_, at)
            | ParseError::Expected { at, .. }
            | ParseError::UnexpectedEnd { at, .. }
            | ParseError::UnknownType(_, at)
            | ParseError::BadLiteral { at, .. }
            | ParseError::OutOfOrder { at, .. }
            | ParseError::ExtraContent(at)
            | ParseError::TooDeep { at, .. } => at,
        }
    }
}

/// Error raised when a value's data cannot be read as its declared type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// `uchar`/`uint` data with a sign or non-digit characters.
    #[error("Invalid {ty} data \"{data}\": expected unsigned digits")]
    NotUnsigned { ty: ValueType, data: String },

    /// `int` data that is not an optionally negative run of digits.
    #[error("Invalid {ty} data \"{data}\": expected an integer")]
    NotInteger { ty: ValueType, data: String },

    /// `float`/`double` data without exactly one decimal point.
    #[error("Invalid {ty} data \"{data}\": expected a decimal")]
    NotDecimal { ty: ValueType, data: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_display() {
        let ctx = ParseContext::new(None);
        assert_eq!(ctx.at(0, 0, 0).to_string(), "1:1");
        let ctx = ParseContext::new(Some("e.cfg"));
        assert_eq!(ctx.at(12, 2, 4).to_string(), "3:5 of <e.cfg>");
    }

    #[test]
    fn test_error_message_and_location() {
        let ctx = ParseContext::default();
        let err = ParseError::UnterminatedString(ctx.at(7, 1, 3));
        assert_eq!(err.to_string(), "Unterminated string at 2:4");
        assert_eq!(err.location().offset, 7);
    }

    #[test]
    fn test_with_max_depth() {
        let ctx = ParseContext::new(Some("x")).with_max_depth(3);
        assert_eq!(ctx.max_depth, 3);
        assert_eq!(ctx.filename.as_deref(), Some("x"));
        assert_eq!(ParseContext::default().max_depth, DEFAULT_MAX_DEPTH);
    }
}
