//! A parsed e.cfg document.

use std::str::FromStr;

use crate::error::{ParseContext, ParseError, Result};
use crate::tree::Struct;

/// Parses on construction; rendering never re-parses and never fails.
///
/// ```
/// use libecfg::ECfg;
///
/// let cfg = ECfg::new(r#"group "Root" struct { value "n" int: -5; }"#).unwrap();
/// assert_eq!(cfg.root().values[0].data, "-5");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ECfg {
    root: Struct,
}

impl ECfg {
    /// Parse `text` with the default context.
    pub fn new(text: &str) -> Result<Self> {
        Self::with_context(text, &ParseContext::default())
    }

    /// Parse `text` with a source name and nesting limit.
    pub fn with_context(text: &str, ctx: &ParseContext) -> Result<Self> {
        let root = crate::parse_with_context(text, ctx)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Struct {
        &self.root
    }

    pub fn into_root(self) -> Struct {
        self.root
    }

    /// e.cfg text with canonical indentation.
    pub fn text(&self) -> String {
        self.root.text()
    }

    /// XML dump of the parse tree.
    pub fn xml(&self) -> String {
        self.root.xml()
    }

    /// JSON; compact when `indent` is `None`.
    pub fn json(&self, indent: Option<usize>) -> String {
        self.root.json(indent)
    }
}

impl FromStr for ECfg {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl From<Struct> for ECfg {
    fn from(root: Struct) -> Self {
        Self { root }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"group "Root" struct { group "L" list { } value "n" int: -5; }"#;

    #[test]
    fn test_scenario() {
        let cfg: ECfg = SCENARIO.parse().unwrap();
        let root = cfg.root();
        assert_eq!(root.name, "Root");
        assert_eq!(root.lists.len(), 1);
        assert_eq!(root.lists[0].name, "L");
        assert!(root.lists[0].items.is_empty());
        assert!(root.lists[0].values.is_empty());
        assert_eq!(
            cfg.json(None),
            r#"{"name":"Root","lists":[{"name":"L","items":[],"values":[]}],"values":[{"name":"n","type":"int","data":"-5"}]}"#
        );
    }

    #[test]
    fn test_text_is_fixed_point() {
        let cfg = ECfg::new(SCENARIO).unwrap();
        let text = cfg.text();
        let again = ECfg::new(&text).unwrap();
        assert_eq!(again.root(), cfg.root());
        assert_eq!(again.text(), text);
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(matches!(ECfg::new(""), Err(ParseError::Empty(_))));
        assert!(matches!(ECfg::new("  \n\t "), Err(ParseError::Empty(_))));
    }

    #[test]
    fn test_filename_in_error() {
        let ctx = ParseContext::new(Some("e.cfg"));
        let err = ECfg::with_context("group \"R\" list { }", &ctx).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected \"struct\" but found \"list\" at 1:11 of <e.cfg>"
        );
    }

    #[test]
    fn test_into_root() {
        let root = ECfg::new(SCENARIO).unwrap().into_root();
        assert_eq!(ECfg::from(root.clone()).root(), &root);
    }
}
