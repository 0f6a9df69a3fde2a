//! Composite nodes: `struct` and `list` groups.

use std::fmt;

use serde::Serialize;

use crate::encode::{encode_json, encode_text, encode_xml};
use crate::value::Value;

/// A `group "<name>" struct { ... }` block.
///
/// In source text every list is declared before every value; the parser
/// enforces that, the fields do not.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Struct {
    pub name: String,
    pub lists: Vec<List>,
    pub values: Vec<Value>,
}

/// A `group "<name>" list { ... }` block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct List {
    pub name: String,
    pub items: Vec<Struct>,
    pub values: Vec<Value>,
}

impl Struct {
    pub fn new(name: impl Into<String>, lists: Vec<List>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            lists,
            values,
        }
    }

    /// First list child with the given name.
    pub fn list(&self, name: &str) -> Option<&List> {
        self.lists.iter().find(|l| l.name == name)
    }

    /// First value child with the given name.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.iter().find(|v| v.name == name)
    }

    /// Render as e.cfg text.
    pub fn text(&self) -> String {
        encode_text(self)
    }

    /// Render as an XML dump of the parse tree.
    pub fn xml(&self) -> String {
        encode_xml(self)
    }

    /// Render as JSON; compact when `indent` is `None`.
    pub fn json(&self, indent: Option<usize>) -> String {
        encode_json(self, indent)
    }
}

impl List {
    pub fn new(name: impl Into<String>, items: Vec<Struct>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            items,
            values,
        }
    }

    /// First value child with the given name.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.iter().find(|v| v.name == name)
    }
}

impl fmt::Display for Struct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Struct(name={:?}, lists=[{}], values=[{}])",
            self.name,
            self.lists.len(),
            self.values.len()
        )
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "List(name={:?}, items=[{}], values=[{}])",
            self.name,
            self.items.len(),
            self.values.len()
        )
    }
}
