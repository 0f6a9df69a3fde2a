//! Encode e.cfg trees to the supported output formats.
//!
//! Text re-creates the source format, JSON mirrors the tree, and XML dumps
//! the parse tree. All three are pure functions of the tree.

use crate::tree::{List, Struct};
use crate::value::{Value, ValueType};

pub use crate::json::encode_json;
pub use crate::xml::encode_xml;

/// Output format for encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// e.cfg text (canonical indentation)
    Text,
    /// XML dump of the parse tree
    Xml,
    /// JSON, pretty-printed with two spaces
    Json,
}

/// Encode a tree to a string in the specified format.
pub fn encode(root: &Struct, format: Format) -> String {
    match format {
        Format::Text => encode_text(root),
        Format::Xml => encode_xml(root),
        Format::Json => encode_json(root, Some(2)),
    }
}

// =============================================================================
// Text Encoder
// =============================================================================

const INDENT: &str = "    ";

/// Render a struct as e.cfg text.
///
/// Nested groups are joined by newlines and indented four spaces per level;
/// the value lines follow on the next line. An empty group renders as `{`,
/// an empty line, `}`.
pub fn encode_text(root: &Struct) -> String {
    encode_text_struct(root)
}

fn encode_text_struct(s: &Struct) -> String {
    let lists: Vec<String> = s.lists.iter().map(encode_text_list).collect();
    encode_text_group(&s.name, "struct", &lists, &s.values)
}

fn encode_text_list(l: &List) -> String {
    let items: Vec<String> = l.items.iter().map(encode_text_struct).collect();
    encode_text_group(&l.name, "list", &items, &l.values)
}

fn encode_text_group(name: &str, kind: &str, groups: &[String], values: &[Value]) -> String {
    let groups = indent(&groups.join("\n"));

    let values: Vec<String> = values.iter().map(encode_text_value).collect();
    let mut values = indent(&values.join("\n"));
    // Values start on the line after the last group; no blank line between.
    if !values.is_empty() && !groups.is_empty() {
        values.insert(0, '\n');
    }

    format!(
        "group {} {} {{\n{}{}\n}}",
        encode_text_string(name),
        kind,
        groups,
        values
    )
}

fn encode_text_value(v: &Value) -> String {
    let data = match v.ty {
        ValueType::String => encode_text_string(&v.data),
        _ => v.data.clone(),
    };
    format!("value {} {}: {};", encode_text_string(&v.name), v.ty, data)
}

/// Quote a string, doubling embedded quotes.
fn encode_text_string(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Prefix every line, empty ones included, with one indent level.
fn indent(text: &str) -> String {
    text.split_inclusive('\n')
        .map(|line| format!("{}{}", INDENT, line))
        .collect()
}
