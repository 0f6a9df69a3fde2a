//! XML dump of the parse tree.
//!
//! One element per matched production (`struct`, `list`, `value`) and one per
//! named capture (`name`, `lists`, `items`, `values`, `type`, `data`), nested
//! the way the grammar matched them:
//!
//! ```text
//! <struct>
//!   <name>Root</name>
//!   <lists>
//!   </lists>
//!   <values>
//!     <value>
//!       <name>n</name>
//!       <type>int</type>
//!       <data>-5</data>
//!     </value>
//!   </values>
//! </struct>
//! ```

use crate::tree::{List, Struct};
use crate::value::Value;

struct XmlWriter {
    output: String,
    indent_level: usize,
}

impl XmlWriter {
    fn new() -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
        }
    }

    fn push_indent(&mut self, text: &str) {
        for _ in 0..self.indent_level {
            self.output.push_str("  ");
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn open(&mut self, tag: &str) {
        self.push_indent(&format!("<{}>", tag));
        self.indent_level += 1;
    }

    fn close(&mut self, tag: &str) {
        self.indent_level -= 1;
        self.push_indent(&format!("</{}>", tag));
    }

    fn leaf(&mut self, tag: &str, text: &str) {
        self.push_indent(&format!("<{}>{}</{}>", tag, escape_xml(text), tag));
    }

    fn write_struct(&mut self, s: &Struct) {
        self.open("struct");
        self.leaf("name", &s.name);
        self.open("lists");
        for l in &s.lists {
            self.write_list(l);
        }
        self.close("lists");
        self.write_values(&s.values);
        self.close("struct");
    }

    fn write_list(&mut self, l: &List) {
        self.open("list");
        self.leaf("name", &l.name);
        self.open("items");
        for item in &l.items {
            self.write_struct(item);
        }
        self.close("items");
        self.write_values(&l.values);
        self.close("list");
    }

    fn write_values(&mut self, values: &[Value]) {
        self.open("values");
        for v in values {
            self.open("value");
            self.leaf("name", &v.name);
            self.leaf("type", v.ty.keyword());
            self.leaf("data", &v.data);
            self.close("value");
        }
        self.close("values");
    }
}

/// Render a tree as an XML dump of its parse.
pub fn encode_xml(root: &Struct) -> String {
    let mut writer = XmlWriter::new();
    writer.write_struct(root);
    let mut output = writer.output;
    output.truncate(output.trim_end().len());
    output
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
