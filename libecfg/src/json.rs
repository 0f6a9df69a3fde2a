//! JSON encoding.
//!
//! Struct, List and Value serialize with their fields in declaration order,
//! so every object starts with `name`. Values keep their literal `data`.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::tree::Struct;

const INFALLIBLE: &str = "e.cfg trees always serialize to UTF-8 JSON";

/// Render a tree as JSON. `None` gives compact output, `Some(n)` indents
/// nested lines by `n` spaces.
pub fn encode_json(root: &Struct, indent: Option<usize>) -> String {
    match indent {
        None => serde_json::to_string(root).expect(INFALLIBLE),
        Some(width) => {
            let pad = " ".repeat(width);
            let formatter = PrettyFormatter::with_indent(pad.as_bytes());
            let mut ser = Serializer::with_formatter(Vec::new(), formatter);
            root.serialize(&mut ser).expect(INFALLIBLE);
            String::from_utf8(ser.into_inner()).expect(INFALLIBLE)
        }
    }
}
