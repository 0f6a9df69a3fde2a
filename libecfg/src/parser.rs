//! Phase 2: Group Parser
//!
//! The group parser walks the token stream with three mutually recursive
//! productions and builds the tree as it goes:
//!
//! ```text
//! Struct := 'group' Str 'struct' '{' List* Value* '}'
//! List   := 'group' Str 'list'   '{' Struct* Value* '}'
//! Value  := 'value' Str Type ':' Literal ';'
//! ```
//!
//! Inside a block all nested groups come before all values. Each function
//! takes the index of its first token and returns the index after its last.

use log::trace;

use crate::error::{Location, ParseContext, ParseError, Result};
use crate::scanner::{ScanResult, Token, TokenType};
use crate::tree::{List, Struct};
use crate::value::{Value, ValueType};

/// Token stream plus what is needed to report errors against it.
struct Input<'a> {
    tokens: &'a [Token],
    ctx: &'a ParseContext,
    end: Location,
}

impl<'a> Input<'a> {
    fn get(&self, i: usize) -> Option<&'a Token> {
        self.tokens.get(i)
    }

    fn loc(&self, t: &Token) -> Location {
        self.ctx.at(t.offset, t.line_num, t.col)
    }

    /// Fetch token `i`, failing with "expected ..." at end of input.
    fn require(&self, i: usize, expected: &str) -> Result<&'a Token> {
        self.get(i).ok_or_else(|| ParseError::UnexpectedEnd {
            expected: expected.to_string(),
            at: self.end.clone(),
        })
    }

    fn mismatch(&self, t: &Token, expected: &str) -> ParseError {
        ParseError::Expected {
            expected: expected.to_string(),
            found: t.describe(),
            at: self.loc(t),
        }
    }

    fn expect_word(&self, i: usize, word: &str) -> Result<usize> {
        let expected = format!("\"{}\"", word);
        let t = self.require(i, &expected)?;
        if t.is_word(word) {
            Ok(i + 1)
        } else {
            Err(self.mismatch(t, &expected))
        }
    }

    fn expect(&self, i: usize, typ: TokenType, expected: &str) -> Result<(&'a Token, usize)> {
        let t = self.require(i, expected)?;
        if t.typ == typ {
            Ok((t, i + 1))
        } else {
            Err(self.mismatch(t, expected))
        }
    }

    fn is_word_at(&self, i: usize, word: &str) -> bool {
        self.get(i).is_some_and(|t| t.is_word(word))
    }
}

/// Parse a whole document: exactly one struct and nothing after it.
pub fn parse_document(scanned: &ScanResult, ctx: &ParseContext) -> Result<Struct> {
    let end = ctx.at(scanned.end_offset, scanned.end_line, scanned.end_col);
    if scanned.tokens.is_empty() {
        return Err(ParseError::Empty(ctx.at(0, 0, 0)));
    }

    let input = Input {
        tokens: &scanned.tokens,
        ctx,
        end,
    };
    let (root, next) = parse_struct(&input, 0, 1)?;

    if let Some(t) = input.get(next) {
        return Err(ParseError::ExtraContent(input.loc(t)));
    }
    Ok(root)
}

/// Enforce the nesting limit for a group starting at token `i`.
fn check_depth(input: &Input<'_>, i: usize, depth: usize) -> Result<()> {
    if depth > input.ctx.max_depth {
        let at = match input.get(i) {
            Some(t) => input.loc(t),
            None => input.end.clone(),
        };
        return Err(ParseError::TooDeep {
            limit: input.ctx.max_depth,
            at,
        });
    }
    Ok(())
}

/// Parse `group "<name>" <kind> {`, returning the name and the index after
/// the brace.
fn parse_group_header(input: &Input<'_>, i: usize, kind: &str) -> Result<(String, usize)> {
    let i = input.expect_word(i, "group")?;
    let (name, i) = input.expect(i, TokenType::Str, "quoted name")?;
    let i = input.expect_word(i, kind)?;
    let (_, i) = input.expect(i, TokenType::LBrace, "\"{\"")?;
    Ok((name.text.clone(), i))
}

/// Parse the values at the tail of a block, then its closing brace.
fn parse_block_tail(
    input: &Input<'_>,
    mut i: usize,
    block: &'static str,
) -> Result<(Vec<Value>, usize)> {
    let mut values = Vec::new();
    while input.is_word_at(i, "value") {
        let (value, next) = parse_value(input, i)?;
        values.push(value);
        i = next;
    }

    if !values.is_empty() && input.is_word_at(i, "group") {
        let t = &input.tokens[i];
        return Err(ParseError::OutOfOrder {
            found: "group",
            block,
            at: input.loc(t),
        });
    }

    let expected = if values.is_empty() {
        "\"group\", \"value\" or \"}\""
    } else {
        "\"value\" or \"}\""
    };
    let (_, i) = input.expect(i, TokenType::RBrace, expected)?;
    Ok((values, i))
}

/// Parse a `struct` group.
fn parse_struct(input: &Input<'_>, i: usize, depth: usize) -> Result<(Struct, usize)> {
    check_depth(input, i, depth)?;
    let (name, mut i) = parse_group_header(input, i, "struct")?;

    let mut lists = Vec::new();
    while input.is_word_at(i, "group") {
        let (list, next) = parse_list(input, i, depth + 1)?;
        lists.push(list);
        i = next;
    }

    let (values, i) = parse_block_tail(input, i, "struct")?;
    trace!(
        "struct {:?}: {} lists, {} values",
        name,
        lists.len(),
        values.len()
    );
    Ok((Struct { name, lists, values }, i))
}

/// Parse a `list` group.
fn parse_list(input: &Input<'_>, i: usize, depth: usize) -> Result<(List, usize)> {
    check_depth(input, i, depth)?;
    let (name, mut i) = parse_group_header(input, i, "list")?;

    let mut items = Vec::new();
    while input.is_word_at(i, "group") {
        let (item, next) = parse_struct(input, i, depth + 1)?;
        items.push(item);
        i = next;
    }

    let (values, i) = parse_block_tail(input, i, "list")?;
    trace!(
        "list {:?}: {} items, {} values",
        name,
        items.len(),
        values.len()
    );
    Ok((List { name, items, values }, i))
}

/// Parse `value "<name>" <type>: <literal>;`.
fn parse_value(input: &Input<'_>, i: usize) -> Result<(Value, usize)> {
    let i = input.expect_word(i, "value")?;
    let (name, i) = input.expect(i, TokenType::Str, "quoted name")?;

    let (keyword, i) = input.expect(i, TokenType::Word, "value type")?;
    let ty = ValueType::from_keyword(&keyword.text)
        .ok_or_else(|| ParseError::UnknownType(keyword.text.clone(), input.loc(keyword)))?;

    let (_, i) = input.expect(i, TokenType::Colon, "\":\"")?;
    let literal = input.require(i, &format!("{} literal", ty))?;
    check_literal(input, ty, literal)?;
    let (_, i) = input.expect(i + 1, TokenType::Semicolon, "\";\"")?;

    Ok((
        Value {
            name: name.text.clone(),
            ty,
            data: literal.text.clone(),
        },
        i,
    ))
}

/// Check a literal token against the shape its type requires.
fn check_literal(input: &Input<'_>, ty: ValueType, t: &Token) -> Result<()> {
    let ok = match t.typ {
        TokenType::Str => ty == ValueType::String,
        TokenType::Number if ty.is_unsigned() => t.text.bytes().all(|b| b.is_ascii_digit()),
        TokenType::Number if ty.is_decimal() => t.text.contains('.'),
        TokenType::Number => ty == ValueType::Int && !t.text.contains('.'),
        _ => false,
    };
    if ok {
        Ok(())
    } else {
        Err(ParseError::BadLiteral {
            ty,
            found: t.describe(),
            at: input.loc(t),
        })
    }
}
