//! Phase 1: Scanner
//!
//! The scanner converts raw source text into a flat token stream. It:
//! - skips whitespace, which is insignificant everywhere between tokens
//! - unquotes strings, turning a doubled `""` into one `"`
//! - checks numeric literals against `-?digits(.digits)?`
//! - records where each token starts, for error reporting

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::{ParseContext, ParseError, Result};

/// Token type in the scanner output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    /// Bare keyword: `group`, `struct`, `list`, `value` or a type name.
    Word,
    /// Quoted string, `text` holds the unescaped content.
    Str,
    /// Numeric literal, `text` holds it verbatim.
    Number,
    LBrace,
    RBrace,
    Colon,
    Semicolon,
}

/// A single token in the token stream.
#[derive(Debug, Clone)]
pub struct Token {
    pub typ: TokenType,
    pub text: String,
    pub offset: usize,
    pub line_num: usize,
    pub col: usize,
}

impl Token {
    /// Short description for "found ..." in error messages.
    pub fn describe(&self) -> String {
        match self.typ {
            TokenType::Word => format!("\"{}\"", self.text),
            TokenType::Str => format!("string \"{}\"", self.text),
            TokenType::Number => format!("number {}", self.text),
            TokenType::LBrace => "\"{\"".to_string(),
            TokenType::RBrace => "\"}\"".to_string(),
            TokenType::Colon => "\":\"".to_string(),
            TokenType::Semicolon => "\";\"".to_string(),
        }
    }

    /// Whether this is the bare word `word`.
    pub fn is_word(&self, word: &str) -> bool {
        self.typ == TokenType::Word && self.text == word
    }
}

/// Result of scanning including the end-of-input position.
#[derive(Debug)]
pub struct ScanResult {
    pub tokens: Vec<Token>,
    pub end_offset: usize,
    pub end_line: usize,
    pub end_col: usize,
}

struct Cursor<'a> {
    chars: Peekable<CharIndices<'a>>,
    len: usize,
    line: usize,
    col: usize,
}

impl Cursor<'_> {
    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn offset(&mut self) -> usize {
        let len = self.len;
        self.chars.peek().map_or(len, |&(i, _)| i)
    }

    fn bump(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        Some(c)
    }
}

/// Scan source text into tokens.
pub fn scan(source: &str, ctx: &ParseContext) -> Result<ScanResult> {
    let mut cur = Cursor {
        chars: source.char_indices().peekable(),
        len: source.len(),
        line: 0,
        col: 0,
    };
    let mut tokens = Vec::new();

    while let Some(c) = cur.peek() {
        if c.is_whitespace() {
            cur.bump();
            continue;
        }

        let (offset, line_num, col) = (cur.offset(), cur.line, cur.col);
        let (typ, text) = match c {
            '{' | '}' | ':' | ';' => {
                cur.bump();
                let typ = match c {
                    '{' => TokenType::LBrace,
                    '}' => TokenType::RBrace,
                    ':' => TokenType::Colon,
                    _ => TokenType::Semicolon,
                };
                (typ, c.to_string())
            }
            '"' => (TokenType::Str, scan_string(&mut cur, ctx)?),
            '-' | '0'..='9' => (TokenType::Number, scan_number(&mut cur, ctx)?),
            c if is_word_start(c) => (TokenType::Word, scan_word(&mut cur)),
            c => {
                return Err(ParseError::UnexpectedChar(c, ctx.at(offset, line_num, col)));
            }
        };

        tokens.push(Token {
            typ,
            text,
            offset,
            line_num,
            col,
        });
    }

    Ok(ScanResult {
        tokens,
        end_offset: source.len(),
        end_line: cur.line,
        end_col: cur.col,
    })
}

fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn scan_word(cur: &mut Cursor<'_>) -> String {
    let mut word = String::new();
    while let Some(c) = cur.peek().filter(|&c| is_word_char(c)) {
        word.push(c);
        cur.bump();
    }
    word
}

/// Scan a quoted string. A doubled quote stands for one literal quote; a
/// string may not span lines.
fn scan_string(cur: &mut Cursor<'_>, ctx: &ParseContext) -> Result<String> {
    let start = ctx.at(cur.offset(), cur.line, cur.col);
    cur.bump();

    let mut content = String::new();
    loop {
        match cur.bump() {
            Some('"') => {
                if cur.peek() == Some('"') {
                    cur.bump();
                    content.push('"');
                } else {
                    return Ok(content);
                }
            }
            Some('\n') | None => return Err(ParseError::UnterminatedString(start)),
            Some(c) => content.push(c),
        }
    }
}

/// Scan `-?digits(.digits)?`. The literal must end at a delimiter.
fn scan_number(cur: &mut Cursor<'_>, ctx: &ParseContext) -> Result<String> {
    let start = ctx.at(cur.offset(), cur.line, cur.col);
    let mut text = String::new();
    let mut valid = true;

    if cur.peek() == Some('-') {
        text.push('-');
        cur.bump();
    }
    valid &= take_digits(cur, &mut text) > 0;

    if cur.peek() == Some('.') {
        text.push('.');
        cur.bump();
        valid &= take_digits(cur, &mut text) > 0;
    }

    // Swallow the rest of a run like `12ab` or `1.2.3` so the error shows it.
    while let Some(c) = cur.peek().filter(|&c| is_word_char(c) || c == '.' || c == '-') {
        valid = false;
        text.push(c);
        cur.bump();
    }

    if valid {
        Ok(text)
    } else {
        Err(ParseError::InvalidNumber(text, start))
    }
}

fn take_digits(cur: &mut Cursor<'_>, text: &mut String) -> usize {
    let mut count = 0;
    while let Some(c) = cur.peek().filter(char::is_ascii_digit) {
        text.push(c);
        cur.bump();
        count += 1;
    }
    count
}
