//! Strict parser for JSON-like data literals: objects and arrays with
//! unquoted keys, single-, double- or backtick-quoted strings, numbers,
//! booleans and null, with trailing commas and comments tolerated. This is a
//! data grammar only; nothing here evaluates code.

use crate::utils::error::{HelperError, Result};
use serde_json::{Map, Number, Value};

pub struct LiteralParser {
    chars: Vec<char>,
    pos: usize,
}

/// Parses a single data literal from the front of `input`. Anything after
/// the literal (a trailing semicolon, further declarations) is ignored.
pub fn parse_literal(input: &str) -> Result<Value> {
    LiteralParser::new(input).parse_value()
}

impl LiteralParser {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    pub fn parse_value(&mut self) -> Result<Value> {
        self.skip_trivia();
        self.parse_value_inner()
    }

    fn parse_value_inner(&mut self) -> Result<Value> {
        match self.peek() {
            Some('{') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some(q @ ('"' | '\'')) => self.parse_quoted_string(q).map(Value::String),
            Some('`') => self.parse_template_string().map(Value::String),
            Some(c) if c == '-' || c == '+' || c == '.' || c.is_ascii_digit() => {
                self.parse_number()
            }
            Some(c) if is_ident_start(c) => self.parse_word(),
            Some(c) => Err(self.error(format!("unexpected character `{}`", c))),
            None => Err(self.error("unexpected end of input".into())),
        }
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.expect('{')?;
        let mut map = Map::new();
        loop {
            self.skip_trivia();
            if self.eat('}') {
                break;
            }
            let key = self.parse_key()?;
            self.skip_trivia();
            self.expect(':')?;
            self.skip_trivia();
            let value = self.parse_value_inner()?;
            map.insert(key, value);
            self.skip_trivia();
            if self.eat(',') {
                continue;
            }
            self.expect('}')?;
            break;
        }
        Ok(Value::Object(map))
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.expect('[')?;
        let mut items = Vec::new();
        loop {
            self.skip_trivia();
            if self.eat(']') {
                break;
            }
            items.push(self.parse_value_inner()?);
            self.skip_trivia();
            if self.eat(',') {
                continue;
            }
            self.expect(']')?;
            break;
        }
        Ok(Value::Array(items))
    }

    fn parse_key(&mut self) -> Result<String> {
        match self.peek() {
            Some(q @ ('"' | '\'')) => self.parse_quoted_string(q),
            Some(c) if is_ident_start(c) => {
                let mut key = String::new();
                while let Some(c) = self.peek() {
                    if is_ident_continue(c) {
                        key.push(c);
                        self.bump();
                    } else {
                        break;
                    }
                }
                Ok(key)
            }
            Some(c) => Err(self.error(format!("expected object key, found `{}`", c))),
            None => Err(self.error("unexpected end of input in object".into())),
        }
    }

    fn parse_quoted_string(&mut self, quote: char) -> Result<String> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                Some(c) if c == quote => return Ok(out),
                Some('\\') => out.push(self.parse_escape()?),
                Some('\n') | None => return Err(self.error("unterminated string".into())),
                Some(c) => out.push(c),
            }
        }
    }

    fn parse_template_string(&mut self) -> Result<String> {
        self.bump();
        let mut out = String::new();
        loop {
            match self.bump() {
                Some('`') => return Ok(out),
                Some('\\') => out.push(self.parse_escape()?),
                None => return Err(self.error("unterminated template string".into())),
                // `${` has no meaning in a data literal and passes through.
                Some(c) => out.push(c),
            }
        }
    }

    fn parse_escape(&mut self) -> Result<char> {
        match self.bump() {
            Some('n') => Ok('\n'),
            Some('t') => Ok('\t'),
            Some('r') => Ok('\r'),
            Some('b') => Ok('\u{0008}'),
            Some('f') => Ok('\u{000C}'),
            Some('v') => Ok('\u{000B}'),
            Some('0') => Ok('\0'),
            Some('u') => self.parse_unicode_escape(),
            Some('x') => {
                let code = self.parse_hex_digits(2)?;
                char::from_u32(code).ok_or_else(|| self.error("invalid \\x escape".into()))
            }
            // An escaped ordinary character stands for itself.
            Some(c) => Ok(c),
            None => Err(self.error("unterminated escape sequence".into())),
        }
    }

    fn parse_unicode_escape(&mut self) -> Result<char> {
        let unit = self.parse_hex_digits(4)?;
        // Surrogate pairs arrive as two consecutive \uXXXX escapes.
        if (0xD800..=0xDBFF).contains(&unit) {
            if self.eat('\\') && self.eat('u') {
                let low = self.parse_hex_digits(4)?;
                if (0xDC00..=0xDFFF).contains(&low) {
                    let combined = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                    return char::from_u32(combined)
                        .ok_or_else(|| self.error("invalid surrogate pair".into()));
                }
            }
            return Err(self.error("unpaired surrogate in \\u escape".into()));
        }
        char::from_u32(unit).ok_or_else(|| self.error("invalid \\u escape".into()))
    }

    fn parse_hex_digits(&mut self, count: usize) -> Result<u32> {
        let mut value = 0u32;
        for _ in 0..count {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error("invalid hex digit in escape".into()))?;
            value = value * 16 + digit;
        }
        Ok(value)
    }

    fn parse_number(&mut self) -> Result<Value> {
        let start = self.pos;
        let mut raw = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E') {
                raw.push(c);
                self.bump();
            } else {
                break;
            }
        }
        if let Ok(n) = raw.parse::<i64>() {
            return Ok(Value::Number(n.into()));
        }
        raw.parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| {
                HelperError::Parse {
                    message: format!("invalid number `{}` at position {}", raw, start),
                }
            })
    }

    fn parse_word(&mut self) -> Result<Value> {
        let start = self.pos;
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                word.push(c);
                self.bump();
            } else {
                break;
            }
        }
        match word.as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            "null" => Ok(Value::Null),
            _ => Err(HelperError::Parse {
                message: format!("`{}` is not a data literal (position {})", word, start),
            }),
        }
    }

    fn skip_trivia(&mut self) {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.bump();
            }
            if self.peek() == Some('/') && self.peek_at(1) == Some('/') {
                while !matches!(self.peek(), Some('\n') | None) {
                    self.bump();
                }
            } else if self.peek() == Some('/') && self.peek_at(1) == Some('*') {
                self.bump();
                self.bump();
                while self.pos < self.chars.len() {
                    if self.peek() == Some('*') && self.peek_at(1) == Some('/') {
                        self.bump();
                        self.bump();
                        break;
                    }
                    self.bump();
                }
            } else {
                break;
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.error(match self.peek() {
                Some(c) => format!("expected `{}`, found `{}`", expected, c),
                None => format!("expected `{}`, found end of input", expected),
            }))
        }
    }

    fn error(&self, message: String) -> HelperError {
        HelperError::Parse {
            message: format!("{} at position {}", message, self.pos),
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_plain_json() {
        let value = parse_literal(r#"{"a": 1, "b": [true, null, "x"]}"#).unwrap();
        assert_eq!(value, json!({"a": 1, "b": [true, null, "x"]}));
    }

    #[test]
    fn test_parse_unquoted_keys_and_trailing_commas() {
        let value = parse_literal("{ id: 3, tags: ['a', 'b',], nested: { ok: true, }, }").unwrap();
        assert_eq!(value, json!({"id": 3, "tags": ["a", "b"], "nested": {"ok": true}}));
    }

    #[test]
    fn test_parse_template_string_keeps_newlines() {
        let value = parse_literal("`line1\nline2 \\` tick`").unwrap();
        assert_eq!(value, json!("line1\nline2 ` tick"));
    }

    #[test]
    fn test_parse_interpolation_is_plain_text() {
        let value = parse_literal("`hello ${name}`").unwrap();
        assert_eq!(value, json!("hello ${name}"));
    }

    #[test]
    fn test_parse_numbers() {
        assert_eq!(parse_literal("-42").unwrap(), json!(-42));
        assert_eq!(parse_literal("3.5").unwrap(), json!(3.5));
        assert_eq!(parse_literal("1e3").unwrap(), json!(1000.0));
        assert!(parse_literal("1.2.3").is_err());
    }

    #[test]
    fn test_parse_string_escapes() {
        assert_eq!(parse_literal(r#""a\nb\t\"c\"""#).unwrap(), json!("a\nb\t\"c\""));
        assert_eq!(parse_literal(r#""가""#).unwrap(), json!("가"));
        assert_eq!(parse_literal(r#""😀""#).unwrap(), json!("😀"));
    }

    #[test]
    fn test_parse_comments_skipped() {
        let value = parse_literal("// header\n{ /* inline */ a: 1 }").unwrap();
        assert_eq!(value, json!({"a": 1}));
    }

    #[test]
    fn test_parse_rejects_non_literals() {
        assert!(parse_literal("undefined").is_err());
        assert!(parse_literal("(x) => x").is_err());
        assert!(parse_literal("{ a: }").is_err());
        assert!(parse_literal("{ a: 1").is_err());
        assert!(parse_literal("'open").is_err());
    }

    #[test]
    fn test_trailing_text_ignored() {
        assert_eq!(parse_literal("[1, 2];\nexport const other = 3;").unwrap(), json!([1, 2]));
    }
}
