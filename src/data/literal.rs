//! Strict parser for the stringified list cells in the summary CSV.
//!
//! The upstream simulation writes material lists as Python-style list
//! literals, e.g. `['brick', 'membrane_x', 'wool']`. This is a small
//! recursive-descent parser for exactly that shape — brackets, single-
//! or double-quoted strings, comma separators, optional trailing comma —
//! not a general expression evaluator.

/// Why a cell failed to parse. Converted into `DataError::MalformedRecord`
/// with row/column context by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralError {
    /// Byte offset into the cell where parsing failed.
    pub offset: usize,
    pub message: String,
}

impl std::fmt::Display for LiteralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (at offset {})", self.message, self.offset)
    }
}

/// Parse a bracketed, quoted, comma-separated list of strings.
///
/// Accepts `[]`, `['a']`, `["a", 'b']`, backslash escapes inside quotes,
/// and a trailing comma. Rejects everything else, including unquoted
/// tokens and trailing garbage after the closing bracket.
pub fn parse_string_list(cell: &str) -> Result<Vec<String>, LiteralError> {
    let mut p = Parser {
        input: cell.as_bytes(),
        pos: 0,
    };
    p.skip_whitespace();
    p.expect(b'[')?;
    let mut items = Vec::new();
    loop {
        p.skip_whitespace();
        match p.peek() {
            Some(b']') => {
                p.pos += 1;
                break;
            }
            Some(b'\'') | Some(b'"') => {
                items.push(p.quoted_string()?);
                p.skip_whitespace();
                match p.peek() {
                    Some(b',') => {
                        p.pos += 1;
                    }
                    Some(b']') => {}
                    _ => return Err(p.fail("expected ',' or ']' after string")),
                }
            }
            Some(_) => return Err(p.fail("expected quoted string or ']'")),
            None => return Err(p.fail("unterminated list")),
        }
    }
    p.skip_whitespace();
    if p.pos != p.input.len() {
        return Err(p.fail("unexpected trailing characters after ']'"));
    }
    Ok(items)
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ') | Some(b'\t')) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, byte: u8) -> Result<(), LiteralError> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.fail(&format!("expected '{}'", byte as char)))
        }
    }

    /// Consume a quoted string. The opening quote character also closes
    /// the string; the other quote kind is an ordinary character inside.
    fn quoted_string(&mut self) -> Result<String, LiteralError> {
        let quote = self.peek().ok_or_else(|| self.fail("expected quote"))?;
        self.pos += 1;
        let mut out = String::new();
        loop {
            match self.peek() {
                Some(b'\\') => {
                    self.pos += 1;
                    if self.peek().is_none() {
                        return Err(self.fail("dangling escape at end of input"));
                    }
                    out.push(self.next_char()?);
                }
                Some(c) if c == quote => {
                    self.pos += 1;
                    return Ok(out);
                }
                Some(_) => out.push(self.next_char()?),
                None => return Err(self.fail("unterminated string literal")),
            }
        }
    }

    /// Consume one full UTF-8 scalar, not one byte.
    fn next_char(&mut self) -> Result<char, LiteralError> {
        let rest = &self.input[self.pos..];
        let s = std::str::from_utf8(rest).map_err(|_| self.fail("invalid UTF-8 inside string"))?;
        match s.chars().next() {
            Some(ch) => {
                self.pos += ch.len_utf8();
                Ok(ch)
            }
            None => Err(self.fail("unexpected end of input")),
        }
    }

    fn fail(&self, message: &str) -> LiteralError {
        LiteralError {
            offset: self.pos,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_known_list() {
        let parsed = parse_string_list("['brick', 'membrane_x', 'wool']").unwrap();
        assert_eq!(parsed, vec!["brick", "membrane_x", "wool"]);
    }

    #[test]
    fn accepts_double_quotes_and_trailing_comma() {
        let parsed = parse_string_list(r#"["a", 'b',]"#).unwrap();
        assert_eq!(parsed, vec!["a", "b"]);
    }

    #[test]
    fn accepts_empty_list() {
        assert_eq!(parse_string_list("[]").unwrap(), Vec::<String>::new());
        assert_eq!(parse_string_list("  [ ]  ").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn preserves_escapes_and_embedded_quotes() {
        let parsed = parse_string_list(r#"['it\'s', "say \"hi\""]"#).unwrap();
        assert_eq!(parsed, vec!["it's", "say \"hi\""]);
    }

    #[test]
    fn keeps_order() {
        let parsed = parse_string_list("['c', 'a', 'b']").unwrap();
        assert_eq!(parsed, vec!["c", "a", "b"]);
    }

    #[test]
    fn rejects_unquoted_tokens() {
        assert!(parse_string_list("[brick]").is_err());
    }

    #[test]
    fn rejects_missing_bracket() {
        assert!(parse_string_list("'a', 'b'").is_err());
        assert!(parse_string_list("['a', 'b'").is_err());
    }

    #[test]
    fn rejects_trailing_garbage() {
        assert!(parse_string_list("['a'] junk").is_err());
    }

    #[test]
    fn rejects_code_like_input() {
        assert!(parse_string_list("__import__('os')").is_err());
        assert!(parse_string_list("[1, 2]").is_err());
    }

    #[test]
    fn handles_unicode_material_names() {
        let parsed = parse_string_list("['trä', 'betong']").unwrap();
        assert_eq!(parsed, vec!["trä", "betong"]);
    }
}
