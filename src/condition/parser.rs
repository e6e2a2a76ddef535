//! Tokenizer and parser for the legacy textual predicate mini-language.
//!
//! The grammar is a single production: an optional `!` negation wrapper
//! around `("field/path" OPERATOR value)`, where the value is a
//! double-quoted string, a single-quoted string or a bracketed list. Keeping
//! an explicit tokenizer makes "unparseable expression" a distinct, testable
//! failure mode instead of a silent non-match.

use crate::error::ExpressionError;

/// A textual predicate reduced to its parts, before any table mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPredicate {
    pub negated: bool,
    pub path: String,
    pub operator: String,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Bang,
    Open,
    Close,
    /// A single- or double-quoted string, quotes stripped.
    Quoted(String),
    /// A bracketed list, brackets included.
    Bracketed(String),
    /// A bare operator token such as `EQUALS`.
    Word(String),
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Bang => "'!'".to_string(),
            Token::Open => "'('".to_string(),
            Token::Close => "')'".to_string(),
            Token::Quoted(text) => format!("\"{}\"", text),
            Token::Bracketed(_) => "a list literal".to_string(),
            Token::Word(word) => format!("'{}'", word),
        }
    }
}

/// Parses one textual predicate expression.
pub fn parse_expression(src: &str) -> Result<ParsedPredicate, ExpressionError> {
    let tokens = tokenize(src)?;
    if tokens.is_empty() {
        return Err(ExpressionError::Empty);
    }
    let mut tokens = tokens.into_iter().peekable();

    let negated = matches!(tokens.peek(), Some((_, Token::Bang)));
    if negated {
        tokens.next();
    }

    match tokens.next() {
        Some((_, Token::Open)) => {}
        other => return Err(unexpected("'('", other, src.len())),
    }
    let path = match tokens.next() {
        Some((_, Token::Quoted(path))) => path,
        other => return Err(unexpected("a quoted field path", other, src.len())),
    };
    let operator = match tokens.next() {
        Some((_, Token::Word(operator))) => operator,
        other => return Err(unexpected("an operator token", other, src.len())),
    };
    let value = match tokens.next() {
        Some((_, Token::Quoted(text))) => serde_json::Value::String(text),
        Some((_, Token::Bracketed(raw))) => parse_list_literal(&raw),
        other => return Err(unexpected("a value literal", other, src.len())),
    };
    match tokens.next() {
        Some((_, Token::Close)) => {}
        other => return Err(unexpected("')'", other, src.len())),
    }
    if let Some((at, _)) = tokens.next() {
        return Err(ExpressionError::TrailingInput { at });
    }

    Ok(ParsedPredicate {
        negated,
        path,
        operator,
        value,
    })
}

fn unexpected(
    expected: &'static str,
    found: Option<(usize, Token)>,
    end: usize,
) -> ExpressionError {
    match found {
        Some((at, token)) => ExpressionError::UnexpectedToken {
            expected,
            found: token.describe(),
            at,
        },
        None => ExpressionError::UnexpectedToken {
            expected,
            found: "end of input".to_string(),
            at: end,
        },
    }
}

fn tokenize(src: &str) -> Result<Vec<(usize, Token)>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = src.char_indices().peekable();

    while let Some(&(at, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '!' => {
                chars.next();
                tokens.push((at, Token::Bang));
            }
            '(' => {
                chars.next();
                tokens.push((at, Token::Open));
            }
            ')' => {
                chars.next();
                tokens.push((at, Token::Close));
            }
            '"' | '\'' => {
                chars.next();
                let mut text = String::new();
                let mut closed = false;
                for (_, ch) in chars.by_ref() {
                    if ch == c {
                        closed = true;
                        break;
                    }
                    text.push(ch);
                }
                if !closed {
                    return Err(ExpressionError::Unterminated {
                        what: "string literal",
                        at,
                    });
                }
                tokens.push((at, Token::Quoted(text)));
            }
            '[' => {
                let mut depth = 0usize;
                let mut end = None;
                for (i, ch) in chars.by_ref() {
                    match ch {
                        '[' => depth += 1,
                        ']' => {
                            depth -= 1;
                            if depth == 0 {
                                end = Some(i);
                                break;
                            }
                        }
                        _ => {}
                    }
                }
                let Some(end) = end else {
                    return Err(ExpressionError::Unterminated {
                        what: "list literal",
                        at,
                    });
                };
                tokens.push((at, Token::Bracketed(src[at..=end].to_string())));
            }
            c if c.is_ascii_alphanumeric() || c == '_' => {
                let mut word = String::new();
                while let Some(&(_, ch)) = chars.peek() {
                    if ch.is_ascii_alphanumeric() || ch == '_' {
                        word.push(ch);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push((at, Token::Word(word)));
            }
            other => {
                return Err(ExpressionError::UnexpectedChar { found: other, at });
            }
        }
    }

    Ok(tokens)
}

/// Parses a bracketed list as a JSON array literal, falling back to
/// comma-splitting with quote-stripping when the list is not valid JSON.
fn parse_list_literal(raw: &str) -> serde_json::Value {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(raw) {
        return value;
    }
    let interior = raw.trim_start_matches('[').trim_end_matches(']');
    let items = interior
        .split(',')
        .map(|item| item.trim().trim_matches(|c| c == '"' || c == '\''))
        .filter(|item| !item.is_empty())
        .map(|item| serde_json::Value::String(item.to_string()))
        .collect();
    serde_json::Value::Array(items)
}
