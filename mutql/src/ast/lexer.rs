// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Lexer for GraphQL operation documents using nom parsers
//!
//! Every token function must either consume input or return an error. The
//! main loop rejects any token that leaves the input unchanged, so a parser
//! that succeeds without consuming can never stall tokenization.
//!
//! Whitespace, commas and `#` comments are insignificant in the grammar and
//! never reach the token stream.

use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{alpha1, alphanumeric1, char, digit0, digit1, one_of, satisfy},
    combinator::{map, map_res, not, opt, recognize},
    multi::many0,
    sequence::{pair, terminated, tuple},
    IResult,
};

/// Token types for GraphQL documents
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Punctuators
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Colon,
    Bang,
    Dollar,
    Equal,
    AtSign,
    Ampersand,
    Pipe,
    Spread,

    // Literals keep their source text; strings are unescaped
    Int(String),
    Float(String),
    String(String),

    // Names, including contextual keywords such as `mutation` or `true`
    Name(String),

    // Whitespace and comments
    Whitespace,
    Comment,

    // End of file
    EOF,
}

/// Lexer state
#[derive(Debug, Clone)]
pub struct Lexer {
    input: String,
}

impl Lexer {
    pub fn new(input: String) -> Self {
        Self { input }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, String> {
        let mut remaining = self.input.as_str();
        let mut tokens = Vec::new();

        while !remaining.is_empty() {
            match token(remaining) {
                Ok((next_remaining, token)) => {
                    if next_remaining.len() == remaining.len() {
                        return Err(format!(
                            "Token {:?} did not consume input at offset {}",
                            token,
                            self.offset_of(remaining)
                        ));
                    }

                    if !matches!(token, Token::Whitespace | Token::Comment) {
                        tokens.push(token);
                    }
                    remaining = next_remaining;
                }
                Err(_) => {
                    return Err(format!(
                        "Unexpected character at offset {}: '{}'",
                        self.offset_of(remaining),
                        snippet(remaining)
                    ));
                }
            }
        }
        tokens.push(Token::EOF);
        Ok(tokens)
    }

    fn offset_of(&self, remaining: &str) -> usize {
        self.input.len() - remaining.len()
    }
}

/// First few characters of the remaining input, for error messages
fn snippet(input: &str) -> String {
    input.chars().take(16).collect()
}

/// Parse a single token
///
/// Block strings must come before plain strings (`"""` starts with `"`), and
/// floats before integers (`1.5` starts with `1`).
fn token(input: &str) -> IResult<&str, Token> {
    alt((
        whitespace,
        comment,
        map(block_string_literal, Token::String),
        map(string_literal, Token::String),
        map(float_literal, |s| Token::Float(s.to_string())),
        map(integer_literal, |s| Token::Int(s.to_string())),
        punctuator,
        map(name, |s| Token::Name(s.to_string())),
    ))(input)
}

/// Parse punctuators using direct string matching
///
/// The three-character spread must be tried before anything else starting with `.`.
fn punctuator(input: &str) -> IResult<&str, Token> {
    if input.starts_with("...") {
        Ok((&input[3..], Token::Spread))
    } else if input.starts_with('{') {
        Ok((&input[1..], Token::LeftBrace))
    } else if input.starts_with('}') {
        Ok((&input[1..], Token::RightBrace))
    } else if input.starts_with('(') {
        Ok((&input[1..], Token::LeftParen))
    } else if input.starts_with(')') {
        Ok((&input[1..], Token::RightParen))
    } else if input.starts_with('[') {
        Ok((&input[1..], Token::LeftBracket))
    } else if input.starts_with(']') {
        Ok((&input[1..], Token::RightBracket))
    } else if input.starts_with(':') {
        Ok((&input[1..], Token::Colon))
    } else if input.starts_with('!') {
        Ok((&input[1..], Token::Bang))
    } else if input.starts_with('$') {
        Ok((&input[1..], Token::Dollar))
    } else if input.starts_with('=') {
        Ok((&input[1..], Token::Equal))
    } else if input.starts_with('@') {
        Ok((&input[1..], Token::AtSign))
    } else if input.starts_with('&') {
        Ok((&input[1..], Token::Ampersand))
    } else if input.starts_with('|') {
        Ok((&input[1..], Token::Pipe))
    } else {
        Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        )))
    }
}

fn is_ignored(c: char) -> bool {
    c.is_whitespace() || c == ',' || c == '\u{feff}'
}

/// Parse insignificant whitespace, commas and byte order marks
///
/// Returns an error when nothing was consumed so that `alt` moves on.
fn whitespace(input: &str) -> IResult<&str, Token> {
    let (remaining, ignored) = take_while(is_ignored)(input)?;
    if ignored.is_empty() {
        return Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        )));
    }
    Ok((remaining, Token::Whitespace))
}

/// Parse `#` comments up to the end of the line
fn comment(input: &str) -> IResult<&str, Token> {
    map(
        pair(char('#'), take_while(|c| c != '\n' && c != '\r')),
        |_| Token::Comment,
    )(input)
}

/// Characters that may not directly follow a numeric literal
fn is_number_continuation(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// `0` or a digit sequence without leading zero
fn integer_part(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        opt(char('-')),
        alt((tag("0"), recognize(pair(one_of("123456789"), digit0)))),
    ))(input)
}

fn exponent_part(input: &str) -> IResult<&str, &str> {
    recognize(tuple((one_of("eE"), opt(one_of("+-")), digit1)))(input)
}

/// Parse integer literals, keeping the source text
fn integer_literal(input: &str) -> IResult<&str, &str> {
    terminated(integer_part, not(satisfy(is_number_continuation)))(input)
}

/// Parse float literals: an integer part followed by a fraction and/or exponent
fn float_literal(input: &str) -> IResult<&str, &str> {
    terminated(
        recognize(pair(
            integer_part,
            alt((
                recognize(pair(pair(char('.'), digit1), opt(exponent_part))),
                exponent_part,
            )),
        )),
        not(satisfy(is_number_continuation)),
    )(input)
}

/// Parse double quoted string literals and resolve escape sequences
fn string_literal(input: &str) -> IResult<&str, String> {
    map_res(
        recognize(pair(char('"'), pair(escaped_string_content, char('"')))),
        |s: &str| unescape(&s[1..s.len() - 1]),
    )(input)
}

/// Scan string content up to the closing quote
///
/// Stops at an unescaped quote or a line break; a line break leaves the
/// closing `char('"')` unmatched and fails the literal.
fn escaped_string_content(input: &str) -> IResult<&str, &str> {
    let mut pos = 0;
    let input_bytes = input.as_bytes();

    while pos < input_bytes.len() {
        match input_bytes[pos] {
            b'\\' if pos + 1 < input_bytes.len() => pos += 2,
            b'"' | b'\n' | b'\r' => break,
            _ => pos += 1,
        }
    }

    Ok((&input[pos..], &input[0..pos]))
}

/// Resolve the escape sequences of a string literal body
fn unescape(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('u') => {
                let high = hex_code_unit(&mut chars)?;
                let code = if (0xD800..0xDC00).contains(&high) {
                    // Surrogate pair: a second \uXXXX must follow
                    if chars.next() != Some('\\') || chars.next() != Some('u') {
                        return Err(format!("Unpaired surrogate \\u{:04X}", high));
                    }
                    let low = hex_code_unit(&mut chars)?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(format!("Invalid low surrogate \\u{:04X}", low));
                    }
                    0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
                } else {
                    high
                };
                let decoded = char::from_u32(code)
                    .ok_or_else(|| format!("Invalid unicode escape \\u{:04X}", code))?;
                out.push(decoded);
            }
            Some(other) => return Err(format!("Invalid escape sequence \\{}", other)),
            None => return Err("Unterminated escape sequence".to_string()),
        }
    }

    Ok(out)
}

fn hex_code_unit(chars: &mut std::str::Chars<'_>) -> Result<u32, String> {
    let digits: String = chars.by_ref().take(4).collect();
    if digits.len() != 4 {
        return Err(format!("Incomplete unicode escape \\u{}", digits));
    }
    u32::from_str_radix(&digits, 16).map_err(|_| format!("Invalid unicode escape \\u{}", digits))
}

/// Parse `"""` block strings; only `\"""` is an escape inside them
fn block_string_literal(input: &str) -> IResult<&str, String> {
    let (rest, _) = tag("\"\"\"")(input)?;
    let mut pos = 0;

    while pos < rest.len() {
        let tail = &rest[pos..];
        if tail.starts_with("\\\"\"\"") {
            pos += 4;
        } else if tail.starts_with("\"\"\"") {
            let raw = rest[..pos].replace("\\\"\"\"", "\"\"\"");
            return Ok((&tail[3..], block_string_value(&raw)));
        } else {
            pos += tail.chars().next().map_or(1, char::len_utf8);
        }
    }

    Err(nom::Err::Error(nom::error::Error::new(
        input,
        nom::error::ErrorKind::TakeUntil,
    )))
}

/// Strip the common indentation and surrounding blank lines of a block string
fn block_string_value(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().collect();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let indent = line.len() - line.trim_start_matches([' ', '\t']).len();
            (indent < line.len()).then_some(indent)
        })
        .min()
        .unwrap_or(0);

    let mut dedented: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 || line.len() < common_indent {
                *line
            } else {
                &line[common_indent..]
            }
        })
        .collect();

    while dedented.first().is_some_and(|l| l.trim().is_empty()) {
        dedented.remove(0);
    }
    while dedented.last().is_some_and(|l| l.trim().is_empty()) {
        dedented.pop();
    }

    dedented.join("\n")
}

/// Parse names: `[_A-Za-z][_0-9A-Za-z]*`
fn name(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        alt((alpha1, tag("_"))),
        many0(alt((alphanumeric1, tag("_")))),
    ))(input)
}

/// Public function to tokenize input
pub fn tokenize(input: &str) -> Result<Vec<Token>, String> {
    let mut lexer = Lexer::new(input.to_string());
    lexer.tokenize()
}
