// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Parser for GraphQL operation documents using nom parsers over tokens
//!
//! Accepted grammar:
//!
//! ```text
//! Document            := OperationDefinition+ EOF
//! OperationDefinition := ("query" | "mutation" | "subscription") Name? SelectionSet
//!                      | SelectionSet
//! SelectionSet        := "{" Field+ "}"
//! Field               := (Name ":")? Name Arguments? SelectionSet?
//! Arguments           := "(" (Name ":" Value)* ")"
//! Value               := "$" Name | Int | Float | String | Name | List | Object
//! List                := "[" Value* "]"
//! Object              := "{" (Name ":" Value)* "}"
//! ```
//!
//! Directives, fragments and variable definitions are rejected.

use log::debug;
use nom::{
    branch::alt,
    combinator::{cut, map, opt},
    multi::{many0, many1},
    sequence::{pair, preceded, terminated, tuple},
    IResult,
};

use super::ast::*;
use super::lexer::{tokenize, Token};
use super::pretty_printer::pretty_print_ast;

/// Parser error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParserError {
    #[error("Lexer error: {0}")]
    LexerError(String),
    #[error("Unexpected token: {0:?}")]
    UnexpectedToken(Token),
    #[error("Expected token: {0:?}")]
    ExpectedToken(Token),
    #[error("Document contains no operation definitions")]
    EmptyDocument,
}

/// Parse a GraphQL document into an AST Document
pub fn parse_document(input: &str) -> Result<Document, ParserError> {
    let tokens = tokenize(input).map_err(ParserError::LexerError)?;

    if tokens.is_empty() || (tokens.len() == 1 && matches!(tokens[0], Token::EOF)) {
        return Err(ParserError::EmptyDocument);
    }

    match document(&tokens) {
        Ok((_, document)) => {
            debug!(
                "Successfully parsed document with {} operation definition(s)",
                document.definitions.len()
            );
            pretty_print_ast(&document);
            Ok(document)
        }
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            debug!(
                "PARSER: Failed near tokens: {:?}",
                e.input.get(0..5).unwrap_or(e.input)
            );
            Err(unexpected(e.input))
        }
        Err(nom::Err::Incomplete(_)) => Err(ParserError::ExpectedToken(Token::EOF)),
    }
}

/// Map the position of a parse failure to an error
fn unexpected(tokens: &[Token]) -> ParserError {
    match tokens.first() {
        Some(Token::EOF) | None => ParserError::ExpectedToken(Token::RightBrace),
        Some(token) => ParserError::UnexpectedToken(token.clone()),
    }
}

fn document(tokens: &[Token]) -> IResult<&[Token], Document> {
    map(
        terminated(many1(operation_definition), expect_token(Token::EOF)),
        |definitions| Document { definitions },
    )(tokens)
}

/// Parse an operation definition, either full or the `{ ... }` shorthand
fn operation_definition(tokens: &[Token]) -> IResult<&[Token], OperationDefinition> {
    alt((
        map(
            tuple((operation_kind, opt(name), selection_set)),
            |(kind, name, selection_set)| OperationDefinition {
                kind,
                name,
                selection_set,
            },
        ),
        map(selection_set, |selection_set| OperationDefinition {
            kind: OperationKind::Query,
            name: None,
            selection_set,
        }),
    ))(tokens)
}

fn operation_kind(tokens: &[Token]) -> IResult<&[Token], OperationKind> {
    alt((
        map(expect_keyword("query"), |_| OperationKind::Query),
        map(expect_keyword("mutation"), |_| OperationKind::Mutation),
        map(expect_keyword("subscription"), |_| OperationKind::Subscription),
    ))(tokens)
}

/// Parse `{ field+ }`; once the brace is consumed the set must complete
fn selection_set(tokens: &[Token]) -> IResult<&[Token], SelectionSet> {
    map(
        preceded(
            expect_token(Token::LeftBrace),
            cut(terminated(many1(field), expect_token(Token::RightBrace))),
        ),
        |fields| SelectionSet { fields },
    )(tokens)
}

fn field(tokens: &[Token]) -> IResult<&[Token], Field> {
    map(
        tuple((
            opt(terminated(name, expect_token(Token::Colon))),
            name,
            opt(arguments),
            opt(selection_set),
        )),
        |(alias, name, arguments, selection_set)| Field {
            alias,
            name,
            arguments: arguments.unwrap_or_default(),
            selection_set,
        },
    )(tokens)
}

fn arguments(tokens: &[Token]) -> IResult<&[Token], Vec<Argument>> {
    preceded(
        expect_token(Token::LeftParen),
        cut(terminated(many0(argument), expect_token(Token::RightParen))),
    )(tokens)
}

fn argument(tokens: &[Token]) -> IResult<&[Token], Argument> {
    map(
        pair(name, preceded(expect_token(Token::Colon), cut(value))),
        |(name, value)| Argument { name, value },
    )(tokens)
}

/// Parse an input value literal
fn value(tokens: &[Token]) -> IResult<&[Token], Value> {
    alt((
        variable_value,
        literal_value,
        name_value,
        list_value,
        object_value,
    ))(tokens)
}

fn variable_value(tokens: &[Token]) -> IResult<&[Token], Value> {
    map(
        preceded(expect_token(Token::Dollar), cut(name)),
        Value::Variable,
    )(tokens)
}

/// Parse numeric and string literals
fn literal_value(tokens: &[Token]) -> IResult<&[Token], Value> {
    if let Some(token) = tokens.first() {
        let value = match token {
            Token::Int(text) => Some(Value::Int(text.clone())),
            Token::Float(text) => Some(Value::Float(text.clone())),
            Token::String(s) => Some(Value::String(s.clone())),
            _ => None,
        };

        if let Some(v) = value {
            return Ok((&tokens[1..], v));
        }
    }
    Err(nom::Err::Error(nom::error::Error::new(
        tokens,
        nom::error::ErrorKind::Tag,
    )))
}

/// Names in value position: `true`, `false`, `null`, or an enum value
fn name_value(tokens: &[Token]) -> IResult<&[Token], Value> {
    map(name, |name| match name.as_str() {
        "true" => Value::Boolean(true),
        "false" => Value::Boolean(false),
        "null" => Value::Null,
        _ => Value::Enum(name),
    })(tokens)
}

fn list_value(tokens: &[Token]) -> IResult<&[Token], Value> {
    map(
        preceded(
            expect_token(Token::LeftBracket),
            cut(terminated(many0(value), expect_token(Token::RightBracket))),
        ),
        Value::List,
    )(tokens)
}

fn object_value(tokens: &[Token]) -> IResult<&[Token], Value> {
    map(
        preceded(
            expect_token(Token::LeftBrace),
            cut(terminated(
                many0(object_field),
                expect_token(Token::RightBrace),
            )),
        ),
        Value::Object,
    )(tokens)
}

fn object_field(tokens: &[Token]) -> IResult<&[Token], ObjectField> {
    map(
        pair(name, preceded(expect_token(Token::Colon), cut(value))),
        |(name, value)| ObjectField { name, value },
    )(tokens)
}

/// Parse a name token
fn name(tokens: &[Token]) -> IResult<&[Token], String> {
    match tokens.first() {
        Some(Token::Name(s)) => Ok((&tokens[1..], s.clone())),
        _ => Err(nom::Err::Error(nom::error::Error::new(
            tokens,
            nom::error::ErrorKind::Tag,
        ))),
    }
}

/// Expect a specific token
fn expect_token(expected: Token) -> impl Fn(&[Token]) -> IResult<&[Token], Token> {
    move |tokens: &[Token]| {
        if let Some(token) = tokens.first() {
            if std::mem::discriminant(token) == std::mem::discriminant(&expected) {
                Ok((&tokens[1..], token.clone()))
            } else {
                Err(nom::Err::Error(nom::error::Error::new(
                    tokens,
                    nom::error::ErrorKind::Tag,
                )))
            }
        } else {
            Err(nom::Err::Error(nom::error::Error::new(
                tokens,
                nom::error::ErrorKind::Eof,
            )))
        }
    }
}

/// Expect a name token spelling a contextual keyword (case-sensitive)
fn expect_keyword(keyword: &'static str) -> impl Fn(&[Token]) -> IResult<&[Token], Token> {
    move |tokens: &[Token]| match tokens.first() {
        Some(token @ Token::Name(name)) if name == keyword => Ok((&tokens[1..], token.clone())),
        _ => Err(nom::Err::Error(nom::error::Error::new(
            tokens,
            nom::error::ErrorKind::Tag,
        ))),
    }
}
