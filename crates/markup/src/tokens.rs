//! nom tokenizer for inline markup.

use crate::error::MarkupError;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_till1};
use nom::character::complete::{alpha1, char, digit1, hex_digit1, multispace0};
use nom::combinator::{map_opt, not, value};
use nom::sequence::{delimited, preceded, terminated};
use nom::{IResult, Parser};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token<'a> {
    Open(&'a str),
    Close(&'a str),
    Empty(&'a str),
    Text(&'a str),
    Char(char),
}

fn close_tag(input: &str) -> IResult<&str, Token<'_>> {
    delimited(tag("</"), terminated(alpha1, multispace0), char('>'))
        .map(Token::Close)
        .parse(input)
}

fn empty_tag(input: &str) -> IResult<&str, Token<'_>> {
    delimited(char('<'), terminated(alpha1, multispace0), tag("/>"))
        .map(Token::Empty)
        .parse(input)
}

fn open_tag(input: &str) -> IResult<&str, Token<'_>> {
    delimited(char('<'), terminated(alpha1, multispace0), char('>'))
        .map(Token::Open)
        .parse(input)
}

fn named_entity(input: &str) -> IResult<&str, char> {
    map_opt(alpha1, |name: &str| match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => None,
    })
    .parse(input)
}

fn numeric_entity(input: &str) -> IResult<&str, char> {
    preceded(
        char('#'),
        alt((
            map_opt(preceded(alt((char('x'), char('X'))), hex_digit1), |hex: &str| {
                u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
            }),
            map_opt(digit1, |dec: &str| {
                dec.parse::<u32>().ok().and_then(char::from_u32)
            }),
        )),
    )
    .parse(input)
}

fn entity(input: &str) -> IResult<&str, Token<'_>> {
    delimited(char('&'), alt((numeric_entity, named_entity)), char(';'))
        .map(Token::Char)
        .parse(input)
}

/// An ampersand that does not start an entity is kept as a literal.
/// `&#` is always treated as the start of a character reference.
fn bare_ampersand(input: &str) -> IResult<&str, Token<'_>> {
    value(Token::Char('&'), terminated(char('&'), not(char('#')))).parse(input)
}

fn text(input: &str) -> IResult<&str, Token<'_>> {
    take_till1(|c: char| c == '<' || c == '&')
        .map(Token::Text)
        .parse(input)
}

fn token(input: &str) -> IResult<&str, Token<'_>> {
    alt((close_tag, empty_tag, open_tag, entity, text, bare_ampersand)).parse(input)
}

/// Splits `input` into tokens, each paired with its byte offset.
pub(crate) fn tokenize(input: &str) -> Result<Vec<(usize, Token<'_>)>, MarkupError> {
    let mut tokens = Vec::new();
    let mut rest = input;
    while !rest.is_empty() {
        let offset = input.len() - rest.len();
        match token(rest) {
            Ok((next, tok)) => {
                tokens.push((offset, tok));
                rest = next;
            }
            Err(_) if rest.starts_with("&#") => return Err(MarkupError::InvalidEntity { offset }),
            Err(_) => return Err(MarkupError::Malformed { offset }),
        }
    }
    Ok(tokens)
}
