use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use nom::bytes::complete::take_while1;
use nom::character::complete::{char, multispace0};
use nom::combinator::all_consuming;
use nom::multi::separated_list1;
use nom::sequence::{delimited, pair};
use nom::IResult;

use crate::syntax::{BinaryOp, SyntaxNode};

/// The expression text does not match any grammar rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    Unrecognized(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => f.write_str("empty expression"),
            ParseError::Unrecognized(fragment) => {
                write!(f, "no rule matches expression fragment {:?}", fragment)
            }
        }
    }
}

/// Parses an infix expression into a [SyntaxNode] tree.
///
/// The split point for binary connectives is found by scanning for the first
/// top-level occurrence of each operator in [BinaryOp::SCAN_ORDER]. The first
/// operator in scan order with any top-level occurrence becomes the root of
/// the subtree, regardless of where it sits in the text: `P(a) | Q(b) & R(c)`
/// splits on `&` even though `|` comes first. Callers depend on this
/// list-order binding; it is not conventional operator precedence.
pub fn parse(expression: &str) -> Result<SyntaxNode, ParseError> {
    let expression = expression.trim();
    if expression.is_empty() {
        return Err(ParseError::Empty);
    }

    for op in BinaryOp::SCAN_ORDER {
        if let Some(at) = find_top_level(expression, op) {
            log::trace!("splitting {:?} on {:?}", expression, op.symbol());
            let lhs = parse(&expression[..at])?;
            let rhs = parse(&expression[at + op.symbol().len()..])?;
            return Ok(SyntaxNode::binary(op, lhs, rhs));
        }
    }

    if let Some(rest) = expression.strip_prefix('~') {
        return parse(rest).map(SyntaxNode::not);
    }

    if let Some(inner) = strip_outer_parens(expression) {
        return parse(inner);
    }

    predicate_atom(expression)
}

/// Byte offset of the first top-level occurrence of `op`, if any.
///
/// Top-level means outside any parenthesis nesting. Multi-character operators
/// match atomically: a `->` immediately preceded by `<` is the tail of a
/// `<->` token, not an occurrence of `->`.
fn find_top_level(expression: &str, op: BinaryOp) -> Option<usize> {
    let symbol = op.symbol().as_bytes();
    let bytes = expression.as_bytes();
    let mut depth = 0i32;

    for i in 0..bytes.len() {
        match bytes[i] {
            b'(' => depth += 1,
            b')' => depth -= 1,
            _ => {
                if depth == 0
                    && bytes[i..].starts_with(symbol)
                    && !(op == BinaryOp::Implies && i > 0 && bytes[i - 1] == b'<')
                {
                    return Some(i);
                }
            }
        }
    }

    None
}

/// The inside of the expression when it is wrapped in one matching pair of
/// outermost parentheses, i.e. the parenthesis opened at the first byte
/// closes at the last. Partial wraps like `(P(a)) (Q(b))` are left alone.
fn strip_outer_parens(expression: &str) -> Option<&str> {
    let bytes = expression.as_bytes();
    if bytes.first() != Some(&b'(') || bytes.last() != Some(&b')') {
        return None;
    }

    let mut depth = 0i32;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return (i == bytes.len() - 1).then(|| &expression[1..bytes.len() - 1]);
                }
            }
            _ => {}
        }
    }

    None
}

fn identifier(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_ascii_alphanumeric() || c == '_')(input)
}

fn argument(input: &str) -> IResult<&str, &str> {
    delimited(multispace0, identifier, multispace0)(input)
}

// Atomic predicate shape: an identifier immediately followed by a
// parenthesized, comma-separated list of bare identifiers.
fn atom(input: &str) -> IResult<&str, (&str, Vec<&str>)> {
    all_consuming(pair(
        identifier,
        delimited(char('('), separated_list1(char(','), argument), char(')')),
    ))(input)
}

fn predicate_atom(expression: &str) -> Result<SyntaxNode, ParseError> {
    let (_, (name, args)) =
        atom(expression).map_err(|_| ParseError::Unrecognized(expression.to_string()))?;

    Ok(SyntaxNode::Predicate {
        name: name.to_string(),
        args: args.into_iter().map(String::from).collect(),
    })
}
