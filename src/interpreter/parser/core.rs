use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{binary::parse_logical_or, statement::parse_statement},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical OR, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := logical_or`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the
///   expression.
/// - `depth`: How many parentheses, prefix operators and blocks enclose
///   the expression; `0` at top level.
///
/// # Returns
/// The parsed expression node. The iterator is left on the first token after
/// the expression.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_logical_or(tokens, depth)
}

/// Parses an expression starting at `start` in a token slice.
///
/// Returns the expression together with the index immediately past it, so
/// callers working with indices can continue from there.
///
/// # Errors
/// Returns a `ParseError` if no valid expression starts at `start`.
///
/// # Example
/// ```
/// use minipython::interpreter::{lexer::tokenize, parser::core::parse_expression_at};
///
/// let tokens = tokenize("x = 1 + 2 * 3;").unwrap();
/// let (expr, next) = parse_expression_at(&tokens, 2).unwrap();
///
/// assert_eq!(expr.to_string(), "(1 + (2 * 3))");
/// assert_eq!(next, 7);
/// ```
pub fn parse_expression_at(tokens: &[Token], start: usize) -> ParseResult<(Expr, usize)> {
    let rest = tokens.get(start..).unwrap_or_default();
    let mut iter = rest.iter().peekable();
    let expr = parse_expression(&mut iter, 0).map_err(|e| with_end_line(e, tokens))?;
    let next = tokens.len() - iter.len();

    Ok((expr, next))
}

/// Parses a whole program.
///
/// Statements are parsed one after another until the token list is
/// exhausted.
///
/// Grammar: `program := statement*`
///
/// # Errors
/// Returns the first `ParseError` met; nothing after it is parsed.
pub fn parse_program(tokens: &[Token]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        let statement = parse_statement(&mut iter, 0).map_err(|e| with_end_line(e, tokens))?;
        statements.push(statement);
    }

    debug!(statements = statements.len(), "parsed program");
    Ok(Program { statements })
}

/// Running out of tokens is only noticed where the line is unknown; report
/// the line of the last token instead.
fn with_end_line(error: ParseError, tokens: &[Token]) -> ParseError {
    match error {
        ParseError::UnexpectedEndOfInput { line: 0 } => {
            ParseError::UnexpectedEndOfInput { line: tokens.last().map_or(1, |t| t.line) }
        },
        ParseError::ExpectedToken { expected,
                                    found,
                                    line: 0, } => {
            ParseError::ExpectedToken { expected,
                                        found,
                                        line: tokens.last().map_or(1, |t| t.line) }
        },
        other => other,
    }
}
