use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// How many parentheses, prefix operators and blocks may enclose each other.
pub const MAX_NESTING: usize = 128;

/// Height limit for a single expression tree, which also bounds long
/// operator chains such as `1 + 1 + ... + 1`.
pub const MAX_EXPRESSION_HEIGHT: usize = 256;

/// Steps one nesting level deeper.
///
/// # Errors
/// Returns `ParseError::NestingTooDeep` once `depth` reaches
/// [`MAX_NESTING`].
pub(in crate::interpreter::parser) const fn enter(depth: usize, line: usize) -> ParseResult<usize> {
    if depth >= MAX_NESTING {
        return Err(ParseError::NestingTooDeep { line });
    }
    Ok(depth + 1)
}

/// Number of nodes on the longest root-to-leaf path of `expr`.
///
/// Only called on trees the parser has already bounded.
pub(in crate::interpreter::parser) fn height(expr: &Expr) -> usize {
    match expr {
        Expr::Const { .. } | Expr::VarRef { .. } => 1,
        Expr::Unary { operand, .. } => 1 + height(operand),
        Expr::Binary { left, right, .. } => 1 + height(left).max(height(right)),
    }
}

/// Consumes the next token, requiring it to be of `kind`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the required token.
/// - `kind`: The required kind; its fixed spelling is used in diagnostics.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// Returns `ParseError::ExpectedToken` naming what was found instead. At the
/// end of input the line is left as `0`; the program loop fills it in.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next_if(|tok| tok.kind == kind) {
        Some(tok) => Ok(tok),
        None => Err(expected(kind, tokens.peek().copied())),
    }
}

/// Builds the `ExpectedToken` error for a missing `kind`.
pub(in crate::interpreter::parser) fn expected(kind: TokenKind, found: Option<&Token>) -> ParseError {
    ParseError::ExpectedToken { expected: kind.spelling()
                                              .map_or_else(|| format!("{kind:?}"), str::to_string),
                                found:    describe(found),
                                line:     found.map_or(0, |t| t.line), }
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(tok) if tok.kind == TokenKind::Identifier => Ok(tok.lexeme.clone()),
        Some(tok) => {
            Err(ParseError::UnexpectedToken { token: format!("expected identifier, found {}",
                                                             describe(Some(tok))),
                                              line:  tok.line, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Parses a comma-separated list of identifiers until a closing token.
///
/// The closing token is consumed. At least one identifier is required.
///
/// Grammar: `list := identifier ("," identifier)* closing`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item is not an identifier,
/// - a token other than `,` or the closing token follows an item,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_identifier_list<'a, I>(tokens: &mut Peekable<I>,
                                                                   closing: TokenKind)
                                                                   -> ParseResult<Vec<String>>
    where I: Iterator<Item = &'a Token>
{
    let mut names = vec![parse_identifier(tokens)?];

    loop {
        match tokens.peek() {
            Some(tok) if tok.kind == TokenKind::Comma => {
                tokens.next();
                names.push(parse_identifier(tokens)?);
            },
            Some(tok) if tok.kind == closing => {
                tokens.next();
                break;
            },
            Some(tok) => return Err(expected(closing, Some(*tok))),
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }

    Ok(names)
}

/// Human-friendly description of a token for diagnostics.
#[must_use]
pub fn describe(token: Option<&Token>) -> String {
    token.map_or_else(|| "end of input".to_string(), |t| format!("'{}'", t.lexeme))
}
