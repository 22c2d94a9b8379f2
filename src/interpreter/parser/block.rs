use std::iter::Peekable;

use crate::{
    ast::Block,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{enter, expect},
        },
    },
};

/// Parses a block delimited by braces.
///
/// A block consists of zero or more statements. Parsing continues until the
/// matching closing `}` token is consumed.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
/// - `depth`: Nesting level of the statement owning the block.
///
/// # Returns
/// The block with its statements in source order.
///
/// # Errors
/// - `ExpectedToken` if the block does not start with `{`.
/// - `UnexpectedEndOfInput` if the input ends before the closing `}`.
/// - `NestingTooDeep` if blocks nest past the parser's limit.
/// - Any error raised by a statement inside the block.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Block>
    where I: Iterator<Item = &'a Token> + Clone
{
    let open = expect(tokens, TokenKind::LBrace)?;
    let inner = enter(depth, open.line)?;
    let mut statements = Vec::new();

    while tokens.next_if(|tok| tok.kind == TokenKind::RBrace).is_none() {
        if tokens.peek().is_none() {
            return Err(ParseError::UnexpectedEndOfInput { line: open.line });
        }
        statements.push(parse_statement(tokens, inner)?);
    }

    Ok(Block { statements })
}
