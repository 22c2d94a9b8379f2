use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{describe, enter, expect},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`. Each prefix operator counts as one nesting level.
///
/// `-` directly followed by `9223372036854775808` is read as the single
/// literal `i64::MIN`, whose magnitude alone does not fit.
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let op = match tokens.peek().map(|tok| tok.kind) {
        Some(TokenKind::Minus) => UnaryOperator::Negate,
        Some(TokenKind::Bang) => UnaryOperator::Not,
        _ => return parse_primary(tokens, depth),
    };

    let line = tokens.next().map_or(0, |tok| tok.line);

    if op == UnaryOperator::Negate
       && let Some(literal) = tokens.next_if(|tok| {
                                        tok.kind == TokenKind::Number
                                        && tok.lexeme.parse::<u64>() == Ok(i64::MIN.unsigned_abs())
                                    })
    {
        return Ok(Expr::Const { value: i64::MIN,
                                line:  literal.line, });
    }

    let operand = parse_unary(tokens, enter(depth, line)?)?;

    Ok(Expr::Unary { op,
                     operand: Box::new(operand),
                     line })
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := "(" expression ")"
///              | NUMBER
///              | IDENTIFIER
/// ```
///
/// # Errors
/// - `UnexpectedToken` for any other token, including floating-point,
///   string and boolean literals, which have no runtime meaning.
/// - `ExpectedToken` when a parenthesised expression is not closed.
/// - `LiteralTooLarge` for integers outside the 64-bit range. A negated
///   `9223372036854775808` never gets here, see [`parse_unary`].
/// - `UnexpectedEndOfInput` when no tokens are left.
/// - `NestingTooDeep` when parentheses nest past the parser's limit.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = tokens.next()
                      .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match token.kind {
        TokenKind::LParen => {
            let expr = parse_expression(tokens, enter(depth, token.line)?)?;
            expect(tokens, TokenKind::RParen)?;
            Ok(expr)
        },
        TokenKind::Number => {
            let value = token.lexeme
                             .parse::<i64>()
                             .map_err(|_| ParseError::LiteralTooLarge { literal: token.lexeme.clone(),
                                                                        line:    token.line, })?;
            Ok(Expr::Const { value,
                             line: token.line })
        },
        TokenKind::Identifier => Ok(Expr::VarRef { name: token.lexeme.clone(),
                                                   line: token.line, }),
        _ => Err(ParseError::UnexpectedToken { token: describe(Some(token)),
                                               line:  token.line, }),
    }
}
