use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::ParseResult,
            unary::parse_unary,
            utils::{MAX_EXPRESSION_HEIGHT, height},
        },
    },
};

/// Maps a token kind to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators. `-` maps to
/// subtraction; in prefix position it is handled by the unary parser before
/// this mapping is consulted.
///
/// # Example
/// ```
/// use minipython::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::AndAnd => Some(BinaryOperator::And),
        TokenKind::PipePipe => Some(BinaryOperator::Or),
        _ => None,
    }
}

/// Parses logical OR expressions.
///
/// Lowest precedence tier.
///
/// Grammar: `or := and ("||" and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_tier(tokens, depth, &[BinaryOperator::Or], parse_logical_and)
}

/// Parses logical AND expressions.
///
/// Grammar: `and := equality ("&&" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_tier(tokens, depth, &[BinaryOperator::And], parse_equality)
}

/// Parses equality comparisons.
///
/// Grammar: `equality := comparison (("==" | "!=") comparison)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_tier(tokens,
               depth,
               &[BinaryOperator::Equal, BinaryOperator::NotEqual],
               parse_comparison)
}

/// Parses relational comparisons.
///
/// Grammar: `comparison := additive (("<" | ">" | "<=" | ">=") additive)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_tier(tokens,
               depth,
               &[BinaryOperator::Less,
                 BinaryOperator::Greater,
                 BinaryOperator::LessEqual,
                 BinaryOperator::GreaterEqual],
               parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_tier(tokens,
               depth,
               &[BinaryOperator::Add, BinaryOperator::Sub],
               parse_multiplicative)
}

/// Parses multiplication and division expressions.
///
/// Highest binary precedence tier.
///
/// Grammar: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_tier(tokens,
               depth,
               &[BinaryOperator::Mul, BinaryOperator::Div],
               parse_unary)
}

/// Parses one left-associative precedence tier.
///
/// Operands come from `next_tier`; while the next token maps to one of `ops`
/// the left operand is folded with the following right operand, so
/// `a - b - c` becomes `(a - b) - c`.
///
/// The height of the folded tree is tracked as it grows; past
/// [`MAX_EXPRESSION_HEIGHT`] the chain is rejected with `NestingTooDeep`.
fn parse_tier<'a, I>(tokens: &mut Peekable<I>,
                     depth: usize,
                     ops: &[BinaryOperator],
                     next_tier: fn(&mut Peekable<I>, usize) -> ParseResult<Expr>)
                     -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = next_tier(tokens, depth)?;
    let mut left_height = height(&left);

    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token.kind)
          && ops.contains(&op)
    {
        let line = token.line;
        tokens.next();

        let right = next_tier(tokens, depth)?;
        left_height = 1 + left_height.max(height(&right));
        if left_height > MAX_EXPRESSION_HEIGHT {
            return Err(ParseError::NestingTooDeep { line });
        }

        left = Expr::Binary { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line };
    }

    Ok(left)
}
