use std::iter::Peekable;

use crate::{
    ast::{Block, DeclaredType, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{describe, expect, parse_identifier, parse_identifier_list},
        },
    },
};

/// Parses a single statement.
///
/// The leading token decides the statement kind:
/// - `int` starts a declaration,
/// - an identifier starts an assignment,
/// - `print`, `while` and `if` start their respective statements.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of a statement.
/// - `depth`: Current nesting level; `0` at top level.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// Returns `UnexpectedToken` if no statement starts with the current token,
/// and propagates errors from the specific statement parsers.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };

    match token.kind {
        TokenKind::Int => parse_declaration(tokens),
        TokenKind::Identifier => parse_assignment(tokens, depth),
        TokenKind::Print => parse_print(tokens, depth),
        TokenKind::While => parse_while(tokens, depth),
        TokenKind::If => parse_if(tokens, depth),
        _ => Err(ParseError::UnexpectedToken { token: format!("{} cannot start a statement",
                                                              describe(Some(token))),
                                               line:  token.line, }),
    }
}

/// Parses a variable declaration.
///
/// Grammar: `declaration := "int" identifier ("," identifier)* ";"`
///
/// Duplicate names are accepted here; the semantic checker rejects them.
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, TokenKind::Int)?.line;
    let names = parse_identifier_list(tokens, TokenKind::Semicolon)?;

    Ok(Statement::Decl { names,
                         ty: DeclaredType::Int,
                         line })
}

/// Parses an assignment.
///
/// Grammar: `assignment := identifier "=" expression ";"`
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = tokens.peek().map_or(0, |tok| tok.line);
    let target = parse_identifier(tokens)?;
    expect(tokens, TokenKind::Equals)?;
    let value = parse_expression(tokens, depth)?;
    expect(tokens, TokenKind::Semicolon)?;

    Ok(Statement::Assign { target, value, line })
}

/// Parses a print statement.
///
/// Grammar: `print := "print" "(" expression ")" ";"`
fn parse_print<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, TokenKind::Print)?.line;
    expect(tokens, TokenKind::LParen)?;
    let value = parse_expression(tokens, depth)?;
    expect(tokens, TokenKind::RParen)?;
    expect(tokens, TokenKind::Semicolon)?;

    Ok(Statement::Print { value, line })
}

/// Parses a while loop.
///
/// Grammar: `while := "while" "(" expression ")" block`
fn parse_while<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, TokenKind::While)?.line;
    expect(tokens, TokenKind::LParen)?;
    let condition = parse_expression(tokens, depth)?;
    expect(tokens, TokenKind::RParen)?;
    let body = parse_block(tokens, depth)?;

    Ok(Statement::While { condition,
                          body,
                          line })
}

/// Parses a conditional.
///
/// Grammar: `if := "if" "(" expression ")" block ("else" block)?`
///
/// Without an `else` clause the else body is an empty block.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, TokenKind::If)?.line;
    expect(tokens, TokenKind::LParen)?;
    let condition = parse_expression(tokens, depth)?;
    expect(tokens, TokenKind::RParen)?;
    let then_body = parse_block(tokens, depth)?;

    let else_body = if tokens.next_if(|tok| tok.kind == TokenKind::Else).is_some() {
        parse_block(tokens, depth)?
    } else {
        Block::default()
    };

    Ok(Statement::If { condition,
                       then_body,
                       else_body,
                       line })
}
