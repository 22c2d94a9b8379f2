/// Block parsing.
///
/// Parses brace-delimited statement sequences used as loop and branch
/// bodies.
pub mod block;

/// Core parser entry points.
///
/// Contains the result type, the expression entry point and the program
/// loop that drives statement parsing over the whole token list.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence tier, from logical or down to
/// multiplication. Every tier is left-associative.
pub mod binary;

/// Unary and primary expression parsing.
///
/// Prefix operators, literals, variable references and parenthesised
/// sub-expressions.
pub mod unary;

/// Statement parsing.
///
/// Declarations, assignments, `print`, `while` and `if`.
pub mod statement;

/// Helpers shared by the parser modules.
///
/// Token expectation, identifier lists and diagnostics text.
pub mod utils;
