//! # minipython
//!
//! minipython is a front end and interpreter for a tiny, Python-flavoured
//! imperative language with C-like syntax. It lexes, parses and checks
//! programs, lowers them to three-address code, and runs them either by
//! walking the tree or by executing the lowered code.
//!
//! ```
//! let mut printed = Vec::new();
//! minipython::run("int x, y; x = 5; y = x + 2; print(y);", &mut printed).unwrap();
//! assert_eq!(printed, [7]);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Context,
        lexer::Token,
        parser::core::parse_program,
        semantic::CheckedProgram,
        tac::{Instruction, Machine},
    },
};
pub use crate::interpreter::evaluator::output::{Output, StdoutOutput};

/// Defines the structure of parsed code.
///
/// This module declares the expression and statement types that represent
/// the syntactic structure of a program as a tree. The AST is built by the
/// parser, validated by the semantic checker and consumed by both back ends.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Renders programs as an indented tree for inspection.
pub mod ast;
/// Provides unified error types for every pipeline stage.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// checking or executing code. Each carries the source line it refers to.
///
/// # Responsibilities
/// - Defines one error enum per stage plus the [`Error`](error::Error) enum
///   wrapping them.
/// - Formats messages as `Error on line N: ...`.
/// - Supports integration with the standard error traits.
pub mod error;
/// Orchestrates the stages of the pipeline.
///
/// This module ties together lexing, parsing, semantic checking, lowering to
/// three-address code and execution.
pub mod interpreter;
/// General utilities shared by the back ends.
pub mod util;

/// Everything the front end produces for one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    /// The token list.
    pub tokens:  Vec<Token>,
    /// The syntax tree together with its symbol table.
    pub checked: CheckedProgram,
    /// The lowered instruction list.
    pub tac:     Vec<Instruction>,
}

/// Splits source text into tokens.
///
/// # Examples
/// ```
/// let tokens = minipython::tokenize("int x;").unwrap();
/// assert_eq!(tokens.len(), 3);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Ok(interpreter::lexer::tokenize(source)?)
}

/// Lexes and parses source text into a program.
pub fn parse(source: &str) -> Result<ast::Program, Error> {
    let tokens = tokenize(source)?;
    Ok(parse_program(&tokens)?)
}

/// Lexes, parses and checks source text.
///
/// # Examples
/// ```
/// let checked = minipython::check("int a, b;").unwrap();
/// assert_eq!(checked.symbols.to_string(), "a: int\nb: int\n");
///
/// assert!(minipython::check("print(y);").is_err());
/// ```
pub fn check(source: &str) -> Result<CheckedProgram, Error> {
    let program = parse(source)?;
    Ok(interpreter::semantic::check(program)?)
}

/// Runs the whole front end and keeps every intermediate result.
pub fn compile(source: &str) -> Result<Compilation, Error> {
    let tokens = tokenize(source)?;
    let program = parse_program(&tokens)?;
    let checked = interpreter::semantic::check(program)?;
    let tac = interpreter::tac::generate(&checked);

    Ok(Compilation { tokens,
                     checked,
                     tac })
}

/// Checks and executes a program by walking its syntax tree.
///
/// Values printed before a runtime error stay in `out`.
///
/// # Examples
/// ```
/// use minipython::{error::{Error, RuntimeError}, run};
///
/// let mut printed = Vec::new();
/// let err = run("int x; print(1); x = 1 / 0; print(x);", &mut printed).unwrap_err();
///
/// assert!(matches!(err, Error::Runtime(RuntimeError::DivisionByZero { .. })));
/// assert_eq!(printed, [1]);
/// ```
pub fn run(source: &str, out: &mut impl Output) -> Result<(), Error> {
    let checked = check(source)?;
    let mut context = Context::new(&checked.symbols);
    context.exec_program(&checked.program, out)?;
    Ok(())
}

/// Checks a program, lowers it to three-address code and executes that.
///
/// Produces the same output as [`run`] for every program.
pub fn run_tac(source: &str, out: &mut impl Output) -> Result<(), Error> {
    let compilation = compile(source)?;
    Machine::new().run(&compilation.tac, out)?;
    Ok(())
}
