/// Lexing errors.
///
/// Raised when the source contains text that no token rule matches.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree:
/// unexpected or missing tokens, premature end of input and literals that do
/// not fit the integer type.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while executing a program,
/// either by walking the tree or by running the lowered three-address code.
pub mod runtime_error;
/// Semantic errors.
///
/// Declaration-before-use violations found by the checker.
pub mod semantic_error;

use std::fmt;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use semantic_error::SemanticError;

/// Any failure produced by the pipeline, tagged with the stage that raised
/// it.
///
/// Stages fail fast, so a run yields at most one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The lexer met text it could not classify.
    Lex(LexError),
    /// The token stream does not follow the grammar.
    Parse(ParseError),
    /// The program uses names inconsistently with its declarations.
    Semantic(SemanticError),
    /// Execution failed.
    Runtime(RuntimeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Semantic(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Semantic(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<SemanticError> for Error {
    fn from(e: SemanticError) -> Self {
        Self::Semantic(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
