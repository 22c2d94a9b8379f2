#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// No token rule matches the text at this position.
    UnrecognizedToken {
        /// The offending source text.
        text:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The 1-based column of the first offending character.
        column: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedToken { text, line, column } => {
                write!(f, "Error on line {line}, column {column}: Unrecognized token '{text}'.")
            },
        }
    }
}

impl std::error::Error for LexError {}
