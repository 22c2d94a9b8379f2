#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors found by the semantic checker.
pub enum SemanticError {
    /// A variable was declared more than once.
    DuplicateDeclaration {
        /// The name of the variable.
        name: String,
        /// The source line of the second declaration.
        line: usize,
    },
    /// A variable was used or assigned before being declared.
    UndeclaredVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateDeclaration { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' is already declared.")
            },
            Self::UndeclaredVariable { name, line } => {
                write!(f, "Error on line {line}: Variable '{name}' is not declared.")
            },
        }
    }
}

impl std::error::Error for SemanticError {}
