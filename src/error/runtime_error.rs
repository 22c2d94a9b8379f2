#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during execution.
///
/// When the lowered code is executed there are no source lines left; the
/// `line` field then holds the 1-based index of the failing instruction.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Read a variable that has no slot in the environment.
    UnboundVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A jump targets a label that is never defined.
    UndefinedLabel {
        /// The label name.
        label: String,
        /// The instruction index of the jump.
        line:  usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::UnboundVariable { name, line } => {
                write!(f, "Error on line {line}: Unbound variable '{name}'.")
            },
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::UndefinedLabel { label, line } => {
                write!(f, "Error on line {line}: Jump to undefined label '{label}'.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
