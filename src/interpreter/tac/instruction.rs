use std::fmt;

use crate::ast::BinaryOperator;

/// A value an instruction reads or writes.
///
/// Program variables are never operands: they are only reached through
/// `LOAD` and `STORE`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    /// A synthesized temporary, printed as `t<n>`.
    Temp(u32),
    /// An integer literal, printed as its decimal text.
    Const(i64),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temp(n) => write!(f, "t{n}"),
            Self::Const(value) => write!(f, "{value}"),
        }
    }
}

/// A jump target, printed as `L<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label(pub u32);

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// Arithmetic and comparison opcodes.
///
/// Comparisons store `1` or `0` in their destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TacOp {
    /// `ADD`
    Add,
    /// `SUB`
    Sub,
    /// `MUL`
    Mul,
    /// `DIV`
    Div,
    /// `LT`
    Lt,
    /// `GT`
    Gt,
    /// `LTE`
    Lte,
    /// `GTE`
    Gte,
    /// `EQ`
    Eq,
    /// `NEQ`
    Neq,
}

impl TacOp {
    /// Maps an arithmetic or comparison operator to its opcode.
    ///
    /// Logical operators have no opcode and return `None`; the generator
    /// lowers them onto comparisons and arithmetic.
    ///
    /// # Example
    /// ```
    /// use minipython::{ast::BinaryOperator, interpreter::tac::TacOp};
    ///
    /// assert_eq!(TacOp::from_operator(BinaryOperator::LessEqual), Some(TacOp::Lte));
    /// assert_eq!(TacOp::from_operator(BinaryOperator::And), None);
    /// ```
    #[must_use]
    pub const fn from_operator(op: BinaryOperator) -> Option<Self> {
        match op {
            BinaryOperator::Add => Some(Self::Add),
            BinaryOperator::Sub => Some(Self::Sub),
            BinaryOperator::Mul => Some(Self::Mul),
            BinaryOperator::Div => Some(Self::Div),
            BinaryOperator::Less => Some(Self::Lt),
            BinaryOperator::Greater => Some(Self::Gt),
            BinaryOperator::LessEqual => Some(Self::Lte),
            BinaryOperator::GreaterEqual => Some(Self::Gte),
            BinaryOperator::Equal => Some(Self::Eq),
            BinaryOperator::NotEqual => Some(Self::Neq),
            BinaryOperator::And | BinaryOperator::Or => None,
        }
    }

    /// The opcode mnemonic.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Lt => "LT",
            Self::Gt => "GT",
            Self::Lte => "LTE",
            Self::Gte => "GTE",
            Self::Eq => "EQ",
            Self::Neq => "NEQ",
        }
    }
}

impl fmt::Display for TacOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

/// One three-address instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `DECLARE var`: reserve a variable, initialised to `0`.
    Declare {
        /// Variable name.
        var: String,
    },
    /// `LOAD dest, var`: copy a variable into a temporary.
    Load {
        /// Destination temporary.
        dest: Operand,
        /// Source variable name.
        var:  String,
    },
    /// `STORE var, src`: write a value into a variable.
    Store {
        /// Destination variable name.
        var: String,
        /// Value to store.
        src: Operand,
    },
    /// `OP dest, lhs, rhs`
    Binary {
        /// The opcode.
        op:   TacOp,
        /// Destination temporary.
        dest: Operand,
        /// Left operand.
        lhs:  Operand,
        /// Right operand.
        rhs:  Operand,
    },
    /// `PRINT src`
    Print {
        /// Value to print.
        src: Operand,
    },
    /// `LABEL name`: jump target, no effect when executed.
    Label {
        /// The label.
        name: Label,
    },
    /// `JMP label`: unconditional jump.
    Jump {
        /// Target label.
        label: Label,
    },
    /// `JZ src, label`: jump when `src` is zero.
    JumpIfZero {
        /// Tested value.
        src:   Operand,
        /// Target label.
        label: Label,
    },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declare { var } => write!(f, "DECLARE {var}"),
            Self::Load { dest, var } => write!(f, "LOAD {dest}, {var}"),
            Self::Store { var, src } => write!(f, "STORE {var}, {src}"),
            Self::Binary { op, dest, lhs, rhs } => write!(f, "{op} {dest}, {lhs}, {rhs}"),
            Self::Print { src } => write!(f, "PRINT {src}"),
            Self::Label { name } => write!(f, "LABEL {name}"),
            Self::Jump { label } => write!(f, "JMP {label}"),
            Self::JumpIfZero { src, label } => write!(f, "JZ {src}, {label}"),
        }
    }
}

/// Renders an instruction list as text, one instruction per line.
#[must_use]
pub fn render(code: &[Instruction]) -> String {
    code.iter().map(|instruction| format!("{instruction}\n")).collect()
}
