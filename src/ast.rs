use std::fmt;

/// The type a variable is declared with.
///
/// Only `int` has runtime semantics; the other type keywords are reserved by
/// the lexer but rejected by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredType {
    /// A signed 64-bit integer.
    Int,
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "int"),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every variant carries the source line it started on so that the checker
/// and the evaluator can report precise errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Const {
        /// The constant value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    VarRef {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation or logical not).
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A binary operation (arithmetic, comparison or logic).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-`).
    Negate,
    /// Logical not (`!`); yields 1 for 0 and 0 otherwise.
    Not,
}

/// Binary operators, listed from the tightest-binding tier to the loosest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Multiplication (`*`).
    Mul,
    /// Integer division truncating toward zero (`/`).
    Div,
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// Logical and (`&&`), both operands always evaluated.
    And,
    /// Logical or (`||`), both operands always evaluated.
    Or,
}

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    ///
    /// # Example
    /// ```
    /// use minipython::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::LessEqual.symbol(), "<=");
    /// ```
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Mul => "*",
            Self::Div => "/",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
            Self::Not => write!(f, "!"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const { value, .. } => write!(f, "{value}"),
            Self::VarRef { name, .. } => write!(f, "{name}"),
            Self::Unary { op, operand, .. } => write!(f, "({op}{operand})"),
            Self::Binary { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// An ordered sequence of statements delimited by braces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    /// The statements in execution order.
    pub statements: Vec<Statement>,
}

impl Block {
    /// Returns `true` if the block holds no statements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A statement in the language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Declaration of one or more variables, e.g. `int x, y;`.
    Decl {
        /// The declared names in source order.
        names: Vec<String>,
        /// The declared type.
        ty:    DeclaredType,
        /// Line number in the source code.
        line:  usize,
    },
    /// Assignment to a declared variable, e.g. `x = x + 1;`.
    Assign {
        /// Name of the assigned variable.
        target: String,
        /// Expression for the new value.
        value:  Expr,
        /// Line number in the source code.
        line:   usize,
    },
    /// `print(expr);`
    Print {
        /// Expression whose value is printed.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// `while (cond) { ... }`
    While {
        /// Loop condition; the body runs while it is non-zero.
        condition: Expr,
        /// Loop body.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// `if (cond) { ... } else { ... }`; the else block may be empty.
    If {
        /// Branch condition.
        condition: Expr,
        /// Statements run when the condition is non-zero.
        then_body: Block,
        /// Statements run otherwise.
        else_body: Block,
        /// Line number in the source code.
        line:      usize,
    },
}

/// The root of a parsed source file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Program")?;
        for statement in &self.statements {
            write_statement(f, statement, 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statement(f, self, 0)
    }
}

fn write_statement(f: &mut fmt::Formatter<'_>, statement: &Statement, depth: usize) -> fmt::Result {
    let pad = "  ".repeat(depth);
    match statement {
        Statement::Decl { names, ty, .. } => writeln!(f, "{pad}Decl {ty} {}", names.join(", ")),
        Statement::Assign { target, value, .. } => writeln!(f, "{pad}Assign {target} = {value}"),
        Statement::Print { value, .. } => writeln!(f, "{pad}Print {value}"),
        Statement::While { condition, body, .. } => {
            writeln!(f, "{pad}While {condition}")?;
            write_block(f, body, depth + 1)
        },
        Statement::If { condition,
                        then_body,
                        else_body,
                        .. } => {
            writeln!(f, "{pad}If {condition}")?;
            write_block(f, then_body, depth + 1)?;
            if !else_body.is_empty() {
                writeln!(f, "{pad}Else")?;
                write_block(f, else_body, depth + 1)?;
            }
            Ok(())
        },
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, block: &Block, depth: usize) -> fmt::Result {
    writeln!(f, "{}Block", "  ".repeat(depth))?;
    for statement in &block.statements {
        write_statement(f, statement, depth + 1)?;
    }
    Ok(())
}
