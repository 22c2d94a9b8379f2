use std::{collections::HashMap, fmt};

use tracing::debug;

use crate::{
    ast::{Block, DeclaredType, Expr, Program, Statement},
    error::SemanticError,
};

/// Result type used by the semantic checker.
pub type CheckResult<T> = Result<T, SemanticError>;

/// Maps every declared variable to its type.
///
/// The language has a single global scope: names are never removed and a
/// name can be declared only once. Iteration follows declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: Vec<(String, DeclaredType)>,
    index:   HashMap<String, usize>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name` with type `ty`.
    ///
    /// Returns `false` and leaves the table untouched if the name is already
    /// declared.
    ///
    /// # Example
    /// ```
    /// use minipython::{ast::DeclaredType, interpreter::semantic::SymbolTable};
    ///
    /// let mut table = SymbolTable::new();
    /// assert!(table.declare("x", DeclaredType::Int));
    /// assert!(!table.declare("x", DeclaredType::Int));
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn declare(&mut self, name: &str, ty: DeclaredType) -> bool {
        if self.index.contains_key(name) {
            return false;
        }
        self.index.insert(name.to_string(), self.entries.len());
        self.entries.push((name.to_string(), ty));
        true
    }

    /// Returns `true` if `name` has been declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of declared variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(name, type)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, DeclaredType)> {
        self.entries.iter().map(|(name, ty)| (name.as_str(), *ty))
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, ty) in self.iter() {
            writeln!(f, "{name}: {ty}")?;
        }
        Ok(())
    }
}

/// A program that passed the semantic check, with the symbols it declares.
///
/// Both back ends only accept this type, so they never see a program with
/// undeclared or duplicate names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedProgram {
    /// The validated syntax tree.
    pub program: Program,
    /// Every variable the program declares.
    pub symbols: SymbolTable,
}

/// Validates declaration-before-use over a whole program.
///
/// Statements are visited in source order, descending into `while` and `if`
/// bodies and into every expression. A declaration adds its names to the
/// table; any later use of a name must find it there.
///
/// # Errors
/// - `DuplicateDeclaration` when a name is declared a second time.
/// - `UndeclaredVariable` when a name is read or assigned before it is
///   declared.
///
/// The first error aborts the check.
///
/// # Example
/// ```
/// use minipython::{error::SemanticError, interpreter::semantic::check, parse};
///
/// let program = parse("int x; int x;").unwrap();
/// let err = check(program).unwrap_err();
/// assert!(matches!(err, SemanticError::DuplicateDeclaration { ref name, .. } if name == "x"));
/// ```
pub fn check(program: Program) -> CheckResult<CheckedProgram> {
    let mut checker = Checker { symbols: SymbolTable::new() };
    checker.check_statements(&program.statements)?;

    debug!(symbols = checker.symbols.len(), "semantic check passed");
    Ok(CheckedProgram { program,
                        symbols: checker.symbols })
}

struct Checker {
    symbols: SymbolTable,
}

impl Checker {
    fn check_statements(&mut self, statements: &[Statement]) -> CheckResult<()> {
        statements.iter().try_for_each(|statement| self.check_statement(statement))
    }

    fn check_block(&mut self, block: &Block) -> CheckResult<()> {
        self.check_statements(&block.statements)
    }

    fn check_statement(&mut self, statement: &Statement) -> CheckResult<()> {
        match statement {
            Statement::Decl { names, ty, line } => {
                for name in names {
                    if !self.symbols.declare(name, *ty) {
                        return Err(SemanticError::DuplicateDeclaration { name: name.clone(),
                                                                         line: *line, });
                    }
                }
                Ok(())
            },
            Statement::Assign { target, value, line } => {
                self.require_declared(target, *line)?;
                self.check_expr(value)
            },
            Statement::Print { value, .. } => self.check_expr(value),
            Statement::While { condition, body, .. } => {
                self.check_expr(condition)?;
                self.check_block(body)
            },
            Statement::If { condition,
                            then_body,
                            else_body,
                            .. } => {
                self.check_expr(condition)?;
                self.check_block(then_body)?;
                self.check_block(else_body)
            },
        }
    }

    fn check_expr(&self, expr: &Expr) -> CheckResult<()> {
        match expr {
            Expr::Const { .. } => Ok(()),
            Expr::VarRef { name, line } => self.require_declared(name, *line),
            Expr::Unary { operand, .. } => self.check_expr(operand),
            Expr::Binary { left, right, .. } => {
                self.check_expr(left)?;
                self.check_expr(right)
            },
        }
    }

    fn require_declared(&self, name: &str, line: usize) -> CheckResult<()> {
        if self.symbols.contains(name) {
            Ok(())
        } else {
            Err(SemanticError::UndeclaredVariable { name: name.to_string(),
                                                    line })
        }
    }
}
