use std::collections::HashMap;

use tracing::trace;

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{evaluator::output::Output, semantic::SymbolTable},
    util::num::is_truthy,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context owns the variable environment for one program run. It is
/// created from the symbol table of a checked program, with every declared
/// variable starting at `0`, and is mutated only by assignments.
///
/// ## Usage
///
/// ```
/// use minipython::{check, interpreter::evaluator::core::Context};
///
/// let checked = check("int x; x = 6 * 7; print(x);").unwrap();
/// let mut context = Context::new(&checked.symbols);
/// let mut printed = Vec::new();
///
/// context.exec_program(&checked.program, &mut printed).unwrap();
/// assert_eq!(printed, [42]);
/// assert_eq!(context.get_variable("x"), Some(42));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    variables: HashMap<String, i64>,
}

impl Context {
    /// Creates a context holding every declared variable, set to `0`.
    #[must_use]
    pub fn new(symbols: &SymbolTable) -> Self {
        let variables = symbols.iter().map(|(name, _)| (name.to_string(), 0)).collect();
        Self { variables }
    }

    /// Returns the current value of a variable.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<i64> {
        self.variables.get(name).copied()
    }

    /// Evaluates an expression and returns its integer value.
    ///
    /// Both operands of every binary operator are evaluated, left first,
    /// before the operator is applied; `&&` and `||` do not short-circuit.
    ///
    /// # Errors
    /// - `UnboundVariable` if a referenced variable has no slot.
    /// - `DivisionByZero` and `Overflow` from the arithmetic.
    pub fn eval(&self, expr: &Expr) -> EvalResult<i64> {
        match expr {
            Expr::Const { value, .. } => Ok(*value),
            Expr::VarRef { name, line } => {
                self.get_variable(name)
                    .ok_or_else(|| RuntimeError::UnboundVariable { name: name.clone(),
                                                                   line: *line, })
            },
            Expr::Unary { op, operand, line } => {
                let value = self.eval(operand)?;
                Self::eval_unary(*op, value, *line)
            },
            Expr::Binary { left, op, right, line } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *line)
            },
        }
    }

    /// Executes a single statement.
    ///
    /// Declarations are no-ops at run time since the environment is built
    /// up front. Assignments update the environment, `print` sends one value
    /// to `out`, and loops and conditionals test their condition for a
    /// non-zero value.
    ///
    /// # Errors
    /// Propagates the first `RuntimeError` raised while evaluating.
    pub fn exec_statement(&mut self, statement: &Statement, out: &mut dyn Output) -> EvalResult<()> {
        match statement {
            Statement::Decl { .. } => Ok(()),
            Statement::Assign { target, value, line } => {
                let value = self.eval(value)?;
                let slot = self.variables
                               .get_mut(target)
                               .ok_or_else(|| RuntimeError::UnboundVariable { name: target.clone(),
                                                                              line: *line, })?;
                *slot = value;
                trace!(variable = %target, value, "assigned");
                Ok(())
            },
            Statement::Print { value, .. } => {
                let value = self.eval(value)?;
                trace!(value, "printed");
                out.emit(value);
                Ok(())
            },
            Statement::While { condition, body, .. } => {
                while is_truthy(self.eval(condition)?) {
                    self.exec_block(body, out)?;
                }
                Ok(())
            },
            Statement::If { condition,
                            then_body,
                            else_body,
                            .. } => {
                if is_truthy(self.eval(condition)?) {
                    self.exec_block(then_body, out)
                } else {
                    self.exec_block(else_body, out)
                }
            },
        }
    }

    /// Executes the statements of a block in order.
    ///
    /// # Errors
    /// Stops at the first failing statement.
    pub fn exec_block(&mut self, block: &Block, out: &mut dyn Output) -> EvalResult<()> {
        for statement in &block.statements {
            self.exec_statement(statement, out)?;
        }
        Ok(())
    }

    /// Executes a whole program.
    ///
    /// # Errors
    /// Stops at the first failing statement; values printed before the
    /// failure have already been sent to `out`.
    pub fn exec_program(&mut self, program: &Program, out: &mut dyn Output) -> EvalResult<()> {
        for statement in &program.statements {
            self.exec_statement(statement, out)?;
        }
        Ok(())
    }
}
