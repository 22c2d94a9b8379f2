use crate::{
    ast::UnaryOperator,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::{from_bool, is_truthy, negate},
};

impl Context {
    /// Evaluates a unary operation on an integer.
    ///
    /// - `Negate`: checked arithmetic negation.
    /// - `Not`: `1` for zero, `0` for anything else.
    ///
    /// # Example
    /// ```
    /// use minipython::{ast::UnaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_unary(UnaryOperator::Negate, 5, 1).unwrap(), -5);
    /// assert_eq!(Context::eval_unary(UnaryOperator::Not, 0, 1).unwrap(), 1);
    /// assert_eq!(Context::eval_unary(UnaryOperator::Not, 7, 1).unwrap(), 0);
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: i64, line: usize) -> EvalResult<i64> {
        match op {
            UnaryOperator::Negate => negate(value, line),
            UnaryOperator::Not => Ok(from_bool(!is_truthy(value))),
        }
    }
}
