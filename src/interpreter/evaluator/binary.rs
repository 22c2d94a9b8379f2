use crate::{
    ast::BinaryOperator,
    interpreter::evaluator::core::{Context, EvalResult},
    util::num::{add, div, from_bool, is_truthy, mul, sub},
};

impl Context {
    /// Evaluates a binary operation between two integers.
    ///
    /// Arithmetic uses checked 64-bit integer math, with division truncating
    /// toward zero. Comparisons and logical operators yield `1` for true and
    /// `0` for false; any non-zero operand counts as true.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use minipython::{ast::BinaryOperator, interpreter::evaluator::core::Context};
    ///
    /// assert_eq!(Context::eval_binary(BinaryOperator::Add, 3, 4, 1).unwrap(), 7);
    /// assert_eq!(Context::eval_binary(BinaryOperator::Less, 3, 4, 1).unwrap(), 1);
    /// assert_eq!(Context::eval_binary(BinaryOperator::And, 2, 0, 1).unwrap(), 0);
    /// assert!(Context::eval_binary(BinaryOperator::Div, 1, 0, 1).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: i64, right: i64, line: usize) -> EvalResult<i64> {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };

        match op {
            Add => add(left, right, line),
            Sub => sub(left, right, line),
            Mul => mul(left, right, line),
            Div => div(left, right, line),
            Less => Ok(from_bool(left < right)),
            Greater => Ok(from_bool(left > right)),
            LessEqual => Ok(from_bool(left <= right)),
            GreaterEqual => Ok(from_bool(left >= right)),
            Equal => Ok(from_bool(left == right)),
            NotEqual => Ok(from_bool(left != right)),
            And => Ok(from_bool(is_truthy(left) && is_truthy(right))),
            Or => Ok(from_bool(is_truthy(left) || is_truthy(right))),
        }
    }
}
