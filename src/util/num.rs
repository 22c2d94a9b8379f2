use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Adds two integers, failing on overflow.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the sum does not fit an `i64`.
///
/// ## Example
/// ```
/// use minipython::util::num::add;
///
/// assert_eq!(add(2, 3, 1).unwrap(), 5);
/// assert!(add(i64::MAX, 1, 1).is_err());
/// ```
pub fn add(left: i64, right: i64, line: usize) -> EvalResult<i64> {
    left.checked_add(right).ok_or(RuntimeError::Overflow { line })
}

/// Subtracts `right` from `left`, failing on overflow.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the difference does not fit an `i64`.
pub fn sub(left: i64, right: i64, line: usize) -> EvalResult<i64> {
    left.checked_sub(right).ok_or(RuntimeError::Overflow { line })
}

/// Multiplies two integers, failing on overflow.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the product does not fit an `i64`.
pub fn mul(left: i64, right: i64, line: usize) -> EvalResult<i64> {
    left.checked_mul(right).ok_or(RuntimeError::Overflow { line })
}

/// Divides `left` by `right`, truncating toward zero.
///
/// ## Errors
/// - `RuntimeError::DivisionByZero` if `right` is zero.
/// - `RuntimeError::Overflow` for `i64::MIN / -1`.
///
/// ## Example
/// ```
/// use minipython::{error::RuntimeError, util::num::div};
///
/// assert_eq!(div(7, 2, 1).unwrap(), 3);
/// assert_eq!(div(-7, 2, 1).unwrap(), -3);
/// assert_eq!(div(1, 0, 4), Err(RuntimeError::DivisionByZero { line: 4 }));
/// ```
pub fn div(left: i64, right: i64, line: usize) -> EvalResult<i64> {
    if right == 0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    left.checked_div(right).ok_or(RuntimeError::Overflow { line })
}

/// Negates an integer, failing on overflow.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` for `i64::MIN`.
pub fn negate(value: i64, line: usize) -> EvalResult<i64> {
    value.checked_neg().ok_or(RuntimeError::Overflow { line })
}

/// Encodes a truth value the way the language stores it: `1` or `0`.
#[must_use]
pub fn from_bool(value: bool) -> i64 {
    i64::from(value)
}

/// Any non-zero integer counts as true.
#[must_use]
pub const fn is_truthy(value: i64) -> bool {
    value != 0
}
