use tracing::debug;

use crate::{
    ast::{Expression, Operator},
    error::RuntimeError,
};

/// Result type used by the evaluator and formatter.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Applies the operator of a validated expression to its operands.
///
/// Division truncates toward zero. The operand bounds of [`Expression`]
/// keep every operation well inside the range of `i64`.
///
/// # Errors
/// Returns `RuntimeError::DivisionByZero` when dividing by zero.
///
/// # Example
/// ```
/// use numerus::{
///     ast::{Expression, Notation, Operator},
///     interpreter::evaluator::evaluate,
/// };
///
/// let expr = Expression::new(7, Operator::Div, 3, Notation::Arabic).unwrap();
/// assert_eq!(evaluate(&expr), Ok(2));
///
/// let expr = Expression::new(3, Operator::Sub, 7, Notation::Arabic).unwrap();
/// assert_eq!(evaluate(&expr), Ok(-4));
/// ```
pub fn evaluate(expression: &Expression) -> EvalResult<i64> {
    let (a, b) = (expression.first(), expression.second());

    let result = match expression.operator() {
        Operator::Add => a + b,
        Operator::Sub => a - b,
        Operator::Mul => a * b,
        Operator::Div => a.checked_div(b)
                          .ok_or(RuntimeError::DivisionByZero { dividend: a })?,
    };
    debug!(%expression, result, "evaluated expression");

    Ok(result)
}
