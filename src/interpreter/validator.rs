use tracing::debug;

use crate::{
    ast::{Expression, Notation, Operator, RawExpression},
    error::ParseError,
    interpreter::parser::ParseResult,
    util::roman::{from_roman, is_roman},
};

/// Checks a raw expression and converts it into an [`Expression`].
///
/// An operand containing any of `I`, `V` or `X` is Roman, any other operand
/// is Arabic, and both operands must use the same notation. The one
/// exception is a Roman dividend over an all-zero divisor, such as `IV / 0`,
/// which is let through so that the evaluator reports the division by zero.
///
/// # Errors
/// - `MixedNotation` if one operand is Roman and the other Arabic.
/// - `UnknownOperator` if the operator symbol is not recognised.
/// - `InvalidNumeral` if an operand is not a canonical Roman numeral from
///   `I` to `X`, or not a decimal integer.
/// - `OperandOutOfRange` if an operand exceeds 10.
///
/// # Example
/// ```
/// use numerus::{
///     ast::{Notation, RawExpression},
///     error::ParseError,
///     interpreter::validator::validate,
/// };
///
/// let raw = RawExpression { first:    "VII".to_string(),
///                           operator: "/".to_string(),
///                           second:   "III".to_string(), };
/// let expr = validate(&raw).unwrap();
/// assert_eq!((expr.first(), expr.second()), (7, 3));
/// assert_eq!(expr.notation(), Notation::Roman);
///
/// let mixed = RawExpression { second: "3".to_string(),
///                             ..raw };
/// assert!(matches!(validate(&mixed), Err(ParseError::MixedNotation { .. })));
/// ```
pub fn validate(raw: &RawExpression) -> ParseResult<Expression> {
    let notation = match (classify(&raw.first), classify(&raw.second)) {
        (Notation::Roman, Notation::Arabic) if is_zero_divisor(raw) => Notation::Roman,
        (first, second) if first != second => {
            return Err(ParseError::MixedNotation { first:  raw.first.clone(),
                                                   second: raw.second.clone(), });
        },
        (first, _) => first,
    };

    let operator = raw.operator.parse::<Operator>()?;
    let first = to_integer(&raw.first, notation)?;
    let second = if is_zero_divisor(raw) { 0 } else { to_integer(&raw.second, notation)? };

    let expression = Expression::new(first, operator, second, notation)?;
    debug!(%expression, %notation, "validated expression");

    Ok(expression)
}

fn classify(text: &str) -> Notation {
    if is_roman(text) { Notation::Roman } else { Notation::Arabic }
}

/// Returns `true` for a division whose divisor is written as zeros only.
fn is_zero_divisor(raw: &RawExpression) -> bool {
    raw.operator == Operator::Div.symbol()
    && !raw.second.is_empty()
    && raw.second.bytes().all(|b| b == b'0')
}

/// Converts an operand to its integer value in the given notation.
fn to_integer(text: &str, notation: Notation) -> ParseResult<i64> {
    let value = match notation {
        Notation::Roman => from_roman(text),
        Notation::Arabic => text.parse::<i64>().ok(),
    };

    value.ok_or_else(|| ParseError::InvalidNumeral { text: text.to_string(),
                                                     notation })
}
