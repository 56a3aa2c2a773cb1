use crate::ast::Notation;

/// Represents all errors that can occur while parsing and validating an
/// expression.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input is blank, contains an unexpected character, or does not
    /// contain exactly one operator.
    #[error("Error at position {position}: Malformed expression: {details}.")]
    MalformedExpression {
        /// What is wrong with the input.
        details:  String,
        /// Byte offset into the input where the problem was found.
        position: usize,
    },
    /// One operand is written in Roman numerals and the other is not.
    #[error("Error: Operands '{first}' and '{second}' must use the same notation.")]
    MixedNotation {
        /// Text of the left operand.
        first:  String,
        /// Text of the right operand.
        second: String,
    },
    /// An operand is not a valid numeral in its notation.
    #[error("Error: '{text}' is not a valid {notation} numeral.")]
    InvalidNumeral {
        /// The operand text.
        text:     String,
        /// The notation the text was read in.
        notation: Notation,
    },
    /// An operand lies outside the accepted range.
    #[error("Error: Operand {value} is out of range. Operands must lie between 0 and {max}.")]
    OperandOutOfRange {
        /// The operand value.
        value: i64,
        /// The largest accepted operand.
        max:   i64,
    },
    /// The operator symbol is not one of `+`, `-`, `*` or `/`.
    #[error("Error: Unknown operator '{symbol}'.")]
    UnknownOperator {
        /// The symbol found.
        symbol: String,
    },
}
