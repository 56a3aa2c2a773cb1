use std::{fmt, str::FromStr};

use crate::{
    error::ParseError,
    util::roman::{MAX_OPERAND, to_roman},
};

/// The numeral system an expression is written in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Notation {
    /// Decimal digits, e.g. `7`.
    Arabic,
    /// Roman letters, e.g. `VII`.
    Roman,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arabic => write!(f, "Arabic"),
            Self::Roman => write!(f, "Roman"),
        }
    }
}

/// Represents a binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Integer division (`/`)
    Div,
}

impl Operator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

impl FromStr for Operator {
    type Err = ParseError;

    /// Parses an operator from its symbol.
    ///
    /// # Errors
    /// Returns `ParseError::UnknownOperator` for anything other than `+`, `-`,
    /// `*` or `/`, including the empty string.
    ///
    /// # Example
    /// ```
    /// use numerus::{ast::Operator, error::ParseError};
    ///
    /// assert_eq!("*".parse::<Operator>(), Ok(Operator::Mul));
    /// assert!(matches!("%".parse::<Operator>(), Err(ParseError::UnknownOperator { .. })));
    /// ```
    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            _ => Err(ParseError::UnknownOperator { symbol: symbol.to_string() }),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An expression split into its textual parts, before any validation.
///
/// The parser produces this with whitespace already removed. Both operands
/// may be empty when the input lacks them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawExpression {
    /// Text of the operand left of the operator.
    pub first:    String,
    /// The operator symbol.
    pub operator: String,
    /// Text of the operand right of the operator.
    pub second:   String,
}

impl fmt::Display for RawExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' {} '{}'", self.first, self.operator, self.second)
    }
}

/// A validated expression ready for evaluation.
///
/// Both operands lie in `0..=MAX_OPERAND`; [`Expression::new`] is the only
/// way to build one.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Expression {
    first:    i64,
    operator: Operator,
    second:   i64,
    notation: Notation,
}

impl Expression {
    /// Builds an expression from already converted operands.
    ///
    /// # Errors
    /// Returns `ParseError::OperandOutOfRange` if either operand is negative
    /// or greater than [`MAX_OPERAND`].
    ///
    /// # Example
    /// ```
    /// use numerus::ast::{Expression, Notation, Operator};
    ///
    /// let expr = Expression::new(7, Operator::Div, 3, Notation::Roman).unwrap();
    /// assert_eq!(expr.to_string(), "VII / III");
    ///
    /// assert!(Expression::new(11, Operator::Add, 1, Notation::Arabic).is_err());
    /// ```
    pub fn new(first: i64,
               operator: Operator,
               second: i64,
               notation: Notation)
               -> Result<Self, ParseError> {
        for value in [first, second] {
            if !(0..=MAX_OPERAND).contains(&value) {
                return Err(ParseError::OperandOutOfRange { value,
                                                           max: MAX_OPERAND });
            }
        }

        Ok(Self { first,
                  operator,
                  second,
                  notation })
    }

    /// The left operand.
    #[must_use]
    pub const fn first(&self) -> i64 {
        self.first
    }

    /// The operator.
    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.operator
    }

    /// The right operand.
    #[must_use]
    pub const fn second(&self) -> i64 {
        self.second
    }

    /// The notation the operands were written in, and the result will be
    /// rendered in.
    #[must_use]
    pub const fn notation(&self) -> Notation {
        self.notation
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operand = |value: i64| match self.notation {
            Notation::Roman if value > 0 => to_roman(value),
            _ => value.to_string(),
        };
        write!(f,
               "{} {} {}",
               operand(self.first),
               self.operator,
               operand(self.second))
    }
}
