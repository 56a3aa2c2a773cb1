//! # numerus
//!
//! numerus evaluates a single binary arithmetic expression whose operands are
//! written either in Arabic digits or in Roman numerals, and renders the
//! result in the same notation.
//!
//! ```
//! assert_eq!(numerus::calc("7 / 3").unwrap(), "2");
//! assert_eq!(numerus::calc("VII / III").unwrap(), "II");
//! assert_eq!(numerus::calc("X + I").unwrap(), "XI");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{evaluator::evaluate, formatter::render, parser::parse, validator::validate},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the raw expression produced by the parser, the
/// validated expression consumed by the evaluator, and the operator and
/// notation types they are built from.
///
/// # Responsibilities
/// - Keeps operand text and operator symbol together before validation.
/// - Guarantees through its constructor that validated operands are in
///   range.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while parsing,
/// validating, evaluating or rendering an expression. Every error is fatal
/// for the call that raised it and is returned to the caller unchanged.
///
/// # Responsibilities
/// - Separates input errors from errors found while computing the result.
/// - Carries the offending text, value or input position for reporting.
pub mod error;
/// Orchestrates the stages of evaluation.
///
/// This module ties together lexing, parsing, validation, evaluation and
/// formatting. Each stage is a plain function that consumes the output of
/// the previous one.
pub mod interpreter;
/// General utilities shared across stages.
///
/// # Responsibilities
/// - Hold the Roman numeral tables and conversions.
/// - Set up logging for the binary.
pub mod util;

/// Result type returned by [`calc`].
pub type CalcResult<T> = Result<T, Error>;

/// Evaluates an expression and returns its result as text.
///
/// The input holds two operands and one of the operators `+`, `-`, `*` or
/// `/`, separated by optional whitespace. Both operands are written either
/// in Arabic digits or as Roman numerals from `I` to `X`, and neither may
/// exceed 10. The result is rendered in the notation of the operands.
///
/// # Errors
/// Returns an error if the input is malformed, mixes notations, contains an
/// invalid or out-of-range operand, divides by zero, or produces a Roman
/// result outside `1..=4000`.
///
/// # Examples
/// ```
/// use numerus::{
///     calc,
///     error::{Error, ParseError, RuntimeError},
/// };
///
/// assert_eq!(calc("3 - 7").unwrap(), "-4");
/// assert_eq!(calc("X * X").unwrap(), "C");
///
/// assert!(matches!(calc("VII + 3"), Err(Error::Parse(ParseError::MixedNotation { .. }))));
/// assert!(matches!(calc("I - V"),
///                  Err(Error::Runtime(RuntimeError::ResultOutOfRange { .. }))));
/// ```
pub fn calc(source: &str) -> CalcResult<String> {
    let raw = parse(source)?;
    debug!(%raw, "parsed expression");

    let expression = validate(&raw)?;
    let value = evaluate(&expression)?;
    let rendered = render(value, expression.notation())?;
    debug!(source, %rendered, "rendered result");

    Ok(rendered)
}
