/// Parsing errors.
///
/// Defines every error that can occur while splitting the input into its
/// parts and turning those parts into a validated expression: unexpected
/// characters, mixed notations, invalid numerals and out-of-range operands.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the errors raised while computing and rendering the result,
/// namely division by zero and results that have no Roman representation.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error returned by [`crate::calc`].
///
/// Stage errors convert into this type with `?`, and its `Display` is the
/// message of the wrapped error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input could not be turned into a valid expression.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression was valid but its result could not be computed or
    /// rendered.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
