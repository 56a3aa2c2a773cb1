/// Represents all errors that can occur while computing or rendering a
/// result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Attempted division by zero.
    #[error("Error: Division by zero: {dividend} / 0.")]
    DivisionByZero {
        /// The value that was being divided.
        dividend: i64,
    },
    /// A Roman result has no representation in the supported range.
    #[error("Error: Result {value} cannot be written in Roman numerals. Roman results must lie between {min} and {max}.")]
    ResultOutOfRange {
        /// The computed result.
        value: i64,
        /// The smallest representable value.
        min:   i64,
        /// The largest representable value.
        max:   i64,
    },
}
