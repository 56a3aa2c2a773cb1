use crate::{
    ast::Notation,
    error::RuntimeError,
    interpreter::evaluator::EvalResult,
    util::roman::{MAX_ROMAN, MIN_ROMAN, to_roman},
};

/// Renders a result in the notation of the expression that produced it.
///
/// Arabic results are printed as plain decimal integers and may be zero or
/// negative. Roman results must lie between 1 and 4000; 4000 is written
/// `MMMM`.
///
/// # Errors
/// Returns `RuntimeError::ResultOutOfRange` for a Roman result outside
/// `1..=4000`.
///
/// # Example
/// ```
/// use numerus::{ast::Notation, interpreter::formatter::render};
///
/// assert_eq!(render(-4, Notation::Arabic).unwrap(), "-4");
/// assert_eq!(render(11, Notation::Roman).unwrap(), "XI");
/// assert!(render(0, Notation::Roman).is_err());
/// ```
pub fn render(value: i64, notation: Notation) -> EvalResult<String> {
    match notation {
        Notation::Arabic => Ok(value.to_string()),
        Notation::Roman if (MIN_ROMAN..=MAX_ROMAN).contains(&value) => Ok(to_roman(value)),
        Notation::Roman => Err(RuntimeError::ResultOutOfRange { value,
                                                                min: MIN_ROMAN,
                                                                max: MAX_ROMAN }),
    }
}
