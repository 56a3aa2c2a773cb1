use logos::Logos;
use tracing::trace;

use crate::{ast::RawExpression, error::ParseError, interpreter::lexer::Token};

/// Result type used by the parser and validator.
pub type ParseResult<T> = Result<T, ParseError>;

/// Splits an expression into its two operand texts and its operator.
///
/// Tokens before the operator form the first operand and tokens after it the
/// second. Whitespace inside an operand is dropped, so `"1 0"` reads as
/// `"10"`. Operands may come out empty; checking them is left to
/// [`crate::interpreter::validator::validate`].
///
/// # Errors
/// Returns `ParseError::MalformedExpression` if:
/// - the input is blank,
/// - a character other than a digit, `I`, `V`, `X`, an operator or
///   whitespace occurs,
/// - a second operator occurs,
/// - no operator occurs at all.
///
/// # Example
/// ```
/// use numerus::interpreter::parser::parse;
///
/// let raw = parse("VII + III").unwrap();
/// assert_eq!(raw.first, "VII");
/// assert_eq!(raw.operator, "+");
/// assert_eq!(raw.second, "III");
///
/// assert!(parse("7 & 3").is_err());
/// assert!(parse("7 + 3 + 1").is_err());
/// ```
pub fn parse(source: &str) -> ParseResult<RawExpression> {
    if source.trim().is_empty() {
        return Err(ParseError::MalformedExpression { details:  "expression is blank".to_string(),
                                                     position: 0, });
    }

    let mut raw = RawExpression::default();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(Token::Numeral(text)) => {
                trace!(text, position, "operand characters");
                if raw.operator.is_empty() {
                    raw.first.push_str(text);
                } else {
                    raw.second.push_str(text);
                }
            },
            Ok(Token::Operator(symbol)) => {
                trace!(symbol, position, "operator");
                if !raw.operator.is_empty() {
                    return Err(ParseError::MalformedExpression {
                        details: format!("unexpected second operator '{symbol}' after '{}'",
                                         raw.operator),
                        position,
                    });
                }
                raw.operator.push_str(symbol);
            },
            Err(()) => {
                return Err(ParseError::MalformedExpression {
                    details: format!("unexpected character '{}'", lexer.slice()),
                    position,
                });
            },
        }
    }

    if raw.operator.is_empty() {
        return Err(ParseError::MalformedExpression { details:  "missing operator".to_string(),
                                                     position: source.len(), });
    }

    Ok(raw)
}
